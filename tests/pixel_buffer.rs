#![allow(missing_docs)]
use rmt_strip::{Error, Hsv, PixelBuffer, Rgbw, colors};

#[test]
fn new_buffer_is_all_black() {
    let buffer = PixelBuffer::<4>::new();

    assert!(buffer.iter().all(|pixel| *pixel == Rgbw::BLACK));
}

#[test]
fn set_mutates_exactly_one_pixel() {
    let mut buffer = PixelBuffer::<4>::new();

    buffer.set_rgb(2, 9, 8, 7).unwrap();

    assert_eq!(buffer.pixel(2).unwrap(), Rgbw::rgb(9, 8, 7));
    for index in [0, 1, 3] {
        assert_eq!(buffer.pixel(index).unwrap(), Rgbw::BLACK);
    }
}

#[test]
fn set_rgb_leaves_white_at_zero() {
    let mut buffer = PixelBuffer::<1>::new();

    buffer.set_rgb(0, 255, 255, 255).unwrap();

    assert_eq!(buffer.pixel(0).unwrap().w, 0);
}

#[test]
fn out_of_range_set_leaves_buffer_unmodified() {
    let mut buffer = PixelBuffer::<3>::new();
    buffer.set_rgb(1, 1, 2, 3).unwrap();
    let before = *buffer;

    let result = buffer.set_rgb(3, 255, 255, 255);

    assert!(matches!(
        result,
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert_eq!(*buffer, before);
}

#[test]
fn out_of_range_read_is_an_error() {
    let buffer = PixelBuffer::<2>::new();

    assert!(matches!(
        buffer.pixel(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn fill_and_clear_cover_every_pixel() {
    let mut buffer = PixelBuffer::<5>::new();

    buffer.fill(colors::ORANGE);
    assert!(buffer.iter().all(|pixel| *pixel == colors::ORANGE.into()));

    buffer.clear();
    assert!(buffer.iter().all(|pixel| *pixel == Rgbw::BLACK));
}

#[test]
fn set_hsv_stores_the_rgb_equivalent() {
    let mut buffer = PixelBuffer::<1>::new();

    buffer.set_hsv(0, Hsv::new(120, 255, 255)).unwrap();

    assert_eq!(buffer.pixel(0).unwrap(), Rgbw::rgb(0, 255, 0));
}

#[test]
fn zero_length_buffer_rejects_index_zero() {
    let mut buffer = PixelBuffer::<0>::new();

    assert!(matches!(
        buffer.set_rgb(0, 1, 2, 3),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
}

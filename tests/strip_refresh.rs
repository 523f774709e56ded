#![allow(missing_docs)]
use rmt_strip::pulse::{Pulse, PulsePalette};
use rmt_strip::{
    ColorLayout, Error, LedModel, LedStrip, PulseTransmitter, Result, StripConfig,
    pulse_buffer_size,
};

/// Records every transmitted frame for inspection.
#[derive(Default)]
struct CaptureTransmitter {
    frames: Vec<Vec<Pulse>>,
}

impl PulseTransmitter for CaptureTransmitter {
    fn transmit<I>(&mut self, pulses: I) -> Result<()>
    where
        I: IntoIterator<Item = Pulse>,
    {
        self.frames.push(pulses.into_iter().collect());
        Ok(())
    }
}

/// Fails every frame the way an overrun hardware driver would.
struct FailingTransmitter;

impl PulseTransmitter for FailingTransmitter {
    fn transmit<I>(&mut self, _pulses: I) -> Result<()>
    where
        I: IntoIterator<Item = Pulse>,
    {
        Err(Error::BufferTooSmall {
            needed: 1,
            capacity: 0,
        })
    }
}

fn palette(config: &StripConfig) -> PulsePalette {
    PulsePalette::new(config.model.timing(), config.resolution_hz, config.invert_out)
        .expect("valid timing")
}

#[test]
fn refresh_sends_one_symbol_per_bit_plus_reset() {
    let config = StripConfig::default();
    let mut strip = LedStrip::<_, 3>::new(CaptureTransmitter::default(), config).unwrap();

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    let frame = &transmitter.frames[0];
    // The end marker is the hardware driver's concern, hence the -1.
    assert_eq!(frame.len(), pulse_buffer_size(3, 3) - 1);
    assert_eq!(*frame.last().unwrap(), palette(&config).reset());
}

#[test]
fn red_pixel_on_grb_leads_with_a_zero_byte() {
    let config = StripConfig::default();
    let palette = palette(&config);
    let mut strip = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config).unwrap();
    strip.set_pixel(0, 255, 0, 0).unwrap();

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    let frame = &transmitter.frames[0];
    // Byte 0 is green (0x00), byte 1 red (0xFF), byte 2 blue (0x00).
    assert!(frame[..8].iter().all(|pulse| *pulse == palette.bit(false)));
    assert!(frame[8..16].iter().all(|pulse| *pulse == palette.bit(true)));
    assert!(frame[16..24].iter().all(|pulse| *pulse == palette.bit(false)));
}

#[test]
fn bits_go_out_most_significant_first() {
    let config = StripConfig {
        layout: ColorLayout::Rgb,
        ..StripConfig::default()
    };
    let palette = palette(&config);
    let mut strip = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config).unwrap();
    strip.set_pixel(0, 0b1000_0001, 0, 0).unwrap();

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    let frame = &transmitter.frames[0];
    assert_eq!(frame[0], palette.bit(true));
    assert!(frame[1..7].iter().all(|pulse| *pulse == palette.bit(false)));
    assert_eq!(frame[7], palette.bit(true));
}

#[test]
fn refresh_without_changes_repeats_the_frame() {
    let mut strip =
        LedStrip::<_, 4>::new(CaptureTransmitter::default(), StripConfig::default()).unwrap();
    strip.set_pixel(1, 10, 20, 30).unwrap();

    strip.refresh().unwrap();
    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    assert_eq!(transmitter.frames.len(), 2);
    assert_eq!(transmitter.frames[0], transmitter.frames[1]);
}

#[test]
fn rgbw_layout_widens_the_frame() {
    let config = StripConfig {
        model: LedModel::Sk6812,
        layout: ColorLayout::Grbw,
        ..StripConfig::default()
    };
    let mut strip = LedStrip::<_, 2>::new(CaptureTransmitter::default(), config).unwrap();

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    assert_eq!(transmitter.frames[0].len(), pulse_buffer_size(2, 4) - 1);
}

#[test]
fn inverted_output_flips_every_level() {
    let config = StripConfig {
        invert_out: true,
        ..StripConfig::default()
    };
    let mut strip = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config).unwrap();
    strip.set_pixel(0, 255, 255, 255).unwrap();

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    let frame = &transmitter.frames[0];
    // Data bits start low, return high; the trailing reset holds high.
    assert!(frame[..24].iter().all(|pulse| !pulse.level0 && pulse.level1));
    let reset = frame.last().unwrap();
    assert!(reset.level0 && reset.level1);
}

#[test]
fn transmission_failure_is_surfaced() {
    let mut strip = LedStrip::<_, 2>::new(FailingTransmitter, StripConfig::default()).unwrap();

    assert!(strip.refresh().is_err());
}

#[test]
fn invalid_timing_fails_construction() {
    let config = StripConfig {
        resolution_hz: 100_000,
        ..StripConfig::default()
    };

    let result = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config);

    assert!(matches!(result, Err(Error::InvalidTiming)));
}

#[test]
fn out_of_range_custom_layout_fails_construction() {
    let config = StripConfig {
        layout: ColorLayout::Custom {
            r: 9,
            g: 1,
            b: 2,
            w: None,
        },
        ..StripConfig::default()
    };

    let result = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config);

    assert!(matches!(
        result,
        Err(Error::InvalidLayout {
            position: 9,
            limit: 3
        })
    ));
}

#[test]
fn zero_resolution_fails_construction() {
    let config = StripConfig {
        resolution_hz: 0,
        ..StripConfig::default()
    };

    let result = LedStrip::<_, 1>::new(CaptureTransmitter::default(), config);

    assert!(matches!(result, Err(Error::InvalidResolution)));
}

#[test]
fn zero_length_strip_still_latches() {
    let mut strip =
        LedStrip::<_, 0>::new(CaptureTransmitter::default(), StripConfig::default()).unwrap();
    assert!(strip.is_empty());

    strip.refresh().unwrap();

    let transmitter = strip.into_transmitter();
    assert_eq!(transmitter.frames[0].len(), 1);
}

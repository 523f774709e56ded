//! Color model for LED strips: RGB(W) component records, HSV input, and the
//! HSV→RGB conversion behind [`crate::LedStrip::set_pixel_hsv`].

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

pub use smart_leds::RGB8;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// One LED's stored color: red, green, blue, and an optional white channel.
///
/// The white channel is only transmitted when the strip's
/// [`ColorLayout`](crate::format::ColorLayout) has four components; on
/// 3-component layouts it is simply ignored at encode time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    /// Red component, 0–255.
    pub r: u8,
    /// Green component, 0–255.
    pub g: u8,
    /// Blue component, 0–255.
    pub b: u8,
    /// White component, 0–255. Zero for RGB-only colors.
    pub w: u8,
}

impl Rgbw {
    /// Create a color with all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Create an RGB color with the white channel at zero.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: 0 }
    }

    /// All channels off.
    pub const BLACK: Self = Self::new(0, 0, 0, 0);
}

impl From<Rgb> for Rgbw {
    fn from(color: Rgb) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

/// HSV color as accepted by the public pixel-set surface.
///
/// `hue` is in **degrees** (0..=360; larger values wrap), `sat` and `val`
/// are 0–255. The degree convention matches the usual smart-LED vendor
/// APIs; [`hsv_to_rgb`] is the normalized-float conversion underneath.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue in degrees, 0..=360.
    pub hue: u16,
    /// Saturation, 0 (gray) to 255 (fully saturated).
    pub sat: u8,
    /// Value (brightness), 0 (off) to 255 (full).
    pub val: u8,
}

impl Hsv {
    /// Create an HSV color. `hue` is in degrees.
    #[must_use]
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Convert to 8-bit RGB, rounding each channel to nearest.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = f32::from(self.hue % 360) / 360.0;
        let s = f32::from(self.sat) / 255.0;
        let v = f32::from(self.val) / 255.0;
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Rgb::new(
            (r * 255.0 + 0.5) as u8,
            (g * 255.0 + 0.5) as u8,
            (b * 255.0 + 0.5) as u8,
        )
    }
}

impl From<Hsv> for Rgbw {
    fn from(color: Hsv) -> Self {
        color.to_rgb().into()
    }
}

/// Convert normalized HSV to normalized RGB.
///
/// All inputs are fractions in `[0, 1]`; `h` is a fraction of a full 360°
/// turn, not degrees. Inputs outside `[0, 1]` give unspecified results;
/// clamp upstream. Use [`Hsv::to_rgb`] for the degree-scaled 8-bit form.
#[must_use]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h6 = h * 6.0;
    // Truncation is floor here: h6 is non-negative.
    let sector = (h6 as u32) % 6;
    let f = h6 - (h6 as u32) as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

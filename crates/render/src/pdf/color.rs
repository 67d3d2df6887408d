/// RGB triple with components in `0.0..=1.0`, as PDF colour operators expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Parses `#RRGGBB`. Anything else yields `None`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }
}

pub const BRAND_RED: Rgb = Rgb(0.702, 0.106, 0.106);
pub const ACCENT_ORANGE: Rgb = Rgb(0.961, 0.486, 0.0);
pub const BODY_TEXT: Rgb = Rgb(0.204, 0.286, 0.369);
pub const MUTED_TEXT: Rgb = Rgb(0.498, 0.549, 0.553);
pub const CARD_BACKGROUND: Rgb = Rgb(0.976, 0.976, 0.976);
pub const GRID_LINE: Rgb = Rgb(0.8, 0.8, 0.8);
pub const RADAR_FILL: Rgb = Rgb(0.992, 0.898, 0.8);

/// Colour for a tier hex code, falling back to body text for malformed input.
#[must_use]
pub fn tier_color(hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap_or(BODY_TEXT)
}

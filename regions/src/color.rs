use palette::{IntoColor, Oklch, Srgb};

/// A concrete 24-bit terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().strip_prefix('#').unwrap_or(input.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Mix towards `other` by `amount` (0.0 = self, 1.0 = other) in OKLCH.
    pub fn mix(self, other: Rgb, amount: f32) -> Rgb {
        let t = amount.clamp(0.0, 1.0);
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let (from_l, from_c, from_h) = rgb_to_oklch(self);
        let (to_l, to_c, to_h) = rgb_to_oklch(other);

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        // Achromatic endpoints have no meaningful hue; borrow the other one.
        let (from_h, to_h) = match (from_c < 1e-4, to_c < 1e-4) {
            (true, false) => (to_h, to_h),
            (false, true) => (from_h, from_h),
            _ => (from_h, to_h),
        };
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        oklch_to_rgb(l, c, h)
    }

    /// Paint this colour over `background` at the given opacity.
    pub fn over(self, background: Rgb, opacity: f32) -> Rgb {
        background.mix(self, opacity)
    }
}

/// A colour as written in configuration: either concrete or a theme token.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Oklch { l: f32, c: f32, h: f32 },
    /// Named theme colour, e.g. `color-primary`.
    Token(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn token(name: impl Into<String>) -> Self {
        Self::Token(name.into())
    }

    /// The concrete colour, or `None` for tokens that need a theme.
    pub fn concrete(&self) -> Option<Rgb> {
        match self {
            Self::Rgb(rgb) => Some(*rgb),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Token(_) => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    );
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("0a0B0c"), Some(Rgb::new(10, 11, 12)));
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
        assert_eq!(Rgb::parse_hex("#ææ00"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        let rgb = Rgb::new(18, 52, 86);
        assert_eq!(Rgb::parse_hex(&rgb.to_hex()), Some(rgb));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::new(200, 30, 40);
        let b = Rgb::new(10, 10, 10);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, -3.0), a);
        assert_eq!(a.mix(b, 7.0), b);
    }

    #[test]
    fn test_mix_greys_stays_grey() {
        let mid = Rgb::new(0, 0, 0).mix(Rgb::new(255, 255, 255), 0.5);
        assert!(mid.r.abs_diff(mid.g) <= 1);
        assert!(mid.g.abs_diff(mid.b) <= 1);
        assert!(mid.r > 60 && mid.r < 200);
    }

    #[test]
    fn test_token_is_not_concrete() {
        assert_eq!(Color::token("color-primary").concrete(), None);
        assert_eq!(Color::rgb(1, 2, 3).concrete(), Some(Rgb::new(1, 2, 3)));
    }
}

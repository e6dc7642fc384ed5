//! Colour tokens shared by every component.
//!
//! Components never look colours up from ambient state; a [`Theme`] is passed
//! to the painter and every [`Color::Token`] is resolved through it.

use crate::color::{Color, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub color_primary: Rgb,
    pub color_default: Rgb,
    pub background: Rgb,
    pub background_darker: Rgb,
    pub text_bright: Rgb,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            color_primary: Rgb::new(0xe4, 0x2a, 0x4b),
            color_default: Rgb::new(0x9a, 0x9a, 0xa6),
            background: Rgb::new(0x1c, 0x1c, 0x22),
            background_darker: Rgb::new(0x11, 0x11, 0x15),
            text_bright: Rgb::new(0xf4, 0xf4, 0xf6),
        }
    }

    /// Look up a token by name. A leading `--` is accepted.
    pub fn token(&self, name: &str) -> Option<Rgb> {
        let name = name.strip_prefix("--").unwrap_or(name);
        match name {
            "color-primary" | "primary" => Some(self.color_primary),
            "color-default" | "default" => Some(self.color_default),
            "background" => Some(self.background),
            "background-darker" => Some(self.background_darker),
            "text-bright" => Some(self.text_bright),
            _ => None,
        }
    }

    /// Resolve any colour to a concrete one. Unknown tokens fall back to
    /// `text_bright` so content stays readable.
    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Token(name) => self.token(name).unwrap_or(self.text_bright),
            other => other.concrete().unwrap_or(self.text_bright),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names() {
        let theme = Theme::new();
        assert_eq!(theme.token("color-primary"), Some(theme.color_primary));
        assert_eq!(theme.token("--background-darker"), Some(theme.background_darker));
        assert_eq!(theme.token("text-bright"), Some(theme.text_bright));
        assert_eq!(theme.token("nope"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_text() {
        let theme = Theme::new();
        assert_eq!(theme.resolve(&Color::token("missing")), theme.text_bright);
        assert_eq!(theme.resolve(&Color::rgb(9, 8, 7)), Rgb::new(9, 8, 7));
    }
}

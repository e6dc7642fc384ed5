use std::num::NonZeroU16;

use crate::animation::SpringConfig;
use crate::color::Color;

use super::{IndicatorStyle, MountBehavior};

/// Base colour plus an optional contrast colour for the mark.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorColors {
    pub base: Color,
    pub contrast: Option<Color>,
}

impl IndicatorColors {
    pub fn new(base: Color) -> Self {
        Self {
            base,
            contrast: None,
        }
    }

    pub fn with_contrast(mut self, contrast: Color) -> Self {
        self.contrast = Some(contrast);
        self
    }

    /// The mark colour; falls back to `base`.
    pub fn contrast(&self) -> &Color {
        self.contrast.as_ref().unwrap_or(&self.base)
    }
}

impl Default for IndicatorColors {
    fn default() -> Self {
        Self::new(Color::token("color-primary"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOptions {
    /// Nominal render size in pixels; the terminal painter maps it to cells.
    pub size: NonZeroU16,
    pub colors: IndicatorColors,
    pub style: IndicatorStyle,
    pub mount: MountBehavior,
    pub spring: SpringConfig,
}

impl IndicatorOptions {
    pub const DEFAULT_SIZE: NonZeroU16 = NonZeroU16::MIN.saturating_add(23);
    /// Sizes below this render as a single cell.
    pub const BRACKETED_MIN_SIZE: u16 = 16;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: NonZeroU16) -> Self {
        self.size = size;
        self
    }

    pub fn colors(mut self, colors: IndicatorColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn style(mut self, style: IndicatorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn mount(mut self, mount: MountBehavior) -> Self {
        self.mount = mount;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Width in terminal cells: `( )` / `[ ]` or a single glyph.
    pub fn cell_width(&self) -> u16 {
        if self.size.get() >= Self::BRACKETED_MIN_SIZE {
            3
        } else {
            1
        }
    }
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            colors: IndicatorColors::default(),
            style: IndicatorStyle::default(),
            mount: MountBehavior::default(),
            spring: SpringConfig::default(),
        }
    }
}

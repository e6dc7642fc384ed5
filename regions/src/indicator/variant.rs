use std::fmt;
use std::str::FromStr;

use crate::error::RegionsError;

/// Which toggle indicator to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Ring with an inner disc that scales and fades in.
    #[default]
    RadioButton,
    /// Rounded frame with a checkmark stroke that draws in.
    Checkbox,
}

impl Variant {
    pub const fn toggled(self) -> Self {
        match self {
            Self::RadioButton => Self::Checkbox,
            Self::Checkbox => Self::RadioButton,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RadioButton => "radiobutton",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = RegionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radiobutton" | "radio" => Ok(Self::RadioButton),
            "checkbox" | "check" => Ok(Self::Checkbox),
            _ => Err(RegionsError::UnknownVariant(s.to_string())),
        }
    }
}

/// How the indicator uses its base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// Ring/frame drawn in the base colour, mark in the contrast colour.
    #[default]
    Outlined,
    /// Checked indicators get a base-coloured fill behind the mark.
    Filled,
}

impl FromStr for IndicatorStyle {
    type Err = RegionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outlined" => Ok(Self::Outlined),
            "filled" => Ok(Self::Filled),
            _ => Err(RegionsError::UnknownStyle(s.to_string())),
        }
    }
}

/// What the first frame after construction shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountBehavior {
    /// Start unchecked and animate to the requested state.
    #[default]
    Animate,
    /// Start directly in the requested state.
    Snap,
}

impl FromStr for MountBehavior {
    type Err = RegionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "animate" => Ok(Self::Animate),
            "snap" => Ok(Self::Snap),
            _ => Err(RegionsError::UnknownMount(s.to_string())),
        }
    }
}

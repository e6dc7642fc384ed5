//! User settings read from an optional `config.toml`.

use std::fs;
use std::io;
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};

use log::{debug, LevelFilter};
use regions::{
    Color, IndicatorColors, IndicatorOptions, IndicatorStyle, MountBehavior, Rgb, Theme, Variant,
};
use serde::Deserialize;
use thiserror::Error;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid colour for {field}: '{value}' (expected #rrggbb)")]
    InvalidColor { field: &'static str, value: String },
    #[error("indicator_size must be at least 1")]
    InvalidSize,
    #[error("invalid value for {field}: '{value}'")]
    Invalid { field: &'static str, value: String },
}

/// The file as written by the user. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    indicator: Option<String>,
    indicator_size: Option<u16>,
    indicator_style: Option<String>,
    indicator_color: Option<String>,
    indicator_contrast: Option<String>,
    mount: Option<String>,
    reduced_motion: bool,
    default_region: Option<u32>,
    log_level: Option<String>,
    theme: RawTheme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTheme {
    color_primary: Option<String>,
    color_default: Option<String>,
    background: Option<String>,
    background_darker: Option<String>,
    text_bright: Option<String>,
}

/// Resolved settings with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: Variant,
    pub indicator: IndicatorOptions,
    pub reduced_motion: bool,
    pub default_region: Option<u32>,
    pub log_level: LevelFilter,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            indicator: IndicatorOptions::default(),
            reduced_motion: false,
            default_region: None,
            log_level: LevelFilter::Info,
            theme: Theme::default(),
        }
    }
}

/// Load settings from the platform config directory.
pub fn load() -> Result<Settings, SettingsError> {
    match paths::config_file() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!("loading settings from {}", path.display());
    parse(&text)
}

pub fn parse(text: &str) -> Result<Settings, SettingsError> {
    let raw: RawSettings = toml::from_str(text)?;
    raw.resolve()
}

impl RawSettings {
    fn resolve(self) -> Result<Settings, SettingsError> {
        let defaults = Settings::default();

        let variant = parse_field("indicator", self.indicator, defaults.variant)?;
        let style = parse_field("indicator_style", self.indicator_style, IndicatorStyle::default())?;
        let mount = parse_field("mount", self.mount, MountBehavior::default())?;
        let log_level = parse_field("log_level", self.log_level, defaults.log_level)?;

        let size = match self.indicator_size {
            Some(size) => NonZeroU16::new(size).ok_or(SettingsError::InvalidSize)?,
            None => IndicatorOptions::DEFAULT_SIZE,
        };

        let mut colors = match self.indicator_color {
            Some(value) => IndicatorColors::new(color_value("indicator_color", value)?),
            None => IndicatorColors::default(),
        };
        if let Some(value) = self.indicator_contrast {
            colors = colors.with_contrast(color_value("indicator_contrast", value)?);
        }

        Ok(Settings {
            variant,
            indicator: IndicatorOptions::new()
                .size(size)
                .style(style)
                .mount(mount)
                .colors(colors),
            reduced_motion: self.reduced_motion,
            default_region: self.default_region,
            log_level,
            theme: self.theme.resolve(defaults.theme)?,
        })
    }
}

impl RawTheme {
    fn resolve(self, mut theme: Theme) -> Result<Theme, SettingsError> {
        let overrides = [
            ("theme.color_primary", self.color_primary, &mut theme.color_primary),
            ("theme.color_default", self.color_default, &mut theme.color_default),
            ("theme.background", self.background, &mut theme.background),
            ("theme.background_darker", self.background_darker, &mut theme.background_darker),
            ("theme.text_bright", self.text_bright, &mut theme.text_bright),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                *slot = hex(field, value)?;
            }
        }
        Ok(theme)
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, SettingsError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| SettingsError::Invalid { field, value }),
        None => Ok(default),
    }
}

fn hex(field: &'static str, value: String) -> Result<Rgb, SettingsError> {
    Rgb::parse_hex(&value).ok_or(SettingsError::InvalidColor { field, value })
}

/// A `#rrggbb` literal or a theme token name.
fn color_value(field: &'static str, value: String) -> Result<Color, SettingsError> {
    if value.trim_start().starts_with('#') {
        hex(field, value).map(Color::Rgb)
    } else if Theme::default().token(&value).is_some() {
        Ok(Color::token(value))
    } else {
        Err(SettingsError::InvalidColor { field, value })
    }
}

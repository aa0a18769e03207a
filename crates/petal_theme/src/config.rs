//! Theme overrides loaded from TOML
//!
//! An override document customizes the built-in theme without defining a new
//! one from scratch:
//!
//! ```toml
//! scheme = "dark"
//!
//! [colors]
//! primary = "#7048E8"
//!
//! [radius]
//! default = 8.0
//! ```
//!
//! Unknown keys are rejected at parse time so typos fail loudly instead of
//! silently keeping the default.

use crate::theme::{ColorScheme, DefaultTheme};
use petal_core::{Color, ColorParseError};
use serde::Deserialize;
use thiserror::Error;

/// Failure loading a theme override document
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    #[error("failed to parse theme overrides")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color for `{field}`")]
    InvalidColor {
        field: &'static str,
        source: ColorParseError,
    },
}

/// Raw document as written on disk; colors stay strings until validated
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOverrides {
    scheme: Option<ColorScheme>,
    colors: RawColorOverrides,
    radius: RawRadiusOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawColorOverrides {
    primary: Option<String>,
    secondary: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    error: Option<String>,
    info: Option<String>,
    background: Option<String>,
    surface: Option<String>,
    text_primary: Option<String>,
    accent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawRadiusOverrides {
    default: Option<f32>,
    full: Option<f32>,
}

/// Validated theme overrides
#[derive(Clone, Debug, Default)]
pub struct ThemeOverrides {
    pub scheme: Option<ColorScheme>,
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub success: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
    pub info: Option<Color>,
    pub background: Option<Color>,
    pub surface: Option<Color>,
    pub text_primary: Option<Color>,
    pub accent: Option<Color>,
    pub radius_default: Option<f32>,
    pub radius_full: Option<f32>,
}

fn parse_color(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<Color>, ThemeConfigError> {
    match raw {
        Some(value) => Color::parse_hex(&value)
            .map(Some)
            .map_err(|source| ThemeConfigError::InvalidColor { field, source }),
        None => Ok(None),
    }
}

impl ThemeOverrides {
    /// Parse and validate an override document
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeConfigError> {
        let raw: RawOverrides = toml::from_str(input)?;

        let overrides = Self {
            scheme: raw.scheme,
            primary: parse_color("colors.primary", raw.colors.primary)?,
            secondary: parse_color("colors.secondary", raw.colors.secondary)?,
            success: parse_color("colors.success", raw.colors.success)?,
            warning: parse_color("colors.warning", raw.colors.warning)?,
            error: parse_color("colors.error", raw.colors.error)?,
            info: parse_color("colors.info", raw.colors.info)?,
            background: parse_color("colors.background", raw.colors.background)?,
            surface: parse_color("colors.surface", raw.colors.surface)?,
            text_primary: parse_color("colors.text_primary", raw.colors.text_primary)?,
            accent: parse_color("colors.accent", raw.colors.accent)?,
            radius_default: raw.radius.default,
            radius_full: raw.radius.full,
        };

        tracing::debug!(scheme = ?overrides.scheme, "theme overrides loaded");
        Ok(overrides)
    }

    /// Apply the overrides to a theme, returning the customized theme
    ///
    /// Total: fields not present in the document keep the theme's values.
    /// The `scheme` field does not participate here; see [`resolve`](Self::resolve).
    pub fn apply(&self, mut theme: DefaultTheme) -> DefaultTheme {
        if let Some(primary) = self.primary {
            theme.colors.primary = primary;
            theme.colors.primary_hover = primary.darken(0.05);
            theme.colors.primary_active = primary.darken(0.1);
            theme.colors.border_focus = primary;
            theme.colors.text_link = primary;
            theme.colors.selection = primary.with_alpha(0.2);
        }
        if let Some(secondary) = self.secondary {
            theme.colors.secondary = secondary;
            theme.colors.secondary_hover = secondary.darken(0.05);
            theme.colors.secondary_active = secondary.darken(0.1);
        }
        if let Some(success) = self.success {
            theme.colors.success = success;
            theme.colors.success_bg = success.with_alpha(0.1);
        }
        if let Some(warning) = self.warning {
            theme.colors.warning = warning;
            theme.colors.warning_bg = warning.with_alpha(0.1);
        }
        if let Some(error) = self.error {
            theme.colors.error = error;
            theme.colors.error_bg = error.with_alpha(0.1);
            theme.colors.border_error = error;
        }
        if let Some(info) = self.info {
            theme.colors.info = info;
            theme.colors.info_bg = info.with_alpha(0.1);
        }
        if let Some(background) = self.background {
            theme.colors.background = background;
        }
        if let Some(surface) = self.surface {
            theme.colors.surface = surface;
        }
        if let Some(text_primary) = self.text_primary {
            theme.colors.text_primary = text_primary;
        }
        if let Some(accent) = self.accent {
            theme.colors.accent = accent;
            theme.colors.accent_subtle = accent.with_alpha(0.1);
        }
        if let Some(radius) = self.radius_default {
            theme.radii.radius_default = radius;
        }
        if let Some(radius) = self.radius_full {
            theme.radii.radius_full = radius;
        }
        theme
    }

    /// Pick the base variant by the document's `scheme` and apply overrides
    pub fn resolve(&self) -> DefaultTheme {
        let base = match self.scheme.unwrap_or_default() {
            ColorScheme::Light => DefaultTheme::light(),
            ColorScheme::Dark => DefaultTheme::dark(),
        };
        self.apply(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_empty_document_keeps_defaults() {
        let overrides = ThemeOverrides::from_toml_str("").unwrap();
        let theme = overrides.resolve();
        let stock = DefaultTheme::light();
        assert_eq!(theme.colors().primary, stock.colors().primary);
        assert_eq!(theme.color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_scheme_and_color_overrides() {
        let doc = r##"
            scheme = "dark"

            [colors]
            primary = "#7048E8"
        "##;
        let overrides = ThemeOverrides::from_toml_str(doc).unwrap();
        let theme = overrides.resolve();

        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
        assert_eq!(theme.colors().primary, Color::from_hex(0x7048E8));
        // Dependent colors follow the override
        assert_eq!(theme.colors().border_focus, Color::from_hex(0x7048E8));
        // Untouched fields keep the dark defaults
        assert_eq!(
            theme.colors().background,
            DefaultTheme::dark().colors().background
        );
    }

    #[test]
    fn test_radius_override() {
        let doc = "[radius]\ndefault = 2.0\n";
        let overrides = ThemeOverrides::from_toml_str(doc).unwrap();
        let theme = overrides.resolve();
        assert_eq!(theme.radii().radius_default, 2.0);
        assert_eq!(theme.radii().radius_full, DefaultTheme::light().radii().radius_full);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let doc = "[colors]\nprimary = \"not-a-color\"\n";
        let err = ThemeOverrides::from_toml_str(doc).unwrap_err();
        assert!(matches!(
            err,
            ThemeConfigError::InvalidColor {
                field: "colors.primary",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let doc = "[colors]\nprimry = \"#FFFFFF\"\n";
        assert!(matches!(
            ThemeOverrides::from_toml_str(doc),
            Err(ThemeConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_short_hex_accepted() {
        let doc = "[colors]\nsurface = \"#FFF\"\n";
        let overrides = ThemeOverrides::from_toml_str(doc).unwrap();
        assert_eq!(overrides.surface, Some(Color::WHITE));
    }
}

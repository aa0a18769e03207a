//! Theme trait, the built-in default theme, and theme bundles

use crate::tokens::*;
use petal_core::Color;
use serde::{Deserialize, Serialize};

/// Light or dark variant of a theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A complete set of design tokens for one color scheme
pub trait Theme: Send + Sync {
    /// Human-readable theme name
    fn name(&self) -> &str;

    /// Which scheme this variant renders
    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;

    fn typography(&self) -> &TypographyTokens;

    fn spacing(&self) -> &SpacingTokens;

    fn radii(&self) -> &RadiusTokens;

    fn shadows(&self) -> &ShadowTokens;
}

/// The built-in theme
#[derive(Clone, Debug)]
pub struct DefaultTheme {
    pub(crate) scheme: ColorScheme,
    pub(crate) colors: ColorTokens,
    pub(crate) typography: TypographyTokens,
    pub(crate) spacing: SpacingTokens,
    pub(crate) radii: RadiusTokens,
    pub(crate) shadows: ShadowTokens,
}

impl DefaultTheme {
    /// Create the light variant
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                primary: Color::from_hex(0x228BE6),
                primary_hover: Color::from_hex(0x1C7ED6),
                primary_active: Color::from_hex(0x1971C2),
                secondary: Color::from_hex(0x868E96),
                secondary_hover: Color::from_hex(0x495057),
                secondary_active: Color::from_hex(0x343A40),
                // Semantic colors
                success: Color::from_hex(0x40C057),
                success_bg: Color::from_hex(0x40C057).with_alpha(0.1),
                warning: Color::from_hex(0xFAB005),
                warning_bg: Color::from_hex(0xFAB005).with_alpha(0.1),
                error: Color::from_hex(0xFA5252),
                error_bg: Color::from_hex(0xFA5252).with_alpha(0.1),
                info: Color::from_hex(0x15AABF),
                info_bg: Color::from_hex(0x15AABF).with_alpha(0.1),
                // Surfaces
                background: Color::from_hex(0xF8F9FA),
                surface: Color::WHITE,
                surface_elevated: Color::from_hex(0xF1F3F5),
                surface_overlay: Color::from_hex(0xE9ECEF),
                // Text
                text_primary: Color::from_hex(0x212529),
                text_secondary: Color::from_hex(0x868E96),
                text_tertiary: Color::from_hex(0xADB5BD),
                text_inverse: Color::WHITE,
                text_link: Color::from_hex(0x228BE6),
                // Borders
                border: Color::rgba(0.0, 0.0, 0.0, 0.1),
                border_hover: Color::rgba(0.0, 0.0, 0.0, 0.15),
                border_focus: Color::from_hex(0x228BE6),
                border_error: Color::from_hex(0xFA5252),
                // Inputs
                input_bg: Color::WHITE,
                input_bg_hover: Color::from_hex(0xFCFCFC),
                input_bg_focus: Color::WHITE,
                input_bg_disabled: Color::from_hex(0xF1F3F5),
                // Selection
                selection: Color::from_hex(0x228BE6).with_alpha(0.2),
                selection_text: Color::from_hex(0x212529),
                // Accent
                accent: Color::from_hex(0x228BE6),
                accent_subtle: Color::from_hex(0x228BE6).with_alpha(0.1),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::light(),
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary: Color::from_hex(0x339AF0),
                primary_hover: Color::from_hex(0x4DABF7),
                primary_active: Color::from_hex(0x74C0FC),
                secondary: Color::from_hex(0x909296),
                secondary_hover: Color::from_hex(0xA6A7AB),
                secondary_active: Color::from_hex(0xC1C2C5),
                // Semantic colors
                success: Color::from_hex(0x51CF66),
                success_bg: Color::from_hex(0x51CF66).with_alpha(0.15),
                warning: Color::from_hex(0xFCC419),
                warning_bg: Color::from_hex(0xFCC419).with_alpha(0.15),
                error: Color::from_hex(0xFF6B6B),
                error_bg: Color::from_hex(0xFF6B6B).with_alpha(0.15),
                info: Color::from_hex(0x22B8CF),
                info_bg: Color::from_hex(0x22B8CF).with_alpha(0.15),
                // Surfaces
                background: Color::from_hex(0x1A1B1E),
                surface: Color::from_hex(0x25262B),
                surface_elevated: Color::from_hex(0x2C2E33),
                surface_overlay: Color::from_hex(0x141517),
                // Text
                text_primary: Color::from_hex(0xC1C2C5),
                text_secondary: Color::from_hex(0x909296),
                text_tertiary: Color::from_hex(0x5C5F66),
                text_inverse: Color::from_hex(0x1A1B1E),
                text_link: Color::from_hex(0x339AF0),
                // Borders
                border: Color::rgba(1.0, 1.0, 1.0, 0.1),
                border_hover: Color::rgba(1.0, 1.0, 1.0, 0.15),
                border_focus: Color::from_hex(0x339AF0),
                border_error: Color::from_hex(0xFF6B6B),
                // Inputs
                input_bg: Color::from_hex(0x25262B),
                input_bg_hover: Color::from_hex(0x2C2E33),
                input_bg_focus: Color::from_hex(0x25262B),
                input_bg_disabled: Color::from_hex(0x141517),
                // Selection
                selection: Color::from_hex(0x339AF0).with_alpha(0.3),
                selection_text: Color::from_hex(0xC1C2C5),
                // Accent
                accent: Color::from_hex(0x339AF0),
                accent_subtle: Color::from_hex(0x339AF0).with_alpha(0.15),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::dark(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("petal", Self::light(), Self::dark())
    }
}

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        "petal"
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }
}

/// A named pair of light and dark theme variants
pub struct ThemeBundle {
    name: String,
    light: Box<dyn Theme>,
    dark: Box<dyn Theme>,
}

impl ThemeBundle {
    /// Create a bundle from light and dark variants
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Box::new(light),
            dark: Box::new(dark),
        }
    }

    /// Bundle name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant for the given scheme
    pub fn variant(&self, scheme: ColorScheme) -> &dyn Theme {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_variants() {
        let light = DefaultTheme::light();
        let dark = DefaultTheme::dark();

        assert_eq!(light.color_scheme(), ColorScheme::Light);
        assert_eq!(dark.color_scheme(), ColorScheme::Dark);
        assert_ne!(light.colors().background, dark.colors().background);
    }

    #[test]
    fn test_bundle_selects_variant_by_scheme() {
        let bundle = DefaultTheme::bundle();
        assert_eq!(bundle.name(), "petal");
        assert_eq!(
            bundle.variant(ColorScheme::Light).color_scheme(),
            ColorScheme::Light
        );
        assert_eq!(
            bundle.variant(ColorScheme::Dark).color_scheme(),
            ColorScheme::Dark
        );
    }

    #[test]
    fn test_light_text_readable_on_light_surface() {
        let light = DefaultTheme::light();
        let colors = light.colors();
        assert!(colors.surface.luminance() > colors.text_primary.luminance());
    }
}

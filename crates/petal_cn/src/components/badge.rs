//! Badge component for labels and status indicators
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! // Filled badge (default)
//! cn::badge("New")
//!
//! // Light badge with a custom color
//! cn::badge("Beta")
//!     .variant(BadgeVariant::Light)
//!     .color(Color::from_hex(0x7048E8))
//!
//! // Dot badge for status rows
//! cn::badge("Online")
//!     .variant(BadgeVariant::Dot)
//! ```

use crate::mods::Mods;
use petal_core::Color;
use petal_theme::{
    resolve_variant_colors, ColorToken, ColorVariant, RadiusToken, StyleVars, ThemeState,
    VarValue, VarsResolver,
};

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled with the badge color
    #[default]
    Filled,
    /// Tinted background, colored text
    Light,
    /// Border only, transparent background
    Outline,
    /// Neutral body with a colored status dot
    Dot,
    /// No background at all
    Transparent,
    /// White background, colored text
    White,
    /// Surface-toned neutral badge
    Default,
}

impl BadgeVariant {
    fn color_variant(&self) -> ColorVariant {
        match self {
            BadgeVariant::Filled => ColorVariant::Filled,
            BadgeVariant::Light => ColorVariant::Light,
            BadgeVariant::Outline => ColorVariant::Outline,
            BadgeVariant::Transparent => ColorVariant::Transparent,
            BadgeVariant::White => ColorVariant::White,
            BadgeVariant::Dot | BadgeVariant::Default => ColorVariant::Default,
        }
    }
}

/// Badge size scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl BadgeSize {
    fn height(&self) -> f32 {
        match self {
            BadgeSize::ExtraSmall => 16.0,
            BadgeSize::Small => 18.0,
            BadgeSize::Medium => 20.0,
            BadgeSize::Large => 26.0,
            BadgeSize::ExtraLarge => 32.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self {
            BadgeSize::ExtraSmall => 6.0,
            BadgeSize::Small => 8.0,
            BadgeSize::Medium => 10.0,
            BadgeSize::Large => 12.0,
            BadgeSize::ExtraLarge => 16.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            BadgeSize::ExtraSmall => 9.0,
            BadgeSize::Small => 10.0,
            BadgeSize::Medium => 11.0,
            BadgeSize::Large => 12.0,
            BadgeSize::ExtraLarge => 13.0,
        }
    }
}

/// Every recognized badge option
pub struct BadgeConfig {
    pub label: String,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
    /// Render as a circle of the badge height
    pub circle: bool,
    /// Explicit corner radius, overriding the full-radius token
    pub radius: Option<f32>,
    /// Badge color, overriding the theme primary
    pub color: Option<Color>,
    /// Pick the filled foreground by background luminance
    pub auto_contrast: bool,
}

/// The badge component
pub struct Badge {
    config: BadgeConfig,
    resolver: Option<VarsResolver>,
}

impl Badge {
    /// Create a badge with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: BadgeConfig {
                label: label.into(),
                variant: BadgeVariant::default(),
                size: BadgeSize::default(),
                circle: false,
                radius: None,
                color: None,
                auto_contrast: false,
            },
            resolver: None,
        }
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.config.size = size;
        self
    }

    /// Render as a circle
    pub fn circle(mut self, circle: bool) -> Self {
        self.config.circle = circle;
        self
    }

    /// Override the corner radius
    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = Some(radius);
        self
    }

    /// Override the badge color
    pub fn color(mut self, color: Color) -> Self {
        self.config.color = Some(color);
        self
    }

    /// Pick the filled foreground by background luminance
    pub fn auto_contrast(mut self, auto_contrast: bool) -> Self {
        self.config.auto_contrast = auto_contrast;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The label text
    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let size = self.config.size;
        let colors = resolve_variant_colors(
            theme,
            self.config.color,
            self.config.variant.color_variant(),
            self.config.auto_contrast,
        );

        let radius = if self.config.circle {
            size.height() / 2.0
        } else {
            self.config
                .radius
                .unwrap_or_else(|| theme.radius(RadiusToken::Full))
        };

        let mut vars = StyleVars::new();
        vars.set("--badge-height", VarValue::Px(size.height()));
        vars.set("--badge-padding-x", VarValue::Px(size.padding_x()));
        vars.set("--badge-fz", VarValue::Px(size.font_size()));
        vars.set("--badge-radius", VarValue::Px(radius));
        vars.set("--badge-bg", VarValue::Color(colors.background));
        vars.set("--badge-color", VarValue::Color(colors.foreground));
        vars.set_optional("--badge-bd", colors.border.map(VarValue::Color));
        if self.config.variant == BadgeVariant::Dot {
            let dot = self
                .config
                .color
                .unwrap_or_else(|| theme.color(ColorToken::Primary));
            vars.set("--badge-dot-color", VarValue::Color(dot));
        }

        match &self.resolver {
            Some(resolver) => resolver(theme, &vars),
            None => vars,
        }
    }

    /// Resolve style variables against the process-wide theme
    pub fn vars(&self) -> StyleVars {
        self.vars_with(&ThemeState::get())
    }

    /// Active state flags
    pub fn mods(&self) -> Mods {
        let mut mods = Mods::new();
        mods.set("circle", self.config.circle);
        mods
    }
}

/// Create a badge with a label
pub fn badge(label: impl Into<String>) -> Badge {
    Badge::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::DefaultTheme;

    fn light_theme() -> ThemeState {
        ThemeState::from_theme(&DefaultTheme::light())
    }

    #[test]
    fn test_filled_badge_vars() {
        let theme = light_theme();
        let vars = badge("New").vars_with(&theme);

        assert_eq!(vars.get("--badge-height"), Some(&VarValue::Px(20.0)));
        assert_eq!(
            vars.get("--badge-bg"),
            Some(&VarValue::Color(theme.color(ColorToken::Primary)))
        );
        assert_eq!(vars.get("--badge-color"), Some(&VarValue::Color(Color::WHITE)));
        assert!(vars.get("--badge-bd").is_none());
        assert!(vars.get("--badge-dot-color").is_none());
    }

    #[test]
    fn test_dot_badge_emits_dot_color() {
        let theme = light_theme();
        let purple = Color::from_hex(0x7048E8);
        let vars = badge("Online")
            .variant(BadgeVariant::Dot)
            .color(purple)
            .vars_with(&theme);

        assert_eq!(vars.get("--badge-dot-color"), Some(&VarValue::Color(purple)));
        // The body stays neutral for dot badges
        assert_eq!(
            vars.get("--badge-bg"),
            Some(&VarValue::Color(theme.color(ColorToken::Surface)))
        );
    }

    #[test]
    fn test_circle_overrides_radius() {
        let theme = light_theme();
        let vars = badge("3")
            .size(BadgeSize::Large)
            .circle(true)
            .radius(4.0)
            .vars_with(&theme);
        assert_eq!(vars.get("--badge-radius"), Some(&VarValue::Px(13.0)));
        assert!(badge("3").circle(true).mods().has("circle"));
    }

    #[test]
    fn test_auto_contrast_darkens_foreground_on_light_color() {
        let theme = light_theme();
        let yellow = Color::from_hex(0xFFD43B);
        let vars = badge("Warn")
            .color(yellow)
            .auto_contrast(true)
            .vars_with(&theme);

        match vars.get("--badge-color") {
            Some(VarValue::Color(fg)) => assert!(fg.luminance() < 0.5),
            other => panic!("expected a color, got {other:?}"),
        }
    }

    #[test]
    fn test_outline_badge_has_border() {
        let theme = light_theme();
        let vars = badge("Draft")
            .variant(BadgeVariant::Outline)
            .vars_with(&theme);
        assert_eq!(
            vars.get("--badge-bd"),
            Some(&VarValue::Color(theme.color(ColorToken::Primary)))
        );
        assert_eq!(
            vars.get("--badge-bg"),
            Some(&VarValue::Color(Color::TRANSPARENT))
        );
    }
}

//! Design token groups
//!
//! Plain structs of colors and dimensions that themes fill in. Components
//! never hardcode palette values; they resolve tokens through
//! [`ThemeState`](crate::ThemeState).
//!
//! Each group has a matching lookup enum so callers can resolve a token by
//! name. Resolution is total: every enum value maps to a field.

use petal_core::Color;

// =============================================================================
// Colors
// =============================================================================

/// Semantic color tokens for a theme variant
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Primary
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    // Secondary
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,
    // Semantic
    pub success: Color,
    pub success_bg: Color,
    pub warning: Color,
    pub warning_bg: Color,
    pub error: Color,
    pub error_bg: Color,
    pub info: Color,
    pub info_bg: Color,
    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_overlay: Color,
    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,
    pub text_link: Color,
    // Borders
    pub border: Color,
    pub border_hover: Color,
    pub border_focus: Color,
    pub border_error: Color,
    // Inputs
    pub input_bg: Color,
    pub input_bg_hover: Color,
    pub input_bg_focus: Color,
    pub input_bg_disabled: Color,
    // Selection
    pub selection: Color,
    pub selection_text: Color,
    // Accent
    pub accent: Color,
    pub accent_subtle: Color,
}

/// Lookup names for [`ColorTokens`] fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,
    SecondaryActive,
    Success,
    SuccessBg,
    Warning,
    WarningBg,
    Error,
    ErrorBg,
    Info,
    InfoBg,
    Background,
    Surface,
    SurfaceElevated,
    SurfaceOverlay,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    TextLink,
    Border,
    BorderHover,
    BorderFocus,
    BorderError,
    InputBg,
    InputBgHover,
    InputBgFocus,
    InputBgDisabled,
    Selection,
    SelectionText,
    Accent,
    AccentSubtle,
}

impl ColorTokens {
    /// Resolve a token to its color
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryHover => self.secondary_hover,
            ColorToken::SecondaryActive => self.secondary_active,
            ColorToken::Success => self.success,
            ColorToken::SuccessBg => self.success_bg,
            ColorToken::Warning => self.warning,
            ColorToken::WarningBg => self.warning_bg,
            ColorToken::Error => self.error,
            ColorToken::ErrorBg => self.error_bg,
            ColorToken::Info => self.info,
            ColorToken::InfoBg => self.info_bg,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::SurfaceOverlay => self.surface_overlay,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::BorderHover => self.border_hover,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::BorderError => self.border_error,
            ColorToken::InputBg => self.input_bg,
            ColorToken::InputBgHover => self.input_bg_hover,
            ColorToken::InputBgFocus => self.input_bg_focus,
            ColorToken::InputBgDisabled => self.input_bg_disabled,
            ColorToken::Selection => self.selection,
            ColorToken::SelectionText => self.selection_text,
            ColorToken::Accent => self.accent,
            ColorToken::AccentSubtle => self.accent_subtle,
        }
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Spacing scale on a 4px grid
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub space_0_5: f32,
    pub space_1: f32,
    pub space_1_5: f32,
    pub space_2: f32,
    pub space_2_5: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_5: f32,
    pub space_6: f32,
    pub space_8: f32,
    pub space_10: f32,
    pub space_12: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_0_5: 2.0,
            space_1: 4.0,
            space_1_5: 6.0,
            space_2: 8.0,
            space_2_5: 10.0,
            space_3: 12.0,
            space_4: 16.0,
            space_5: 20.0,
            space_6: 24.0,
            space_8: 32.0,
            space_10: 40.0,
            space_12: 48.0,
        }
    }
}

/// Lookup names for [`SpacingTokens`] fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Space0_5,
    Space1,
    Space1_5,
    Space2,
    Space2_5,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
}

impl SpacingTokens {
    /// Resolve a token to its pixel value
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space0_5 => self.space_0_5,
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space1_5 => self.space_1_5,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space2_5 => self.space_2_5,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space5 => self.space_5,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space10 => self.space_10,
            SpacingToken::Space12 => self.space_12,
        }
    }
}

// =============================================================================
// Radii
// =============================================================================

/// Corner radius scale
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_default: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    /// Pill shape; large enough to fully round any widget
    pub radius_full: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 4.0,
            radius_default: 6.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_full: 9999.0,
        }
    }
}

/// Lookup names for [`RadiusTokens`] fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    Sm,
    #[default]
    Default,
    Md,
    Lg,
    Xl,
    Full,
}

impl RadiusTokens {
    /// Resolve a token to its pixel value
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Default => self.radius_default,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full,
        }
    }
}

// =============================================================================
// Typography
// =============================================================================

/// Font size, line height, and weight scales
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub line_height_tight: f32,
    pub line_height_normal: f32,
    pub line_height_relaxed: f32,
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,
    pub weight_bold: u16,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            line_height_tight: 1.25,
            line_height_normal: 1.5,
            line_height_relaxed: 1.75,
            weight_normal: 400,
            weight_medium: 500,
            weight_semibold: 600,
            weight_bold: 700,
        }
    }
}

/// Lookup names for [`TypographyTokens`] font sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSizeToken {
    TextXs,
    TextSm,
    #[default]
    TextBase,
    TextLg,
    TextXl,
}

impl TypographyTokens {
    /// Resolve a font size token to its pixel value
    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::TextXs => self.text_xs,
            FontSizeToken::TextSm => self.text_sm,
            FontSizeToken::TextBase => self.text_base,
            FontSizeToken::TextLg => self.text_lg,
            FontSizeToken::TextXl => self.text_xl,
        }
    }
}

// =============================================================================
// Shadows
// =============================================================================

/// A single drop-shadow description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

/// Elevation shadow scale
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub shadow_sm: Shadow,
    pub shadow_md: Shadow,
    pub shadow_lg: Shadow,
}

impl ShadowTokens {
    /// Shadows for light surfaces
    pub fn light() -> Self {
        Self {
            shadow_sm: Shadow {
                offset_x: 0.0,
                offset_y: 1.0,
                blur: 2.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.08),
            },
            shadow_md: Shadow {
                offset_x: 0.0,
                offset_y: 2.0,
                blur: 6.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.12),
            },
            shadow_lg: Shadow {
                offset_x: 0.0,
                offset_y: 8.0,
                blur: 24.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.16),
            },
        }
    }

    /// Shadows for dark surfaces (stronger to read against dark backgrounds)
    pub fn dark() -> Self {
        Self {
            shadow_sm: Shadow {
                offset_x: 0.0,
                offset_y: 1.0,
                blur: 2.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.3),
            },
            shadow_md: Shadow {
                offset_x: 0.0,
                offset_y: 2.0,
                blur: 6.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.4),
            },
            shadow_lg: Shadow {
                offset_x: 0.0,
                offset_y: 8.0,
                blur: 24.0,
                spread: 0.0,
                color: Color::BLACK.with_alpha(0.5),
            },
        }
    }
}

/// Lookup names for [`ShadowTokens`] fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowTokens {
    /// Resolve a token to its shadow
    pub fn get(&self, token: ShadowToken) -> Shadow {
        match token {
            ShadowToken::Sm => self.shadow_sm,
            ShadowToken::Md => self.shadow_md,
            ShadowToken::Lg => self.shadow_lg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_grid() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.get(SpacingToken::Space1), 4.0);
        assert_eq!(spacing.get(SpacingToken::Space2_5), 10.0);
        assert_eq!(spacing.get(SpacingToken::Space12), 48.0);
    }

    #[test]
    fn test_radius_scale_is_monotonic() {
        let radii = RadiusTokens::default();
        assert!(radii.get(RadiusToken::Sm) < radii.get(RadiusToken::Default));
        assert!(radii.get(RadiusToken::Default) < radii.get(RadiusToken::Md));
        assert!(radii.get(RadiusToken::Xl) < radii.get(RadiusToken::Full));
    }

    #[test]
    fn test_font_size_lookup() {
        let typography = TypographyTokens::default();
        assert_eq!(typography.size(FontSizeToken::TextXs), 12.0);
        assert_eq!(typography.size(FontSizeToken::TextBase), 16.0);
    }

    #[test]
    fn test_dark_shadows_are_stronger() {
        let light = ShadowTokens::light();
        let dark = ShadowTokens::dark();
        assert!(dark.get(ShadowToken::Md).color.a > light.get(ShadowToken::Md).color.a);
    }
}

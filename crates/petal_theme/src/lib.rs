//! Petal Theming
//!
//! This crate provides the styling layer for the Petal component library:
//!
//! - **Design Tokens**: colors, typography, spacing, radii, and shadows
//! - **Themes**: the built-in light/dark bundle plus the [`Theme`] trait for
//!   custom bundles
//! - **Theme State**: process-wide current theme with cheap snapshots
//! - **Style Variables**: variant color resolution and the named-variable
//!   sets a host stylesheet consumes
//! - **Overrides**: TOML-loaded customization of the built-in theme
//!
//! # Example
//!
//! ```rust
//! use petal_theme::{ColorToken, DefaultTheme, ThemeState};
//!
//! let theme = ThemeState::from_theme(&DefaultTheme::light());
//! let surface = theme.color(ColorToken::Surface);
//! assert!(surface.luminance() > 0.5);
//! ```

pub mod config;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod vars;

pub use config::{ThemeConfigError, ThemeOverrides};
pub use state::ThemeState;
pub use theme::{ColorScheme, DefaultTheme, Theme, ThemeBundle};
pub use tokens::{
    ColorToken, ColorTokens, FontSizeToken, RadiusToken, RadiusTokens, Shadow, ShadowToken,
    ShadowTokens, SpacingToken, SpacingTokens, TypographyTokens,
};
pub use vars::{
    resolve_variant_colors, ColorVariant, StyleVars, VarValue, VariantColors, VarsResolver,
};

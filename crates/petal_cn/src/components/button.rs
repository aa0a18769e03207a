//! Button component with variant styling
//!
//! A stateless button: the host owns hover/press tracking and feeds the
//! current [`InteractionState`] back in when resolving style variables.
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! // Primary button (default)
//! cn::button("Click me")
//!
//! // Destructive button
//! cn::button("Delete")
//!     .variant(ButtonVariant::Destructive)
//!
//! // Outline button with custom size
//! cn::button("Cancel")
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Small)
//!
//! // Button with click handler
//! cn::button("Submit")
//!     .on_click(|| println!("Submitted!"))
//! ```

use crate::mods::Mods;
use petal_core::Color;
use petal_theme::{
    ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver,
};
use std::sync::Arc;

/// Interaction state fed in by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action, filled with the primary color
    #[default]
    Primary,
    /// Secondary action, muted background
    Secondary,
    /// Destructive action, danger styling
    Destructive,
    /// Border only, transparent background
    Outline,
    /// No background, minimal styling
    Ghost,
    /// Appears as a link, no button styling
    Link,
}

impl ButtonVariant {
    /// Background color for this variant and interaction state
    pub fn background(&self, theme: &ThemeState, state: InteractionState) -> Color {
        match (self, state) {
            (_, InteractionState::Disabled) => self.base_background(theme).with_alpha(0.5),
            (ButtonVariant::Primary, InteractionState::Pressed) => {
                theme.color(ColorToken::PrimaryActive)
            }
            (ButtonVariant::Secondary, InteractionState::Pressed) => {
                theme.color(ColorToken::SecondaryActive)
            }
            (ButtonVariant::Destructive, InteractionState::Pressed) => {
                theme.color(ColorToken::Error).darken(0.15)
            }
            (ButtonVariant::Outline | ButtonVariant::Ghost, InteractionState::Pressed) => {
                theme.color(ColorToken::TextPrimary).with_alpha(0.1)
            }
            (ButtonVariant::Link, InteractionState::Pressed) => Color::TRANSPARENT,
            (ButtonVariant::Primary, InteractionState::Hovered) => {
                theme.color(ColorToken::PrimaryHover)
            }
            (ButtonVariant::Secondary, InteractionState::Hovered) => {
                theme.color(ColorToken::SecondaryHover)
            }
            (ButtonVariant::Destructive, InteractionState::Hovered) => {
                theme.color(ColorToken::Error).darken(0.1)
            }
            (ButtonVariant::Outline | ButtonVariant::Ghost, InteractionState::Hovered) => {
                theme.color(ColorToken::TextPrimary).with_alpha(0.05)
            }
            (ButtonVariant::Link, InteractionState::Hovered) => Color::TRANSPARENT,
            _ => self.base_background(theme),
        }
    }

    /// Base (idle) background color
    fn base_background(&self, theme: &ThemeState) -> Color {
        match self {
            ButtonVariant::Primary => theme.color(ColorToken::Primary),
            ButtonVariant::Secondary => theme.color(ColorToken::Secondary),
            ButtonVariant::Destructive => theme.color(ColorToken::Error),
            ButtonVariant::Outline | ButtonVariant::Ghost | ButtonVariant::Link => {
                Color::TRANSPARENT
            }
        }
    }

    /// Foreground (text) color for this variant
    fn foreground(&self, theme: &ThemeState) -> Color {
        match self {
            ButtonVariant::Primary | ButtonVariant::Destructive => {
                theme.color(ColorToken::TextInverse)
            }
            ButtonVariant::Secondary | ButtonVariant::Outline | ButtonVariant::Ghost => {
                theme.color(ColorToken::TextPrimary)
            }
            ButtonVariant::Link => theme.color(ColorToken::Primary),
        }
    }

    /// Border color for this variant, if any
    fn border(&self, theme: &ThemeState) -> Option<Color> {
        match self {
            ButtonVariant::Outline => Some(theme.color(ColorToken::Border)),
            _ => None,
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Icon-only button (square)
    Icon,
}

impl ButtonSize {
    fn height(&self) -> f32 {
        match self {
            ButtonSize::Small => 32.0,
            ButtonSize::Medium => 40.0,
            ButtonSize::Large => 44.0,
            ButtonSize::Icon => 40.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self {
            ButtonSize::Small => 12.0,
            ButtonSize::Medium => 16.0,
            ButtonSize::Large => 24.0,
            ButtonSize::Icon => 8.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            ButtonSize::Small => 13.0,
            ButtonSize::Medium => 14.0,
            ButtonSize::Large => 16.0,
            ButtonSize::Icon => 14.0,
        }
    }
}

/// Every recognized button option
pub struct ButtonConfig {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub full_width: bool,
    pub on_click: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// The button component
pub struct Button {
    config: ButtonConfig,
    resolver: Option<VarsResolver>,
}

impl Button {
    /// Create a button with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: ButtonConfig {
                label: label.into(),
                variant: ButtonVariant::default(),
                size: ButtonSize::default(),
                disabled: false,
                full_width: false,
                on_click: None,
            },
            resolver: None,
        }
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.config.full_width = full_width;
        self
    }

    /// Set the click callback
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_click = Some(Arc::new(callback));
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

    /// Whether the button is disabled
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// The interaction state to resolve with, given the host's pointer state
    pub fn interaction_state(&self, hovered: bool, pressed: bool) -> InteractionState {
        if self.config.disabled {
            InteractionState::Disabled
        } else if pressed {
            InteractionState::Pressed
        } else if hovered {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        }
    }

    /// Handle a click; ignored when disabled
    pub fn click(&self) {
        if self.config.disabled {
            return;
        }
        if let Some(ref callback) = self.config.on_click {
            callback();
        }
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState, state: InteractionState) -> StyleVars {
        let variant = self.config.variant;
        let size = self.config.size;

        let mut vars = StyleVars::new();
        vars.set("--button-height", VarValue::Px(size.height()));
        vars.set("--button-padding-x", VarValue::Px(size.padding_x()));
        vars.set("--button-fz", VarValue::Px(size.font_size()));
        vars.set(
            "--button-radius",
            VarValue::Px(theme.radius(RadiusToken::Md)),
        );
        vars.set(
            "--button-bg",
            VarValue::Color(variant.background(theme, state)),
        );
        vars.set("--button-color", VarValue::Color(variant.foreground(theme)));
        vars.set_optional(
            "--button-bd",
            variant.border(theme).map(VarValue::Color),
        );
        if self.config.full_width {
            vars.set("--button-width", VarValue::Str("100%"));
        }

        match &self.resolver {
            Some(resolver) => resolver(theme, &vars),
            None => vars,
        }
    }

    /// Resolve style variables against the process-wide theme
    pub fn vars(&self, state: InteractionState) -> StyleVars {
        self.vars_with(&ThemeState::get(), state)
    }

    /// Active state flags
    pub fn mods(&self) -> Mods {
        let mut mods = Mods::new();
        mods.set("disabled", self.config.disabled);
        mods.set("full-width", self.config.full_width);
        mods
    }
}

/// Create a button with a label
///
/// # Example
///
/// ```ignore
/// cn::button("OK")
///     .variant(ButtonVariant::Primary)
///     .on_click(|| println!("Confirmed!"))
/// ```
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::DefaultTheme;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn light_theme() -> ThemeState {
        ThemeState::from_theme(&DefaultTheme::light())
    }

    #[test]
    fn test_variant_backgrounds_track_interaction_state() {
        let theme = light_theme();

        assert_eq!(
            ButtonVariant::Primary.background(&theme, InteractionState::Idle),
            theme.color(ColorToken::Primary)
        );
        assert_eq!(
            ButtonVariant::Primary.background(&theme, InteractionState::Hovered),
            theme.color(ColorToken::PrimaryHover)
        );
        assert_eq!(
            ButtonVariant::Ghost.background(&theme, InteractionState::Idle),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn test_disabled_background_is_translucent() {
        let theme = light_theme();
        let bg = ButtonVariant::Primary.background(&theme, InteractionState::Disabled);
        assert!(bg.a < 1.0);
    }

    #[test]
    fn test_interaction_state_precedence() {
        let enabled = button("x");
        assert_eq!(enabled.interaction_state(true, true), InteractionState::Pressed);
        assert_eq!(enabled.interaction_state(true, false), InteractionState::Hovered);
        assert_eq!(enabled.interaction_state(false, false), InteractionState::Idle);

        let disabled = button("x").disabled(true);
        assert_eq!(
            disabled.interaction_state(true, true),
            InteractionState::Disabled
        );
    }

    #[test]
    fn test_click_ignored_when_disabled() {
        let clicks = Arc::new(AtomicUsize::new(0));

        let counter = clicks.clone();
        let enabled = button("Save").on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        enabled.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        let counter = clicks.clone();
        let disabled = button("Save")
            .disabled(true)
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        disabled.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_vars_cover_geometry_and_colors() {
        let theme = light_theme();
        let btn = button("Save").size(ButtonSize::Large).full_width(true);
        let vars = btn.vars_with(&theme, InteractionState::Idle);

        assert_eq!(vars.get("--button-height"), Some(&VarValue::Px(44.0)));
        assert_eq!(vars.get("--button-width"), Some(&VarValue::Str("100%")));
        assert_eq!(
            vars.get("--button-bg"),
            Some(&VarValue::Color(theme.color(ColorToken::Primary)))
        );
        // Non-outline variants carry no border variable
        assert!(vars.get("--button-bd").is_none());
    }

    #[test]
    fn test_outline_variant_emits_border_var() {
        let theme = light_theme();
        let vars = button("Edit")
            .variant(ButtonVariant::Outline)
            .vars_with(&theme, InteractionState::Idle);
        assert_eq!(
            vars.get("--button-bd"),
            Some(&VarValue::Color(theme.color(ColorToken::Border)))
        );
    }

    #[test]
    fn test_custom_resolver_post_pass() {
        let theme = light_theme();
        let btn = button("Save").vars_resolver(Arc::new(|_, vars| {
            let mut out = vars.clone();
            out.set("--button-radius", VarValue::Px(0.0));
            out
        }));
        let vars = btn.vars_with(&theme, InteractionState::Idle);
        assert_eq!(vars.get("--button-radius"), Some(&VarValue::Px(0.0)));
    }

    #[test]
    fn test_mods_flags() {
        let mods = button("x").disabled(true).full_width(true).mods();
        assert!(mods.has("disabled"));
        assert!(mods.has("full-width"));
        assert!(button("x").mods().is_empty());
    }
}

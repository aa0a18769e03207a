//! Switch component for boolean toggle
//!
//! The checked flag lives in an uncontrolled value store, so the owner can
//! either supply `checked` every rebuild or let the switch manage it.
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut switch = cn::switch()
//!     .label("Enable notifications")
//!     .default_checked(true)
//!     .on_change(|is_on| println!("Switch: {is_on}"));
//!
//! switch.toggle();
//! assert!(!switch.is_checked());
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Switch size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchSize {
    /// 32x18 track, 14px thumb
    Small,
    /// 44x24 track, 20px thumb
    #[default]
    Medium,
    /// 52x28 track, 24px thumb
    Large,
}

impl SwitchSize {
    fn track_width(&self) -> f32 {
        match self {
            SwitchSize::Small => 32.0,
            SwitchSize::Medium => 44.0,
            SwitchSize::Large => 52.0,
        }
    }

    fn track_height(&self) -> f32 {
        match self {
            SwitchSize::Small => 18.0,
            SwitchSize::Medium => 24.0,
            SwitchSize::Large => 28.0,
        }
    }

    fn thumb_size(&self) -> f32 {
        match self {
            SwitchSize::Small => 14.0,
            SwitchSize::Medium => 20.0,
            SwitchSize::Large => 24.0,
        }
    }
}

/// Every recognized switch option
pub struct SwitchConfig {
    pub checked: Option<bool>,
    pub default_checked: Option<bool>,
    pub on_change: Option<ChangeHandler<bool>>,
    pub size: SwitchSize,
    pub label: Option<String>,
    pub disabled: bool,
}

/// The switch component
pub struct Switch {
    config: SwitchConfig,
    store: Uncontrolled<bool>,
    resolver: Option<VarsResolver>,
}

impl Switch {
    /// Create a switch
    pub fn new() -> Self {
        let config = SwitchConfig {
            checked: None,
            default_checked: None,
            on_change: None,
            size: SwitchSize::default(),
            label: None,
            disabled: false,
        };
        let store = build_store(&config);
        Self {
            config,
            store,
            resolver: None,
        }
    }

    /// Supply the checked flag every rebuild (controlled mode)
    pub fn checked(mut self, checked: bool) -> Self {
        self.config.checked = Some(checked);
        self.store = build_store(&self.config);
        self
    }

    /// Seed the checked flag (uncontrolled mode)
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.config.default_checked = Some(checked);
        self.store = build_store(&self.config);
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |checked: &bool| callback(*checked)));
        self.store = build_store(&self.config);
        self
    }

    /// Set the size
    pub fn size(mut self, size: SwitchSize) -> Self {
        self.config.size = size;
        self
    }

    /// Add a label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Current checked flag
    pub fn is_checked(&self) -> bool {
        self.store.get().unwrap_or(false)
    }

    /// Whether the owner supplies the checked flag
    pub fn is_controlled(&self) -> bool {
        self.store.is_controlled()
    }

    /// The label, if any
    pub fn label_text(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    /// Flip the checked flag; ignored when disabled
    pub fn toggle(&mut self) {
        if self.config.disabled {
            tracing::trace!("toggle ignored on disabled switch");
            return;
        }
        let next = !self.is_checked();
        self.store.set(next);
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let size = self.config.size;
        let track = if self.is_checked() {
            theme.color(ColorToken::Primary)
        } else {
            theme.color(ColorToken::Secondary)
        };
        let track = if self.config.disabled {
            track.with_alpha(0.5)
        } else {
            track
        };

        let mut vars = StyleVars::new();
        vars.set("--switch-track-width", VarValue::Px(size.track_width()));
        vars.set("--switch-track-height", VarValue::Px(size.track_height()));
        vars.set("--switch-thumb-size", VarValue::Px(size.thumb_size()));
        vars.set("--switch-track-bg", VarValue::Color(track));
        vars.set(
            "--switch-thumb-color",
            VarValue::Color(theme.color(ColorToken::Surface)),
        );

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
        mods.set("checked", self.is_checked());
        mods.set("disabled", self.config.disabled);
        mods
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &SwitchConfig) -> Uncontrolled<bool> {
    let mut store_config = UncontrolledConfig::new().final_value(false);
    store_config.value = config.checked;
    store_config.default_value = config.default_checked;
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a switch
pub fn switch() -> Switch {
    Switch::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::DefaultTheme;
    use std::sync::Mutex;

    fn spy() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v| sink.lock().unwrap().push(v))
    }

    #[test]
    fn test_toggle_flips_uncontrolled_value() {
        let mut switch = switch().default_checked(true);
        assert!(switch.is_checked());

        switch.toggle();
        assert!(!switch.is_checked());
        switch.toggle();
        assert!(switch.is_checked());
    }

    #[test]
    fn test_disabled_toggle_is_ignored() {
        let (seen, callback) = spy();
        let mut switch = switch().disabled(true).on_change(callback);

        switch.toggle();
        assert!(!switch.is_checked());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_controlled_toggle_fires_callback_without_state_change() {
        let (seen, callback) = spy();
        let mut switch = switch().checked(false).on_change(callback);

        switch.toggle();
        assert!(!switch.is_checked());
        assert!(switch.is_controlled());
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_track_color_follows_checked_state() {
        let theme = ThemeState::from_theme(&DefaultTheme::light());
        let mut switch = switch();

        let off = switch.vars_with(&theme);
        assert_eq!(
            off.get("--switch-track-bg"),
            Some(&VarValue::Color(theme.color(ColorToken::Secondary)))
        );

        switch.toggle();
        let on = switch.vars_with(&theme);
        assert_eq!(
            on.get("--switch-track-bg"),
            Some(&VarValue::Color(theme.color(ColorToken::Primary)))
        );
    }

    #[test]
    fn test_size_geometry() {
        let theme = ThemeState::from_theme(&DefaultTheme::light());
        let vars = switch().size(SwitchSize::Large).vars_with(&theme);
        assert_eq!(vars.get("--switch-track-width"), Some(&VarValue::Px(52.0)));
        assert_eq!(vars.get("--switch-thumb-size"), Some(&VarValue::Px(24.0)));
    }

    #[test]
    fn test_mods_reflect_state() {
        let mut switch = switch().default_checked(true);
        assert!(switch.mods().has("checked"));
        switch.toggle();
        assert!(!switch.mods().has("checked"));
    }
}

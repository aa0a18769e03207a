//! Tabs component for tabbed navigation
//!
//! The active tab value lives in an uncontrolled value store. Activating a
//! disabled or unknown tab is rejected outright.
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut tabs = cn::tabs()
//!     .tab("account", "Account")
//!     .tab("password", "Password")
//!     .tab_disabled("billing", "Billing")
//!     .on_change(|value| println!("tab: {value}"));
//!
//! tabs.activate("password");
//! assert_eq!(tabs.active_value().as_deref(), Some("password"));
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Tabs size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabsSize {
    /// 32px list height, 13px text
    Small,
    /// 40px list height, 14px text
    #[default]
    Medium,
    /// 48px list height, 16px text
    Large,
}

impl TabsSize {
    fn height(&self) -> f32 {
        match self {
            TabsSize::Small => 32.0,
            TabsSize::Medium => 40.0,
            TabsSize::Large => 48.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            TabsSize::Small => 13.0,
            TabsSize::Medium => 14.0,
            TabsSize::Large => 16.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self {
            TabsSize::Small => 12.0,
            TabsSize::Medium => 16.0,
            TabsSize::Large => 20.0,
        }
    }
}

/// A single tab entry
#[derive(Clone, Debug)]
pub struct TabItem {
    value: String,
    label: String,
    disabled: bool,
}

impl TabItem {
    /// The value stored in state when this tab is active
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this tab can be activated
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Every recognized tabs option
pub struct TabsConfig {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_change: Option<ChangeHandler<String>>,
    pub items: Vec<TabItem>,
    pub size: TabsSize,
}

/// The tabs component
pub struct Tabs {
    config: TabsConfig,
    store: Uncontrolled<String>,
    resolver: Option<VarsResolver>,
}

impl Tabs {
    /// Create an empty tabs component
    pub fn new() -> Self {
        let config = TabsConfig {
            value: None,
            default_value: None,
            on_change: None,
            items: Vec::new(),
            size: TabsSize::default(),
        };
        let store = build_store(&config);
        Self {
            config,
            store,
            resolver: None,
        }
    }

    /// Add a tab
    pub fn tab(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.items.push(TabItem {
            value: value.into(),
            label: label.into(),
            disabled: false,
        });
        self
    }

    /// Add a disabled tab
    pub fn tab_disabled(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.items.push(TabItem {
            value: value.into(),
            label: label.into(),
            disabled: true,
        });
        self
    }

    /// Supply the active value every rebuild (controlled mode)
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self.store = build_store(&self.config);
        self
    }

    /// Seed the active value (uncontrolled mode)
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.config.default_value = Some(value.into());
        self.store = build_store(&self.config);
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |value: &String| callback(value)));
        self.store = build_store(&self.config);
        self
    }

    /// Set the size
    pub fn size(mut self, size: TabsSize) -> Self {
        self.config.size = size;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// All tab entries in declaration order
    pub fn items(&self) -> &[TabItem] {
        &self.config.items
    }

    /// The active tab value
    ///
    /// Falls back to the first enabled tab when no value has been
    /// established; the fallback is presentation-only and fires no callback.
    pub fn active_value(&self) -> Option<String> {
        self.store
            .get()
            .or_else(|| self.first_enabled().map(str::to_string))
    }

    /// Activate a tab by value
    ///
    /// Activation of a disabled or unknown tab is rejected: no state change,
    /// no callback. Returns whether the activation was accepted.
    pub fn activate(&mut self, value: &str) -> bool {
        let Some(item) = self.config.items.iter().find(|item| item.value == value) else {
            tracing::trace!(value, "activation of unknown tab rejected");
            return false;
        };
        if item.disabled {
            tracing::trace!(value, "activation of disabled tab rejected");
            return false;
        }
        self.store.set(value.to_string());
        true
    }

    fn first_enabled(&self) -> Option<&str> {
        self.config
            .items
            .iter()
            .find(|item| !item.disabled)
            .map(|item| item.value.as_str())
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let size = self.config.size;

        let mut vars = StyleVars::new();
        vars.set("--tabs-height", VarValue::Px(size.height()));
        vars.set("--tabs-fz", VarValue::Px(size.font_size()));
        vars.set("--tabs-padding-x", VarValue::Px(size.padding_x()));
        vars.set(
            "--tabs-radius",
            VarValue::Px(theme.radius(RadiusToken::Md)),
        );
        vars.set(
            "--tabs-list-bg",
            VarValue::Color(theme.color(ColorToken::SecondaryHover).with_alpha(0.15)),
        );
        vars.set(
            "--tabs-active-bg",
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

    /// State flags for one tab entry
    pub fn item_mods(&self, value: &str) -> Mods {
        let mut mods = Mods::new();
        mods.set(
            "active",
            self.active_value().as_deref() == Some(value),
        );
        mods.set(
            "disabled",
            self.config
                .items
                .iter()
                .any(|item| item.value == value && item.disabled),
        );
        mods
    }
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &TabsConfig) -> Uncontrolled<String> {
    let mut store_config = UncontrolledConfig::new();
    store_config.value = config.value.clone();
    store_config.default_value = config.default_value.clone();
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a tabs component
pub fn tabs() -> Tabs {
    Tabs::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn spy() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v: &str| sink.lock().unwrap().push(v.to_string()))
    }

    fn three_tabs() -> Tabs {
        tabs()
            .tab("account", "Account")
            .tab("password", "Password")
            .tab_disabled("billing", "Billing")
    }

    #[test]
    fn test_first_enabled_tab_is_active_by_default() {
        let tabs = tabs()
            .tab_disabled("locked", "Locked")
            .tab("open", "Open");
        assert_eq!(tabs.active_value().as_deref(), Some("open"));
    }

    #[test]
    fn test_activate_accepted_tab() {
        let (seen, callback) = spy();
        let mut tabs = three_tabs().on_change(callback);

        assert!(tabs.activate("password"));
        assert_eq!(tabs.active_value().as_deref(), Some("password"));
        assert_eq!(*seen.lock().unwrap(), vec!["password"]);
    }

    #[test]
    fn test_disabled_and_unknown_activation_rejected() {
        let (seen, callback) = spy();
        let mut tabs = three_tabs().on_change(callback);

        assert!(!tabs.activate("billing"));
        assert!(!tabs.activate("missing"));
        assert_eq!(tabs.active_value().as_deref(), Some("account"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_value_seeds_active_tab() {
        let tabs = three_tabs().default_value("password");
        assert_eq!(tabs.active_value().as_deref(), Some("password"));
    }

    #[test]
    fn test_controlled_value_wins_over_activation() {
        let mut tabs = three_tabs().value("account");
        tabs.activate("password");
        assert_eq!(tabs.active_value().as_deref(), Some("account"));
    }

    #[test]
    fn test_item_mods() {
        let tabs = three_tabs();
        assert!(tabs.item_mods("account").has("active"));
        assert!(tabs.item_mods("billing").has("disabled"));
        assert!(!tabs.item_mods("password").has("active"));
    }

    #[test]
    fn test_empty_tabs_have_no_active_value() {
        let tabs = tabs();
        assert_eq!(tabs.active_value(), None);
    }
}

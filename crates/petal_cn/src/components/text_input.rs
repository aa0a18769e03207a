//! Text input component
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut input = cn::text_input()
//!     .placeholder("Your name")
//!     .required(true)
//!     .on_change(|value| println!("input: {value}"));
//!
//! input.set_value("Ada");
//! assert_eq!(input.value(), "Ada");
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Input size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    /// 32px height, 13px text
    Small,
    /// 40px height, 14px text
    #[default]
    Medium,
    /// 48px height, 16px text
    Large,
}

impl InputSize {
    fn height(&self) -> f32 {
        match self {
            InputSize::Small => 32.0,
            InputSize::Medium => 40.0,
            InputSize::Large => 48.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            InputSize::Small => 13.0,
            InputSize::Medium => 14.0,
            InputSize::Large => 16.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self {
            InputSize::Small => 10.0,
            InputSize::Medium => 12.0,
            InputSize::Large => 16.0,
        }
    }
}

/// Every recognized text input option
pub struct TextInputConfig {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_change: Option<ChangeHandler<String>>,
    pub size: InputSize,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub invalid: bool,
    pub error: Option<String>,
}

/// The text input component
pub struct TextInput {
    config: TextInputConfig,
    store: Uncontrolled<String>,
    resolver: Option<VarsResolver>,
}

impl TextInput {
    /// Create a text input
    pub fn new() -> Self {
        let config = TextInputConfig {
            value: None,
            default_value: None,
            on_change: None,
            size: InputSize::default(),
            placeholder: None,
            required: false,
            disabled: false,
            invalid: false,
            error: None,
        };
        let store = build_store(&config);
        Self {
            config,
            store,
            resolver: None,
        }
    }

    /// Supply the value every rebuild (controlled mode)
    pub fn value_controlled(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self.store = build_store(&self.config);
        self
    }

    /// Seed the value (uncontrolled mode)
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.config.default_value = Some(value.into());
        self.store = build_store(&self.config);
        self
    }

    /// Set the change callback; fires on every accepted edit
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |value: &String| callback(value)));
        self.store = build_store(&self.config);
        self
    }

    /// Set the size
    pub fn size(mut self, size: InputSize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Mark as required
    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Mark as invalid, with an optional error message
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.config.invalid = invalid;
        self
    }

    /// Set the error message shown when invalid
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.config.error = Some(message.into());
        self.config.invalid = true;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Current text
    pub fn value(&self) -> String {
        self.store.get().unwrap_or_default()
    }

    /// The error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.config.error.as_deref()
    }

    /// The placeholder, if any
    pub fn placeholder_text(&self) -> Option<&str> {
        self.config.placeholder.as_deref()
    }

    /// Propose an edit; rejected when disabled
    ///
    /// Every accepted edit fires `on_change`, including edits that leave the
    /// text unchanged. Returns whether the edit was accepted.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.config.disabled {
            tracing::trace!("edit ignored on disabled input");
            return false;
        }
        self.store.set(value.into());
        true
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let size = self.config.size;
        let border = if self.config.invalid {
            theme.color(ColorToken::BorderError)
        } else {
            theme.color(ColorToken::Border)
        };
        let bg = if self.config.disabled {
            theme.color(ColorToken::InputBgDisabled)
        } else {
            theme.color(ColorToken::InputBg)
        };

        let mut vars = StyleVars::new();
        vars.set("--input-height", VarValue::Px(size.height()));
        vars.set("--input-fz", VarValue::Px(size.font_size()));
        vars.set("--input-padding-x", VarValue::Px(size.padding_x()));
        vars.set(
            "--input-radius",
            VarValue::Px(theme.radius(RadiusToken::Md)),
        );
        vars.set("--input-bg", VarValue::Color(bg));
        vars.set("--input-bd", VarValue::Color(border));
        vars.set(
            "--input-color",
            VarValue::Color(theme.color(ColorToken::TextPrimary)),
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
        mods.set("disabled", self.config.disabled);
        mods.set("invalid", self.config.invalid);
        mods.set("required", self.config.required);
        mods
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &TextInputConfig) -> Uncontrolled<String> {
    let mut store_config = UncontrolledConfig::new().final_value(String::new());
    store_config.value = config.value.clone();
    store_config.default_value = config.default_value.clone();
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a text input
pub fn text_input() -> TextInput {
    TextInput::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::DefaultTheme;
    use std::sync::Mutex;

    fn spy() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v: &str| sink.lock().unwrap().push(v.to_string()))
    }

    #[test]
    fn test_edits_update_value() {
        let mut input = text_input();
        assert_eq!(input.value(), "");

        assert!(input.set_value("a"));
        assert!(input.set_value("ab"));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_every_accepted_edit_fires_on_change() {
        let (seen, callback) = spy();
        let mut input = text_input().on_change(callback);

        input.set_value("x");
        input.set_value("x");
        assert_eq!(*seen.lock().unwrap(), vec!["x", "x"]);
    }

    #[test]
    fn test_disabled_input_rejects_edits() {
        let (seen, callback) = spy();
        let mut input = text_input().default_value("keep").disabled(true).on_change(callback);

        assert!(!input.set_value("changed"));
        assert_eq!(input.value(), "keep");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_controlled_value_wins() {
        let mut input = text_input().value_controlled("fixed");
        input.set_value("typed");
        assert_eq!(input.value(), "fixed");
    }

    #[test]
    fn test_invalid_input_uses_error_border() {
        let theme = ThemeState::from_theme(&DefaultTheme::light());
        let vars = text_input().error("Required field").vars_with(&theme);
        assert_eq!(
            vars.get("--input-bd"),
            Some(&VarValue::Color(theme.color(ColorToken::BorderError)))
        );
    }

    #[test]
    fn test_error_sets_invalid_mod() {
        let input = text_input().error("Required field").required(true);
        let mods = input.mods();
        assert!(mods.has("invalid"));
        assert!(mods.has("required"));
        assert_eq!(input.error_message(), Some("Required field"));
    }
}

//! Autocomplete component: text input with a filtered suggestion list
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut field = cn::autocomplete()
//!     .data(["React", "Angular", "Vue", "Svelte"])
//!     .limit(5)
//!     .on_option_submit(|option| println!("picked {option}"));
//!
//! field.set_value("re");
//! assert_eq!(field.filtered_options(), ["React"]);
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Every recognized autocomplete option
pub struct AutocompleteConfig {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub on_change: Option<ChangeHandler<String>>,
    /// Static suggestion list
    pub data: Vec<String>,
    /// Maximum number of filtered suggestions
    pub limit: usize,
    /// Make the first filtered option active after every input change
    pub select_first_option_on_change: bool,
    pub on_option_submit: Option<Arc<dyn Fn(&str) + Send + Sync>>,
    pub opened: Option<bool>,
    pub default_opened: Option<bool>,
}

/// The autocomplete component
pub struct Autocomplete {
    config: AutocompleteConfig,
    value_store: Uncontrolled<String>,
    opened_store: Uncontrolled<bool>,
    active: Option<usize>,
    resolver: Option<VarsResolver>,
}

impl Autocomplete {
    /// Create an autocomplete field
    pub fn new() -> Self {
        let config = AutocompleteConfig {
            value: None,
            default_value: None,
            on_change: None,
            data: Vec::new(),
            limit: usize::MAX,
            select_first_option_on_change: false,
            on_option_submit: None,
            opened: None,
            default_opened: None,
        };
        let value_store = build_value_store(&config);
        let opened_store = build_opened_store(&config);
        Self {
            config,
            value_store,
            opened_store,
            active: None,
            resolver: None,
        }
    }

    /// Set the suggestion list
    pub fn data<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.data = data.into_iter().map(Into::into).collect();
        self
    }

    /// Cap the number of filtered suggestions
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Make the first filtered option active after every input change
    pub fn select_first_option_on_change(mut self, enabled: bool) -> Self {
        self.config.select_first_option_on_change = enabled;
        self
    }

    /// Supply the text value every rebuild (controlled mode)
    pub fn value_controlled(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self.value_store = build_value_store(&self.config);
        self
    }

    /// Seed the text value (uncontrolled mode)
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.config.default_value = Some(value.into());
        self.value_store = build_value_store(&self.config);
        self
    }

    /// Set the text change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |value: &String| callback(value)));
        self.value_store = build_value_store(&self.config);
        self
    }

    /// Set the option submit callback
    pub fn on_option_submit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.on_option_submit = Some(Arc::new(callback));
        self
    }

    /// Supply the dropdown opened flag every rebuild (controlled mode)
    pub fn opened(mut self, opened: bool) -> Self {
        self.config.opened = Some(opened);
        self.opened_store = build_opened_store(&self.config);
        self
    }

    /// Seed the dropdown opened flag (uncontrolled mode)
    pub fn default_opened(mut self, opened: bool) -> Self {
        self.config.default_opened = Some(opened);
        self.opened_store = build_opened_store(&self.config);
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Current text
    pub fn value(&self) -> String {
        self.value_store.get().unwrap_or_default()
    }

    /// Whether the dropdown is open
    pub fn is_opened(&self) -> bool {
        self.opened_store.get().unwrap_or(false)
    }

    /// Suggestions matching the current text, case-insensitive substring
    pub fn filtered_options(&self) -> Vec<&str> {
        let query = self.value().to_lowercase();
        self.config
            .data
            .iter()
            .filter(|option| option.to_lowercase().contains(&query))
            .take(self.config.limit)
            .map(String::as_str)
            .collect()
    }

    /// The currently active (keyboard-highlighted) option
    pub fn active_option(&self) -> Option<String> {
        let options = self.filtered_options();
        self.active
            .and_then(|index| options.get(index))
            .map(|option| option.to_string())
    }

    /// Propose a text edit
    ///
    /// Opens the dropdown and recomputes the active option: the first
    /// filtered option when `select_first_option_on_change` is set, nothing
    /// otherwise.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value_store.set(value.into());
        self.opened_store.set(true);
        self.active = if self.config.select_first_option_on_change
            && !self.filtered_options().is_empty()
        {
            Some(0)
        } else {
            None
        };
    }

    /// Move the active option down, wrapping past the end
    pub fn navigate_down(&mut self) {
        let count = self.filtered_options().len();
        if count == 0 {
            self.active = None;
            return;
        }
        self.active = Some(match self.active {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    /// Move the active option up, wrapping past the start
    pub fn navigate_up(&mut self) {
        let count = self.filtered_options().len();
        if count == 0 {
            self.active = None;
            return;
        }
        self.active = Some(match self.active {
            Some(index) => (index + count - 1) % count,
            None => count - 1,
        });
    }

    /// Submit the active option
    ///
    /// Fires `on_option_submit`, writes the option into the text value, and
    /// closes the dropdown. Returns whether an option was submitted.
    pub fn submit_active(&mut self) -> bool {
        let Some(option) = self.active_option() else {
            return false;
        };
        if let Some(ref callback) = self.config.on_option_submit {
            callback(&option);
        }
        self.value_store.set(option);
        self.opened_store.set(false);
        self.active = None;
        true
    }

    /// Open the dropdown
    pub fn open(&mut self) {
        self.opened_store.set(true);
    }

    /// Close the dropdown and clear the active option
    pub fn close(&mut self) {
        self.opened_store.set(false);
        self.active = None;
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let mut vars = StyleVars::new();
        vars.set(
            "--autocomplete-dropdown-bg",
            VarValue::Color(theme.color(ColorToken::SurfaceElevated)),
        );
        vars.set(
            "--autocomplete-option-active-bg",
            VarValue::Color(theme.color(ColorToken::AccentSubtle)),
        );
        vars.set(
            "--autocomplete-radius",
            VarValue::Px(theme.radius(RadiusToken::Md)),
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
        mods.set("opened", self.is_opened());
        mods
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new()
    }
}

fn build_value_store(config: &AutocompleteConfig) -> Uncontrolled<String> {
    let mut store_config = UncontrolledConfig::new().final_value(String::new());
    store_config.value = config.value.clone();
    store_config.default_value = config.default_value.clone();
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

fn build_opened_store(config: &AutocompleteConfig) -> Uncontrolled<bool> {
    let mut store_config = UncontrolledConfig::new().final_value(false);
    store_config.value = config.opened;
    store_config.default_value = config.default_opened;
    Uncontrolled::new(store_config)
}

/// Create an autocomplete field
pub fn autocomplete() -> Autocomplete {
    Autocomplete::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn frameworks() -> Autocomplete {
        autocomplete().data(["React", "Angular", "Vue", "Svelte", "Solid"])
    }

    #[test]
    fn test_filtering_is_case_insensitive_substring() {
        let mut field = frameworks();
        field.set_value("re");
        assert_eq!(field.filtered_options(), ["React"]);

        field.set_value("L");
        assert_eq!(field.filtered_options(), ["Angular", "Svelte", "Solid"]);

        field.set_value("");
        assert_eq!(field.filtered_options().len(), 5);
    }

    #[test]
    fn test_limit_caps_suggestions() {
        let mut field = frameworks().limit(2);
        field.set_value("");
        assert_eq!(field.filtered_options(), ["React", "Angular"]);
    }

    #[test]
    fn test_edit_opens_dropdown() {
        let mut field = frameworks();
        assert!(!field.is_opened());
        field.set_value("v");
        assert!(field.is_opened());
        assert!(field.mods().has("opened"));
    }

    #[test]
    fn test_select_first_option_on_change() {
        let mut field = frameworks().select_first_option_on_change(true);
        field.set_value("s");
        assert_eq!(field.active_option().as_deref(), Some("React"));

        field.set_value("zzz");
        assert_eq!(field.active_option(), None);
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut field = frameworks();
        field.set_value("l");
        // Matches: Angular, Svelte, Solid
        field.navigate_down();
        assert_eq!(field.active_option().as_deref(), Some("Angular"));
        field.navigate_down();
        field.navigate_down();
        field.navigate_down();
        assert_eq!(field.active_option().as_deref(), Some("Angular"));

        field.navigate_up();
        assert_eq!(field.active_option().as_deref(), Some("Solid"));
    }

    #[test]
    fn test_submit_active_fires_callback_and_closes() {
        let picked = Arc::new(Mutex::new(Vec::new()));
        let sink = picked.clone();
        let mut field = frameworks()
            .select_first_option_on_change(true)
            .on_option_submit(move |option| sink.lock().unwrap().push(option.to_string()));

        field.set_value("vu");
        assert!(field.submit_active());

        assert_eq!(*picked.lock().unwrap(), vec!["Vue"]);
        assert_eq!(field.value(), "Vue");
        assert!(!field.is_opened());
        assert_eq!(field.active_option(), None);
    }

    #[test]
    fn test_submit_without_active_option_is_rejected() {
        let mut field = frameworks();
        field.set_value("rea");
        assert!(!field.submit_active());
        assert_eq!(field.value(), "rea");
    }
}

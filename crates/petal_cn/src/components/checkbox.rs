//! Checkbox component with indeterminate support
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut checkbox = cn::checkbox()
//!     .label("Accept terms")
//!     .on_change(|checked| println!("Checkbox: {checked}"));
//!
//! checkbox.toggle();
//! assert!(checkbox.is_checked());
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Checkbox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxSize {
    /// 16px box
    Small,
    /// 20px box
    #[default]
    Medium,
    /// 24px box
    Large,
}

impl CheckboxSize {
    fn box_size(&self) -> f32 {
        match self {
            CheckboxSize::Small => 16.0,
            CheckboxSize::Medium => 20.0,
            CheckboxSize::Large => 24.0,
        }
    }
}

/// Every recognized checkbox option
pub struct CheckboxConfig {
    pub checked: Option<bool>,
    pub default_checked: Option<bool>,
    pub on_change: Option<ChangeHandler<bool>>,
    pub size: CheckboxSize,
    pub label: Option<String>,
    pub disabled: bool,
    /// Neither checked nor unchecked; cleared by the next toggle
    pub indeterminate: bool,
}

/// The checkbox component
pub struct Checkbox {
    config: CheckboxConfig,
    store: Uncontrolled<bool>,
    resolver: Option<VarsResolver>,
}

impl Checkbox {
    /// Create a checkbox
    pub fn new() -> Self {
        let config = CheckboxConfig {
            checked: None,
            default_checked: None,
            on_change: None,
            size: CheckboxSize::default(),
            label: None,
            disabled: false,
            indeterminate: false,
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
    pub fn size(mut self, size: CheckboxSize) -> Self {
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

    /// Mark as indeterminate
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.config.indeterminate = indeterminate;
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

    /// Whether the checkbox is indeterminate
    pub fn is_indeterminate(&self) -> bool {
        self.config.indeterminate
    }

    /// The label, if any
    pub fn label_text(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    /// Flip the checked flag; ignored when disabled
    ///
    /// Toggling out of the indeterminate state lands on checked.
    pub fn toggle(&mut self) {
        if self.config.disabled {
            tracing::trace!("toggle ignored on disabled checkbox");
            return;
        }
        let next = if self.config.indeterminate {
            self.config.indeterminate = false;
            true
        } else {
            !self.is_checked()
        };
        self.store.set(next);
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let filled = self.is_checked() || self.config.indeterminate;
        let bg = if filled {
            theme.color(ColorToken::Primary)
        } else {
            theme.color(ColorToken::InputBg)
        };
        let bg = if self.config.disabled {
            bg.with_alpha(0.5)
        } else {
            bg
        };

        let mut vars = StyleVars::new();
        vars.set("--checkbox-size", VarValue::Px(self.config.size.box_size()));
        vars.set(
            "--checkbox-radius",
            VarValue::Px(theme.radius(RadiusToken::Sm)),
        );
        vars.set("--checkbox-bg", VarValue::Color(bg));
        vars.set(
            "--checkbox-color",
            VarValue::Color(theme.color(ColorToken::TextInverse)),
        );
        vars.set(
            "--checkbox-bd",
            VarValue::Color(if filled {
                theme.color(ColorToken::Primary)
            } else {
                theme.color(ColorToken::Border)
            }),
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
        mods.set("indeterminate", self.config.indeterminate);
        mods.set("disabled", self.config.disabled);
        mods
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &CheckboxConfig) -> Uncontrolled<bool> {
    let mut store_config = UncontrolledConfig::new().final_value(false);
    store_config.value = config.checked;
    store_config.default_value = config.default_checked;
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a checkbox
pub fn checkbox() -> Checkbox {
    Checkbox::new()
}

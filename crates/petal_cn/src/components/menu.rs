//! Menu component for trigger-opened item lists
//!
//! The opened flag lives in an uncontrolled value store. `on_open` and
//! `on_close` fire only on actual transitions, so repeated `open` calls are
//! silent after the first.
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! let mut menu = cn::menu()
//!     .item("Settings")
//!     .item("Messages")
//!     .item_danger("Delete account")
//!     .on_open(|| println!("opened"));
//!
//! menu.open();
//! menu.navigate_down();
//! assert!(menu.item_click(0));
//! ```

use crate::mods::Mods;
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// What interaction opens the menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Open on trigger click
    #[default]
    Click,
    /// Open on trigger hover
    Hover,
    /// Open on either click or hover
    ClickHover,
}

impl MenuTrigger {
    /// Whether click interactions toggle the menu
    pub fn handles_click(&self) -> bool {
        matches!(self, MenuTrigger::Click | MenuTrigger::ClickHover)
    }

    /// Whether hover interactions open the menu
    pub fn handles_hover(&self) -> bool {
        matches!(self, MenuTrigger::Hover | MenuTrigger::ClickHover)
    }
}

/// A single menu entry
#[derive(Clone, Debug)]
pub struct MenuItem {
    label: String,
    disabled: bool,
    danger: bool,
}

impl MenuItem {
    /// The display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this item can be clicked
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this item renders in the danger color
    pub fn is_danger(&self) -> bool {
        self.danger
    }
}

/// Every recognized menu option
pub struct MenuConfig {
    pub opened: Option<bool>,
    pub default_opened: Option<bool>,
    pub on_change: Option<ChangeHandler<bool>>,
    pub on_open: Option<Arc<dyn Fn() + Send + Sync>>,
    pub on_close: Option<Arc<dyn Fn() + Send + Sync>>,
    pub trigger: MenuTrigger,
    /// Delay before a hover open takes effect; host timers apply it
    pub open_delay_ms: u64,
    /// Delay before a hover close takes effect; host timers apply it
    pub close_delay_ms: u64,
    pub close_on_item_click: bool,
    pub close_on_escape: bool,
    /// Wrap item navigation past either end
    pub loop_focus: bool,
    pub items: Vec<MenuItem>,
}

/// The menu component
pub struct Menu {
    config: MenuConfig,
    store: Uncontrolled<bool>,
    active: Option<usize>,
    resolver: Option<VarsResolver>,
}

impl Menu {
    /// Create an empty menu
    pub fn new() -> Self {
        let config = MenuConfig {
            opened: None,
            default_opened: None,
            on_change: None,
            on_open: None,
            on_close: None,
            trigger: MenuTrigger::default(),
            open_delay_ms: 0,
            close_delay_ms: 0,
            close_on_item_click: true,
            close_on_escape: true,
            loop_focus: true,
            items: Vec::new(),
        };
        let store = build_store(&config);
        Self {
            config,
            store,
            active: None,
            resolver: None,
        }
    }

    /// Add a menu item
    pub fn item(mut self, label: impl Into<String>) -> Self {
        self.config.items.push(MenuItem {
            label: label.into(),
            disabled: false,
            danger: false,
        });
        self
    }

    /// Add a disabled menu item
    pub fn item_disabled(mut self, label: impl Into<String>) -> Self {
        self.config.items.push(MenuItem {
            label: label.into(),
            disabled: true,
            danger: false,
        });
        self
    }

    /// Add a danger-colored menu item
    pub fn item_danger(mut self, label: impl Into<String>) -> Self {
        self.config.items.push(MenuItem {
            label: label.into(),
            disabled: false,
            danger: true,
        });
        self
    }

    /// Supply the opened flag every rebuild (controlled mode)
    pub fn opened(mut self, opened: bool) -> Self {
        self.config.opened = Some(opened);
        self.store = build_store(&self.config);
        self
    }

    /// Seed the opened flag (uncontrolled mode)
    pub fn default_opened(mut self, opened: bool) -> Self {
        self.config.default_opened = Some(opened);
        self.store = build_store(&self.config);
        self
    }

    /// Set the opened change callback; fires on every state write
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |opened: &bool| callback(*opened)));
        self.store = build_store(&self.config);
        self
    }

    /// Set the callback fired when the menu transitions to open
    pub fn on_open<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_open = Some(Arc::new(callback));
        self
    }

    /// Set the callback fired when the menu transitions to closed
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_close = Some(Arc::new(callback));
        self
    }

    /// Set the opening interaction
    pub fn trigger(mut self, trigger: MenuTrigger) -> Self {
        self.config.trigger = trigger;
        self
    }

    /// Set the hover open delay in milliseconds
    pub fn open_delay_ms(mut self, millis: u64) -> Self {
        self.config.open_delay_ms = millis;
        self
    }

    /// Set the hover close delay in milliseconds
    pub fn close_delay_ms(mut self, millis: u64) -> Self {
        self.config.close_delay_ms = millis;
        self
    }

    /// Close the menu when an enabled item is clicked (default true)
    pub fn close_on_item_click(mut self, enabled: bool) -> Self {
        self.config.close_on_item_click = enabled;
        self
    }

    /// Close the menu on escape (default true)
    pub fn close_on_escape(mut self, enabled: bool) -> Self {
        self.config.close_on_escape = enabled;
        self
    }

    /// Wrap item navigation past either end (default true)
    pub fn loop_focus(mut self, enabled: bool) -> Self {
        self.config.loop_focus = enabled;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// All menu entries in declaration order
    pub fn items(&self) -> &[MenuItem] {
        &self.config.items
    }

    /// Whether the menu is open
    pub fn is_opened(&self) -> bool {
        self.store.get().unwrap_or(false)
    }

    /// The effective hover open delay; zero for the click trigger
    pub fn effective_open_delay_ms(&self) -> u64 {
        if self.config.trigger.handles_hover() {
            self.config.open_delay_ms
        } else {
            0
        }
    }

    /// The effective hover close delay; zero for the click trigger
    pub fn effective_close_delay_ms(&self) -> u64 {
        if self.config.trigger.handles_hover() {
            self.config.close_delay_ms
        } else {
            0
        }
    }

    /// The keyboard-highlighted item index
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Open the menu; silent when already open
    pub fn open(&mut self) {
        if self.is_opened() {
            return;
        }
        self.store.set(true);
        if let Some(ref callback) = self.config.on_open {
            callback();
        }
    }

    /// Close the menu and clear the active item; silent when already closed
    pub fn close(&mut self) {
        if !self.is_opened() {
            return;
        }
        self.store.set(false);
        self.active = None;
        if let Some(ref callback) = self.config.on_close {
            callback();
        }
    }

    /// Flip between open and closed
    pub fn toggle(&mut self) {
        if self.is_opened() {
            self.close();
        } else {
            self.open();
        }
    }

    /// A click on the trigger element
    pub fn trigger_click(&mut self) {
        if !self.config.trigger.handles_click() {
            tracing::trace!(trigger = ?self.config.trigger, "trigger click ignored");
            return;
        }
        self.toggle();
    }

    /// The pointer entered the trigger element
    pub fn trigger_hover_enter(&mut self) {
        if !self.config.trigger.handles_hover() {
            return;
        }
        self.open();
    }

    /// The pointer left the trigger element
    pub fn trigger_hover_leave(&mut self) {
        if !self.config.trigger.handles_hover() {
            return;
        }
        self.close();
    }

    /// An escape key press; ignored when `close_on_escape` is off
    pub fn escape(&mut self) {
        if !self.config.close_on_escape {
            return;
        }
        self.close();
    }

    /// Click an item by index
    ///
    /// Clicks on disabled or unknown items are rejected. An accepted click
    /// closes the menu unless `close_on_item_click` is off. Returns whether
    /// the click was accepted.
    pub fn item_click(&mut self, index: usize) -> bool {
        let Some(item) = self.config.items.get(index) else {
            tracing::trace!(index, "click on unknown menu item rejected");
            return false;
        };
        if item.disabled {
            tracing::trace!(index, "click on disabled menu item rejected");
            return false;
        }
        if self.config.close_on_item_click {
            self.close();
        }
        true
    }

    /// Move the active item down, skipping disabled items
    ///
    /// Wraps past the end when `loop_focus` is on, stops at the last enabled
    /// item otherwise.
    pub fn navigate_down(&mut self) {
        self.active = self.next_enabled(self.active, 1);
    }

    /// Move the active item up, skipping disabled items
    ///
    /// Wraps past the start when `loop_focus` is on, stops at the first
    /// enabled item otherwise.
    pub fn navigate_up(&mut self) {
        self.active = self.next_enabled(self.active, -1);
    }

    fn next_enabled(&self, from: Option<usize>, step: isize) -> Option<usize> {
        let count = self.config.items.len();
        if count == 0 || self.config.items.iter().all(|item| item.disabled) {
            return None;
        }
        let start = match from {
            Some(index) => index as isize + step,
            None if step > 0 => 0,
            None => count as isize - 1,
        };
        let mut cursor = start;
        loop {
            if cursor < 0 || cursor >= count as isize {
                if !self.config.loop_focus {
                    return from;
                }
                cursor = cursor.rem_euclid(count as isize);
            }
            let index = cursor as usize;
            if !self.config.items[index].disabled {
                return Some(index);
            }
            cursor += step;
        }
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let mut vars = StyleVars::new();
        vars.set(
            "--menu-dropdown-bg",
            VarValue::Color(theme.color(ColorToken::Surface)),
        );
        vars.set(
            "--menu-dropdown-bd",
            VarValue::Color(theme.color(ColorToken::Border)),
        );
        vars.set(
            "--menu-item-hover-bg",
            VarValue::Color(theme.color(ColorToken::SurfaceElevated)),
        );
        vars.set(
            "--menu-radius",
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

    /// State flags for one menu entry
    pub fn item_mods(&self, index: usize) -> Mods {
        let mut mods = Mods::new();
        if let Some(item) = self.config.items.get(index) {
            mods.set("disabled", item.disabled);
            mods.set("danger", item.danger);
            mods.set("active", self.active == Some(index));
        }
        mods
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &MenuConfig) -> Uncontrolled<bool> {
    let mut store_config = UncontrolledConfig::new().final_value(false);
    store_config.value = config.opened;
    store_config.default_value = config.default_opened;
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a menu
pub fn menu() -> Menu {
    Menu::new()
}

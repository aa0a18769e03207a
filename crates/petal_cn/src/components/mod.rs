//! Themed components built on the petal_core state primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Config struct holding every recognized option
//! - State methods taking `&mut self` (e.g., `toggle`, `activate`)
//! - `vars_with` / `vars` resolving theme tokens into style variables
//! - `mods` exposing the active state flags

pub mod autocomplete;
pub mod badge;
pub mod button;
pub mod calendar;
pub mod checkbox;
pub mod menu;
pub mod switch;
pub mod tabs;
pub mod text_input;

pub use autocomplete::{autocomplete, Autocomplete, AutocompleteConfig};
pub use badge::{badge, Badge, BadgeConfig, BadgeSize, BadgeVariant};
pub use button::{button, Button, ButtonConfig, ButtonSize, ButtonVariant, InteractionState};
pub use calendar::{
    calendar, first_of_month, month_weeks, parse_date, Calendar, CalendarConfig, CalendarSize,
    DateParseError, Day,
};
pub use checkbox::{checkbox, Checkbox, CheckboxConfig, CheckboxSize};
pub use menu::{menu, Menu, MenuConfig, MenuItem, MenuTrigger};
pub use switch::{switch, Switch, SwitchConfig, SwitchSize};
pub use tabs::{tabs, TabItem, Tabs, TabsConfig, TabsSize};
pub use text_input::{text_input, InputSize, TextInput, TextInputConfig};

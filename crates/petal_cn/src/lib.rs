//! # Petal Component Library (petal_cn)
//!
//! Themed widgets built on the `petal_core` state primitives and the
//! `petal_theme` token system.
//!
//! ## Philosophy
//!
//! - **State**: `petal_core` provides the uncontrolled value store that every
//!   stateful widget hangs its value on, so owners choose controlled or
//!   uncontrolled mode per widget.
//! - **Theme Tokens**: `petal_theme` provides design tokens (colors, spacing,
//!   radii, shadows) and resolves widget variants into concrete colors.
//! - **Components**: `petal_cn` provides the widgets themselves, each
//!   exposing style variables (`vars`) and state flags (`mods`) for the host
//!   renderer.
//!
//! ## Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//!
//! // Button with variants
//! cn::button("Click me")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Medium);
//!
//! // Switch holding its own state
//! let mut switch = cn::switch()
//!     .label("Notifications")
//!     .on_change(|is_on| println!("{is_on}"));
//! switch.toggle();
//! ```
//!
//! ## Components
//!
//! Button, Badge, Switch, Checkbox, Tabs, TextInput, Autocomplete, Menu,
//! Calendar.

pub mod components;
pub mod mods;

pub use components::*;
pub use mods::Mods;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::autocomplete::autocomplete;
    pub use crate::components::badge::badge;
    pub use crate::components::button::button;
    pub use crate::components::calendar::calendar;
    pub use crate::components::checkbox::checkbox;
    pub use crate::components::menu::menu;
    pub use crate::components::switch::switch;
    pub use crate::components::tabs::tabs;
    pub use crate::components::text_input::text_input;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::autocomplete::Autocomplete;
    pub use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
    pub use crate::components::button::{Button, ButtonSize, ButtonVariant, InteractionState};
    pub use crate::components::calendar::{
        parse_date, Calendar, CalendarSize, DateParseError, Day,
    };
    pub use crate::components::checkbox::{Checkbox, CheckboxSize};
    pub use crate::components::menu::{Menu, MenuItem, MenuTrigger};
    pub use crate::components::switch::{Switch, SwitchSize};
    pub use crate::components::tabs::{TabItem, Tabs, TabsSize};
    pub use crate::components::text_input::{InputSize, TextInput};
    pub use crate::mods::Mods;
    // Re-export commonly needed theme types
    pub use petal_theme::{
        ColorToken, RadiusToken, ShadowToken, SpacingToken, StyleVars, ThemeState, VarValue,
    };
}

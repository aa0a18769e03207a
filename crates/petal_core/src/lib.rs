//! Petal Core Runtime
//!
//! This crate provides the foundational primitives for the Petal component
//! library:
//!
//! - **Reactive Signals**: version-counted value cells a host renderer can
//!   cheaply diff against
//! - **Keyed Context State**: a process-wide registry so widgets can hold
//!   state across rebuilds without threading a context parameter everywhere
//! - **Uncontrolled Store**: the controlled/uncontrolled value
//!   synchronization contract shared by every stateful widget
//! - **Color**: the RGBA color type consumed by the theme layer
//!
//! # Example
//!
//! ```rust
//! use petal_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! // Create a signal
//! let count = graph.create_signal(0i32);
//!
//! // Update it; versions advance for change detection
//! graph.set(count, 5);
//! assert_eq!(graph.get(count), Some(5));
//! assert_eq!(graph.signal_version(count.id()), Some(1));
//! ```

pub mod color;
pub mod context_state;
pub mod reactive;
pub mod uncontrolled;

pub use color::{Color, ColorParseError};
pub use context_state::{
    request_rebuild, use_signal_keyed, use_state_keyed, ContextState, HookState, SharedHookState,
    StateKey,
};
pub use reactive::{
    DirtyFlag, ReactiveGraph, ReactiveStats, SharedReactiveGraph, Signal, SignalId, State,
};
pub use uncontrolled::{
    use_uncontrolled, ChangeHandler, Uncontrolled, UncontrolledConfig, UncontrolledState,
};

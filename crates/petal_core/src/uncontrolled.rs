//! Controlled/uncontrolled value synchronization
//!
//! Every stateful widget offers the same duality: the owner either supplies
//! the value each rebuild (controlled) or lets the widget manage it
//! internally (uncontrolled). This module implements that contract once.
//!
//! [`Uncontrolled<T>`] is the pure store; [`use_uncontrolled`] binds the
//! store's internal value to keyed context state so it survives rebuilds.
//!
//! # Example
//!
//! ```ignore
//! use petal_core::uncontrolled::{Uncontrolled, UncontrolledConfig};
//!
//! // Uncontrolled: the store owns the value
//! let mut store = Uncontrolled::new(
//!     UncontrolledConfig::new()
//!         .default_value("apple")
//!         .on_change(|v| println!("changed: {v}")),
//! );
//! store.set("banana");
//! assert_eq!(store.get(), Some("banana"));
//!
//! // Controlled: the owner's value always wins
//! let mut store = Uncontrolled::new(UncontrolledConfig::new().value("fixed"));
//! store.set("ignored");
//! assert_eq!(store.get(), Some("fixed"));
//! ```

use crate::context_state::ContextState;
use crate::reactive::State;
use std::sync::Arc;

/// Change callback invoked once per `set`, in call order
pub type ChangeHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Configuration for an uncontrolled value store
///
/// Every recognized option is an explicit field; there is no dynamic
/// option passing.
pub struct UncontrolledConfig<T> {
    /// Externally supplied controlled value; `Some` means controlled mode
    pub value: Option<T>,
    /// Seed for the internal value in uncontrolled mode (creation-time only)
    pub default_value: Option<T>,
    /// Fallback seed when both `value` and `default_value` are absent
    pub final_value: Option<T>,
    /// Invoked on every `set`, in both modes
    pub on_change: Option<ChangeHandler<T>>,
}

impl<T> Default for UncontrolledConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UncontrolledConfig<T> {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            value: None,
            default_value: None,
            final_value: None,
            on_change: None,
        }
    }

    /// Set the controlled value
    pub fn value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the uncontrolled seed value
    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the fallback seed value
    pub fn final_value(mut self, value: T) -> Self {
        self.final_value = Some(value);
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }
}

/// A value store that is either owner-driven (controlled) or self-driven
/// (uncontrolled)
///
/// Mode is derived from whether a controlled value is present, never stored
/// separately. It can flip either direction mid-lifetime via
/// [`set_controlled`](Self::set_controlled); the internal value only tracks
/// sets made while uncontrolled, so after a controlled phase it may be stale
/// until the next uncontrolled `set`.
pub struct Uncontrolled<T> {
    controlled: Option<T>,
    internal: Option<T>,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: Clone> Uncontrolled<T> {
    /// Create a store from its configuration
    ///
    /// The internal value is seeded from `default_value`, falling back to
    /// `final_value`. With neither present (and no controlled value) the
    /// store holds nothing until the first `set`.
    pub fn new(config: UncontrolledConfig<T>) -> Self {
        let UncontrolledConfig {
            value,
            default_value,
            final_value,
            on_change,
        } = config;

        Self {
            controlled: value,
            internal: default_value.or(final_value),
            on_change,
        }
    }

    /// Current value: the controlled value if present, else the internal one
    pub fn get(&self) -> Option<T> {
        self.controlled.clone().or_else(|| self.internal.clone())
    }

    /// Propose a new value
    ///
    /// In uncontrolled mode the internal value is updated. In controlled
    /// mode the store is untouched; the owner decides whether to pass the
    /// value back in. Either way `on_change` fires exactly once with `next`,
    /// with no equality dedup.
    pub fn set(&mut self, next: T) {
        if self.controlled.is_none() {
            self.internal = Some(next.clone());
        }
        if let Some(ref callback) = self.on_change {
            callback(&next);
        }
    }

    /// Replace the controlled value, switching mode if needed
    ///
    /// `Some` enters (or updates) controlled mode; `None` returns to
    /// uncontrolled mode, resuming from the last internal value.
    pub fn set_controlled(&mut self, value: Option<T>) {
        self.controlled = value;
    }

    /// Whether a controlled value is currently present
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }
}

// =============================================================================
// Hook layer
// =============================================================================

/// An uncontrolled store whose internal value lives in keyed context state
///
/// Obtained from [`use_uncontrolled`]. The controlled slot and callback are
/// per-rebuild configuration; only the internal value persists.
pub struct UncontrolledState<T> {
    internal: State<Option<T>>,
    controlled: Option<T>,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: Clone + Send + 'static> UncontrolledState<T> {
    /// Current value: the controlled value if present, else the persisted
    /// internal one
    pub fn get(&self) -> Option<T> {
        self.controlled
            .clone()
            .or_else(|| self.internal.try_get().flatten())
    }

    /// Propose a new value
    ///
    /// Uncontrolled writes go through `set_rebuild` so the host refreshes
    /// the widget. Controlled proposals leave state untouched; the widget
    /// re-renders when its owner passes the new value back in.
    pub fn set(&self, next: T) {
        if !self.is_controlled() {
            self.internal.set_rebuild(Some(next.clone()));
        }
        if let Some(ref callback) = self.on_change {
            callback(&next);
        }
    }

    /// Whether a controlled value was supplied this rebuild
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }
}

impl ContextState {
    /// Bind an uncontrolled store to keyed context state
    ///
    /// The internal value persists under `key` across rebuilds; `config`
    /// supplies the per-rebuild controlled slot and callback. Seeds apply
    /// only when the key is first seen.
    pub fn use_uncontrolled<T>(&self, key: &str, config: UncontrolledConfig<T>) -> UncontrolledState<T>
    where
        T: Clone + Send + 'static,
    {
        let UncontrolledConfig {
            value,
            default_value,
            final_value,
            on_change,
        } = config;

        let seed = default_value.or(final_value);
        let internal = self.use_state_keyed(key, move || seed);

        UncontrolledState {
            internal,
            controlled: value,
            on_change,
        }
    }
}

/// Bind an uncontrolled store to keyed context state via the global singleton
///
/// # Panics
///
/// Panics if `ContextState::init()` has not been called.
pub fn use_uncontrolled<T>(key: &str, config: UncontrolledConfig<T>) -> UncontrolledState<T>
where
    T: Clone + Send + 'static,
{
    ContextState::get().use_uncontrolled(key, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context_state::HookState;
    use crate::reactive::ReactiveGraph;
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, Mutex};

    fn spy<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v: &T| sink.lock().unwrap().push(v.clone()))
    }

    #[test]
    fn test_uncontrolled_tracks_last_set() {
        let mut store = Uncontrolled::new(UncontrolledConfig::new().default_value('a'));

        store.set('b');
        assert_eq!(store.get(), Some('b'));

        store.set('c');
        store.set('d');
        assert_eq!(store.get(), Some('d'));
    }

    #[test]
    fn test_controlled_value_wins() {
        let mut store = Uncontrolled::new(UncontrolledConfig::new().value('x'));

        assert_eq!(store.get(), Some('x'));
        store.set('y');
        assert_eq!(store.get(), Some('x'));
        assert!(store.is_controlled());
    }

    #[test]
    fn test_on_change_fires_once_per_set_in_order() {
        let (seen, callback) = spy::<char>();
        let mut store =
            Uncontrolled::new(UncontrolledConfig::new().default_value('a').on_change(callback));

        store.set('b');
        store.set('c');
        store.set('c');
        assert_eq!(*seen.lock().unwrap(), vec!['b', 'c', 'c']);
    }

    #[test]
    fn test_on_change_fires_in_controlled_mode() {
        let (seen, callback) = spy::<char>();
        let mut store = Uncontrolled::new(UncontrolledConfig::new().value('x').on_change(callback));

        store.set('y');
        assert_eq!(store.get(), Some('x'));
        assert_eq!(*seen.lock().unwrap(), vec!['y']);
    }

    #[test]
    fn test_final_value_fallback() {
        let store: Uncontrolled<char> =
            Uncontrolled::new(UncontrolledConfig::new().final_value('z'));
        assert_eq!(store.get(), Some('z'));

        // default_value takes precedence over final_value
        let store = Uncontrolled::new(
            UncontrolledConfig::new().default_value('a').final_value('z'),
        );
        assert_eq!(store.get(), Some('a'));
    }

    #[test]
    fn test_empty_store_holds_nothing() {
        let store: Uncontrolled<char> = Uncontrolled::new(UncontrolledConfig::new());
        assert_eq!(store.get(), None);
        assert!(!store.is_controlled());
    }

    #[test]
    fn test_flip_uncontrolled_to_controlled() {
        let mut store = Uncontrolled::new(UncontrolledConfig::new().default_value('a'));

        store.set('b');
        store.set_controlled(Some('c'));
        assert_eq!(store.get(), Some('c'));
        assert!(store.is_controlled());
    }

    #[test]
    fn test_flip_controlled_to_uncontrolled_resumes_stale_internal() {
        let mut store = Uncontrolled::new(
            UncontrolledConfig::new().value('x').default_value('a'),
        );

        // Sets during the controlled phase never reach the internal value
        store.set('b');
        store.set_controlled(None);
        assert_eq!(store.get(), Some('a'));
        assert!(!store.is_controlled());

        store.set('d');
        assert_eq!(store.get(), Some('d'));
    }

    // -------------------------------------------------------------------------
    // Hook layer
    // -------------------------------------------------------------------------

    fn local_context() -> (ContextState, crate::reactive::DirtyFlag) {
        let dirty: crate::reactive::DirtyFlag = Arc::new(AtomicBool::new(false));
        let ctx = ContextState::test_instance(
            Arc::new(Mutex::new(ReactiveGraph::new())),
            Arc::new(Mutex::new(HookState::new())),
            dirty.clone(),
        );
        (ctx, dirty)
    }

    #[test]
    fn test_hook_persists_across_rebuilds() {
        let (ctx, _) = local_context();

        let first = ctx.use_uncontrolled("fruit", UncontrolledConfig::new().default_value("apple"));
        assert_eq!(first.get(), Some("apple"));
        first.set("banana");

        // Rebuild: same key, fresh config; the internal value survives and
        // the seed does not reapply
        let second = ctx.use_uncontrolled("fruit", UncontrolledConfig::<&str>::new().default_value("apple"));
        assert_eq!(second.get(), Some("banana"));
    }

    #[test]
    fn test_hook_uncontrolled_set_requests_rebuild() {
        use std::sync::atomic::Ordering;

        let (ctx, dirty) = local_context();

        let store = ctx.use_uncontrolled("open", UncontrolledConfig::new().default_value(false));
        store.set(true);
        assert!(dirty.load(Ordering::SeqCst));
        assert_eq!(store.get(), Some(true));
    }

    #[test]
    fn test_hook_controlled_set_does_not_request_rebuild() {
        use std::sync::atomic::Ordering;

        let (ctx, dirty) = local_context();
        let (seen, callback) = spy::<bool>();

        let store = ctx.use_uncontrolled(
            "open",
            UncontrolledConfig::new().value(false).on_change(callback),
        );
        store.set(true);

        assert!(!dirty.load(Ordering::SeqCst));
        assert_eq!(store.get(), Some(false));
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }
}

//! Global context state singleton
//!
//! `ContextState` provides a process-wide singleton for reactive state
//! management so components can create internal state without threading a
//! context parameter through every constructor:
//!
//! ```ignore
//! use petal_core::context_state::use_state_keyed;
//!
//! // In a component:
//! let open_state = use_state_keyed("my_component_open", || false);
//! ```
//!
//! # Initialization
//!
//! The singleton must be initialized by the app layer before use:
//!
//! ```ignore
//! ContextState::init();
//! ```
//!
//! Test code that cannot control initialization order should use
//! [`ContextState::ensure_initialized`] instead.

use crate::reactive::{ReactiveGraph, Signal, SignalId, State};
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// Global context state instance
static CONTEXT_STATE: OnceLock<ContextState> = OnceLock::new();

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag for triggering UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

/// Key for identifying a signal in the keyed state system
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hash of the user-provided key
    key_hash: u64,
    /// Type ID of the signal value
    type_id: TypeId,
}

impl StateKey {
    /// Create a new StateKey from a hashable key and type
    pub fn new<T: 'static, K: Hash>(key: &K) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        key.hash(&mut hasher);
        Self {
            key_hash: hasher.finish(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create a StateKey from a string key and type
    pub fn from_string<T: 'static>(key: &str) -> Self {
        Self::new::<T, _>(&key)
    }
}

/// Stores keyed state across rebuilds
///
/// Each signal is identified by a unique key rather than call order, so a
/// component can recreate its builders every rebuild and still land on the
/// same signal.
pub struct HookState {
    /// Keyed signals: key -> raw signal ID
    signals: FxHashMap<StateKey, u64>,
}

impl Default for HookState {
    fn default() -> Self {
        Self::new()
    }
}

impl HookState {
    /// Create a new HookState
    pub fn new() -> Self {
        Self {
            signals: FxHashMap::default(),
        }
    }

    /// Get an existing signal by key
    pub fn get(&self, key: &StateKey) -> Option<u64> {
        self.signals.get(key).copied()
    }

    /// Store a signal with the given key
    pub fn insert(&mut self, key: StateKey, signal_id: u64) {
        self.signals.insert(key, signal_id);
    }

    /// Number of keyed signals
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether no keyed signals exist
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Shared hook state for the application
pub type SharedHookState = Arc<Mutex<HookState>>;

/// Global context state singleton
///
/// Owns the shared reactive graph, the keyed hook map, and the dirty flag.
pub struct ContextState {
    /// Reactive graph for signal-based state management
    reactive: SharedReactiveGraph,
    /// Hook state for keyed signal persistence
    hooks: SharedHookState,
    /// Dirty flag for triggering UI rebuilds
    dirty_flag: DirtyFlag,
}

impl ContextState {
    /// Initialize the global context state with fresh internals
    /// (call once at app startup)
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn init() {
        Self::init_with(
            Arc::new(Mutex::new(ReactiveGraph::new())),
            Arc::new(Mutex::new(HookState::new())),
            Arc::new(AtomicBool::new(false)),
        );
    }

    /// Initialize with externally owned graph, hooks, and dirty flag
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn init_with(reactive: SharedReactiveGraph, hooks: SharedHookState, dirty_flag: DirtyFlag) {
        let state = ContextState {
            reactive,
            hooks,
            dirty_flag,
        };

        if CONTEXT_STATE.set(state).is_err() {
            panic!("ContextState::init() called more than once");
        }
    }

    /// Initialize if not yet initialized, then return the instance
    ///
    /// Race-free alternative to `is_initialized()` + `init()` for tests and
    /// embedders that cannot control startup order.
    pub fn ensure_initialized() -> &'static ContextState {
        CONTEXT_STATE.get_or_init(|| ContextState {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            hooks: Arc::new(Mutex::new(HookState::new())),
            dirty_flag: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get the global context state instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ContextState {
        CONTEXT_STATE
            .get()
            .expect("ContextState not initialized. Call ContextState::init() at app startup.")
    }

    /// Try to get the global context state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ContextState> {
        CONTEXT_STATE.get()
    }

    /// Check if the context state has been initialized
    pub fn is_initialized() -> bool {
        CONTEXT_STATE.get().is_some()
    }

    // =========================================================================
    // Reactive State Management
    // =========================================================================

    /// Create a persistent state value that survives across UI rebuilds (keyed)
    ///
    /// Returns the existing `State<T>` for `(key, T)` if one was created
    /// before; otherwise creates one from `init`. `init` runs at most once
    /// per key.
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::from_string::<T>(key);
        let mut hooks = self.hooks.lock().unwrap();

        let signal = if let Some(raw_id) = hooks.get(&state_key) {
            Signal::from_id(SignalId::from_raw(raw_id))
        } else {
            let signal = self.reactive.lock().unwrap().create_signal(init());
            hooks.insert(state_key, signal.id().to_raw());
            tracing::trace!(key, "keyed state created");
            signal
        };

        State::new(
            signal,
            Arc::clone(&self.reactive),
            Arc::clone(&self.dirty_flag),
        )
    }

    /// Create a persistent signal that survives across UI rebuilds (keyed)
    ///
    /// Like `use_state_keyed` but returns the bare `Signal<T>` for callers
    /// that manage graph access themselves.
    pub fn use_signal_keyed<T, F>(&self, key: &str, init: F) -> Signal<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::from_string::<T>(key);
        let mut hooks = self.hooks.lock().unwrap();

        if let Some(raw_id) = hooks.get(&state_key) {
            Signal::from_id(SignalId::from_raw(raw_id))
        } else {
            let signal = self.reactive.lock().unwrap().create_signal(init());
            hooks.insert(state_key, signal.id().to_raw());
            signal
        }
    }

    // =========================================================================
    // Access to Internal Resources
    // =========================================================================

    /// Get the shared reactive graph
    pub fn reactive(&self) -> &SharedReactiveGraph {
        &self.reactive
    }

    /// Get the shared hook state
    pub fn hooks(&self) -> &SharedHookState {
        &self.hooks
    }

    /// Get the dirty flag
    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty_flag
    }

    /// Request a UI rebuild by setting the dirty flag
    pub fn request_rebuild(&self) {
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Clear the dirty flag, returning whether it was set
    ///
    /// Called by the host at the top of a rebuild pass.
    pub fn take_rebuild_request(&self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }

    /// Build a detached instance, bypassing the singleton
    ///
    /// Lets tests exercise context-backed APIs without cross-test
    /// interference through the process-wide instance.
    #[cfg(test)]
    pub(crate) fn test_instance(
        reactive: SharedReactiveGraph,
        hooks: SharedHookState,
        dirty_flag: DirtyFlag,
    ) -> Self {
        Self {
            reactive,
            hooks,
            dirty_flag,
        }
    }
}

// =============================================================================
// Free-function conveniences
// =============================================================================

/// Create keyed persistent state via the global context state
///
/// # Panics
///
/// Panics if `ContextState::init()` has not been called.
pub fn use_state_keyed<T, F>(key: &str, init: F) -> State<T>
where
    T: Clone + Send + 'static,
    F: FnOnce() -> T,
{
    ContextState::get().use_state_keyed(key, init)
}

/// Create a keyed persistent signal via the global context state
pub fn use_signal_keyed<T, F>(key: &str, init: F) -> Signal<T>
where
    T: Clone + Send + 'static,
    F: FnOnce() -> T,
{
    ContextState::get().use_signal_keyed(key, init)
}

/// Request a UI rebuild via the global context state
pub fn request_rebuild() {
    ContextState::get().request_rebuild();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests build local instances rather than touching the process-wide
    // singleton, so they cannot interfere with each other.
    fn local_context() -> ContextState {
        ContextState {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            hooks: Arc::new(Mutex::new(HookState::new())),
            dirty_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    #[test]
    fn test_state_key_distinguishes_types() {
        let int_key = StateKey::from_string::<i32>("value");
        let bool_key = StateKey::from_string::<bool>("value");
        assert_ne!(int_key, bool_key);

        let same = StateKey::from_string::<i32>("value");
        assert_eq!(int_key, same);
    }

    #[test]
    fn test_keyed_state_persists() {
        let ctx = local_context();

        let a = ctx.use_state_keyed("persist_test", || 1i32);
        a.set(41);

        // Same key and type: same signal, init not re-run
        let b = ctx.use_state_keyed("persist_test", || 999i32);
        assert_eq!(b.get(), 41);
        assert_eq!(a.signal_id(), b.signal_id());
    }

    #[test]
    fn test_keyed_state_independent_per_type() {
        let ctx = local_context();

        let n = ctx.use_state_keyed("typed_test", || 5i32);
        let s = ctx.use_state_keyed("typed_test", || String::from("five"));

        n.set(6);
        assert_eq!(s.get(), "five");
        assert_ne!(n.signal_id(), s.signal_id());
        assert_eq!(ctx.hooks().lock().unwrap().len(), 2);
    }

    #[test]
    fn test_rebuild_request_roundtrip() {
        let ctx = local_context();

        assert!(!ctx.take_rebuild_request());

        ctx.request_rebuild();
        assert!(ctx.take_rebuild_request());
        assert!(!ctx.take_rebuild_request());
    }

    #[test]
    fn test_set_rebuild_marks_context_dirty() {
        let ctx = local_context();

        let state = ctx.use_state_keyed("dirty_test", || 0i32);
        state.set(1);
        assert!(!ctx.take_rebuild_request());

        state.set_rebuild(2);
        assert!(ctx.take_rebuild_request());
    }
}

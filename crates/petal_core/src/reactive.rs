//! Reactive signal system
//!
//! Signals are version-counted value cells stored in a slotmap arena. A host
//! renderer reads widget state through signals and uses version counters (or
//! a read-tracking scope) to decide what to refresh.
//!
//! # State
//!
//! The [`State<T>`] type wraps a signal with thread-safe access to the
//! reactive graph. It is the primary API for component state management.
//!
//! ```ignore
//! use petal_core::context_state::use_state_keyed;
//!
//! let counter = use_state_keyed("counter", || 0i32);
//!
//! // Read the current value
//! let value = counter.get();
//!
//! // Update the value
//! counter.set(value + 1);
//!
//! // Update the value and request a UI rebuild
//! counter.set_rebuild(value + 1);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
}

/// A reactive signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Reconstruct a Signal from a raw SignalId
    ///
    /// # Safety
    /// The caller must ensure the SignalId refers to a signal of type T.
    /// This is primarily for internal use by the hook system.
    pub fn from_id(id: SignalId) -> Self {
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }
}

impl SignalId {
    /// Convert to raw u64 for storage
    pub fn to_raw(&self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Reconstruct from raw u64
    pub fn from_raw(raw: u64) -> Self {
        slotmap::KeyData::from_ffi(raw).into()
    }
}

/// Internal signal node storage
struct SignalNode {
    /// The signal value (type-erased)
    value: Box<dyn Any + Send>,
    /// Version counter for change detection
    version: u64,
}

/// Buffer of signal reads recorded by a tracking scope
type ReadSet = SmallVec<[SignalId; 4]>;

/// The reactive graph that manages all signals
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    /// Read-tracking scope, when active
    tracking: RefCell<Option<ReadSet>>,
    /// Global version counter
    global_version: Cell<u64>,
}

impl ReactiveGraph {
    /// Create a new reactive graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            tracking: RefCell::new(None),
            global_version: Cell::new(0),
        }
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
        });
        tracing::trace!(signal = ?id, "signal created");
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    ///
    /// If called within a tracking scope, the signal is recorded as read.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(ref mut reads) = *self.tracking.borrow_mut() {
            if !reads.contains(&signal.id) {
                reads.push(signal.id);
            }
        }

        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Get the current value without recording the read
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal, bumping its version
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        if let Some(node) = self.signals.get_mut(signal.id) {
            node.value = Box::new(value);
            node.version += 1;
            self.global_version.set(self.global_version.get() + 1);
        }
    }

    /// Update a signal using a function
    pub fn update<T: Clone + Send + 'static, F: FnOnce(T) -> T>(
        &mut self,
        signal: Signal<T>,
        f: F,
    ) {
        if let Some(current) = self.get_untracked(signal) {
            self.set(signal, f(current));
        }
    }

    /// Run `f` in a tracking scope, returning its result together with the
    /// signals it read
    ///
    /// A host render pass can wrap widget construction in this to learn
    /// which signals the pass depends on. Scopes do not nest; an inner call
    /// replaces the outer scope's buffer.
    pub fn track_reads<R>(&self, f: impl FnOnce(&Self) -> R) -> (R, Vec<SignalId>) {
        self.tracking.replace(Some(ReadSet::new()));
        let result = f(self);
        let reads = self.tracking.take().unwrap_or_default();
        (result, reads.into_vec())
    }

    /// Get the version of a signal (for change detection)
    pub fn signal_version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|n| n.version)
    }

    /// Get the global version, bumped on every set
    pub fn global_version(&self) -> u64 {
        self.global_version.get()
    }

    /// Get statistics about the reactive graph
    pub fn stats(&self) -> ReactiveStats {
        ReactiveStats {
            signal_count: self.signals.len(),
            global_version: self.global_version.get(),
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the reactive graph
#[derive(Debug, Clone)]
pub struct ReactiveStats {
    pub signal_count: usize,
    pub global_version: u64,
}

// =============================================================================
// STATE - High-level API for component state management
// =============================================================================

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag for triggering UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

/// A bound state value with direct get/set methods
///
/// Wraps a signal with thread-safe access to the reactive graph and a dirty
/// flag for requesting UI rebuilds.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a new State wrapper
    pub fn new(signal: Signal<T>, reactive: SharedReactiveGraph, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            reactive,
            dirty_flag,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.reactive
            .lock()
            .unwrap()
            .get(self.signal)
            .unwrap_or_default()
    }

    /// Get the current value, returning None if not found
    pub fn try_get(&self) -> Option<T> {
        self.reactive.lock().unwrap().get(self.signal)
    }

    /// Set a new value
    ///
    /// This updates the value without requesting a tree rebuild. The host
    /// reads values at render time, so changes are reflected on the next
    /// frame automatically.
    ///
    /// Use `set_rebuild()` when the change affects tree structure.
    pub fn set(&self, value: T) {
        self.reactive.lock().unwrap().set(self.signal, value);
    }

    /// Set a new value AND request a UI tree rebuild
    pub fn set_rebuild(&self, value: T) {
        self.reactive.lock().unwrap().set(self.signal, value);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.reactive.lock().unwrap().update(self.signal, f);
    }

    /// Update the value AND request a UI tree rebuild
    pub fn update_rebuild(&self, f: impl FnOnce(T) -> T) {
        self.reactive.lock().unwrap().update(self.signal, f);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Get the underlying signal (for advanced use cases)
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }

    /// Get the signal ID (for dependency tracking)
    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_create_get_set() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(0i32);
        assert_eq!(graph.get(count), Some(0));

        graph.set(count, 42);
        assert_eq!(graph.get(count), Some(42));
    }

    #[test]
    fn test_signal_update() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(10i32);
        graph.update(count, |x| x + 5);
        assert_eq!(graph.get(count), Some(15));
    }

    #[test]
    fn test_signal_versions() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(0i32);
        assert_eq!(graph.signal_version(count.id()), Some(0));
        let before = graph.global_version();

        graph.set(count, 1);
        assert_eq!(graph.signal_version(count.id()), Some(1));
        assert_eq!(graph.global_version(), before + 1);

        graph.set(count, 1);
        assert_eq!(graph.signal_version(count.id()), Some(2));
    }

    #[test]
    fn test_track_reads() {
        let mut graph = ReactiveGraph::new();

        let a = graph.create_signal(1i32);
        let b = graph.create_signal(2i32);
        let c = graph.create_signal(3i32);

        let (sum, reads) = graph.track_reads(|g| {
            g.get(a).unwrap_or(0) + g.get(b).unwrap_or(0) + g.get(a).unwrap_or(0)
        });

        assert_eq!(sum, 4);
        // a read twice is recorded once; c never read
        assert_eq!(reads, vec![a.id(), b.id()]);
        assert!(!reads.contains(&c.id()));
    }

    #[test]
    fn test_untracked_reads_not_recorded() {
        let mut graph = ReactiveGraph::new();

        let a = graph.create_signal(1i32);
        let (_, reads) = graph.track_reads(|g| g.get_untracked(a));
        assert!(reads.is_empty());
    }

    #[test]
    fn test_state_set_does_not_mark_dirty() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));

        let signal = graph.lock().unwrap().create_signal(0i32);
        let state = State::new(signal, graph, dirty.clone());

        state.set(7);
        assert_eq!(state.get(), 7);
        assert!(!dirty.load(Ordering::SeqCst));

        state.set_rebuild(8);
        assert_eq!(state.get(), 8);
        assert!(dirty.load(Ordering::SeqCst));
    }

    #[test]
    fn test_stats() {
        let mut graph = ReactiveGraph::new();

        let _s1 = graph.create_signal(1);
        let _s2 = graph.create_signal(2);

        let stats = graph.stats();
        assert_eq!(stats.signal_count, 2);
        assert_eq!(stats.global_version, 0);
    }
}

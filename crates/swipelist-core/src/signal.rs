//! Signal/slot system for swipelist.
//!
//! Signals are emitted by list components when something the host may care
//! about happens (a row claimed a gesture, a row was tapped, a release was
//! decided), and connected slots (callbacks) are invoked in response.
//!
//! # Re-entrancy
//!
//! The list runs on a single UI thread and slots are always invoked directly.
//! Connections are snapshotted before emission, so a slot may connect or
//! disconnect slots on the signal that is currently emitting; the change
//! takes effect from the next emission.
//!
//! # Example
//!
//! ```
//! use swipelist_core::Signal;
//!
//! let row_tapped = Signal::<String>::new();
//! let conn_id = row_tapped.connect(|key| {
//!     println!("Row tapped: {}", key);
//! });
//!
//! row_tapped.emit("row-7".to_string());
//! row_tapped.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connection; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification with any number of connected slots.
///
/// `Args` is the payload handed to every slot by reference.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot. It runs on every later emission until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a slot. Returns `false` if `id` was already disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "swipelist_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // The lock is released before any slot runs.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

//! Cross-row coordination.
//!
//! The [`RowRegistry`] maps item keys to row handles and remembers which row
//! is currently open. It never owns rows: it asks a [`RowLookup`] whether a
//! handle still refers to a mounted row, and closes rows through a
//! [`RowHost`]. Handles that no longer refer to a row are treated as misses,
//! never dereferenced.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use swipelist_core::logging::targets;

/// Read-only view of which row handles are still mounted.
pub trait RowLookup<H> {
    /// Whether `handle` still refers to a mounted row.
    fn is_live(&self, handle: H) -> bool;
}

/// Access to the rows a [`RowRegistry`] coordinates.
pub trait RowHost<H>: RowLookup<H> {
    /// Ask the row behind `handle` to snap closed.
    fn close_row(&mut self, handle: H);
}

/// Key-to-row mapping plus the single open row.
pub struct RowRegistry<K, H> {
    rows: HashMap<K, H>,
    current_open: Option<H>,
}

impl<K, H> Default for RowRegistry<K, H> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            current_open: None,
        }
    }
}

impl<K, H: fmt::Debug> fmt::Debug for RowRegistry<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowRegistry")
            .field("rows", &self.rows.len())
            .field("current_open", &self.current_open)
            .finish()
    }
}

impl<K, H> RowRegistry<K, H>
where
    K: Eq + Hash + fmt::Debug,
    H: Copy + Eq + fmt::Debug,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered keys, live or stale.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no keys are registered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Register the row mounted for `key`, replacing any previous entry.
    ///
    /// Returns the replaced handle.
    pub fn register(&mut self, key: K, handle: H) -> Option<H> {
        let previous = self.rows.insert(key, handle);
        if let Some(previous) = previous.filter(|previous| *previous != handle) {
            tracing::trace!(target: targets::REGISTRY, ?previous, ?handle, "registration replaced");
        }
        previous
    }

    /// Remove `key` if it still maps to `handle`.
    ///
    /// A key that was re-registered to another row in the meantime is kept.
    pub fn unregister(&mut self, key: &K, handle: H) -> bool {
        if self.current_open == Some(handle) {
            self.current_open = None;
        }
        if self.rows.get(key) == Some(&handle) {
            self.rows.remove(key);
            true
        } else {
            false
        }
    }

    /// Registered handle for `key`, without a liveness check.
    pub fn get(&self, key: &K) -> Option<H> {
        self.rows.get(key).copied()
    }

    /// Live handle for `key`. Stale entries are misses.
    pub fn lookup(&self, key: &K, host: &impl RowLookup<H>) -> Option<H> {
        match self.get(key) {
            Some(handle) if host.is_live(handle) => Some(handle),
            Some(handle) => {
                tracing::trace!(target: targets::REGISTRY, ?key, ?handle, "stale registration");
                None
            }
            None => {
                tracing::trace!(target: targets::REGISTRY, ?key, "no registration");
                None
            }
        }
    }

    /// The row recorded as open, live or stale.
    pub fn current_open(&self) -> Option<H> {
        self.current_open
    }

    /// The row recorded as open, if it is still mounted.
    pub fn current_open_live(&self, host: &impl RowLookup<H>) -> Option<H> {
        self.current_open.filter(|handle| host.is_live(*handle))
    }

    /// A row claimed a gesture or is opening.
    ///
    /// A different row still recorded as open is closed first; a stale one is
    /// simply replaced.
    pub fn on_claim(&mut self, claimant: H, host: &mut impl RowHost<H>) {
        match self.current_open {
            Some(previous) if previous == claimant => {}
            Some(previous) if host.is_live(previous) => {
                tracing::debug!(target: targets::REGISTRY, ?previous, ?claimant, "closing previously open row");
                host.close_row(previous);
            }
            Some(previous) => {
                tracing::debug!(target: targets::REGISTRY, ?previous, ?claimant, "previously open row is gone");
            }
            None => {}
        }
        self.current_open = Some(claimant);
    }

    /// A row settled closed or started deleting.
    pub fn on_closed(&mut self, handle: H) {
        if self.current_open == Some(handle) {
            tracing::trace!(target: targets::REGISTRY, ?handle, "open row cleared");
            self.current_open = None;
        }
    }

    /// The list scrolled: close the open row, if any.
    pub fn on_scroll(&mut self, host: &mut impl RowHost<H>) {
        let Some(current) = self.current_open.take() else {
            return;
        };
        if host.is_live(current) {
            tracing::debug!(target: targets::REGISTRY, ?current, "closing open row on scroll");
            host.close_row(current);
        } else {
            tracing::debug!(target: targets::REGISTRY, ?current, "open row gone before scroll");
        }
    }
}

//! The list coordinator.
//!
//! [`SwipeList`] owns every mounted row and routes host events to them:
//! touches by [`RowId`], scroll notifications, and hidden-area presses by
//! item key. It guarantees that at most one row is open at a time and that a
//! deleted item is only removed from the data source after its collapse.
//!
//! # Mounting
//!
//! The host's virtualized list mounts a row when its item becomes visible and
//! unmounts it when the item leaves the window or is removed. Row handles are
//! generational: a handle for an unmounted row is stale and every operation
//! addressed to it is a no-op.
//!
//! # Deleting
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use swipelist::{SwipeConfig, SwipeList};
//!
//! let items = Rc::new(RefCell::new(vec!["a", "b", "c"]));
//! let mut list = SwipeList::new(SwipeConfig::default()).unwrap();
//! for item in items.borrow().iter() {
//!     list.mount(*item);
//! }
//!
//! let data = items.clone();
//! list.delete_row(&"b", move || data.borrow_mut().retain(|item| *item != "b"));
//!
//! // Nothing is removed until the collapse has finished. The first frame
//! // after the delete starts the 600 ms clock.
//! list.tick(Duration::ZERO);
//! list.tick(Duration::from_millis(300));
//! assert_eq!(items.borrow().len(), 3);
//!
//! list.tick(Duration::from_millis(600));
//! assert_eq!(*items.borrow(), vec!["a", "c"]);
//! ```

use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use slotmap::{SlotMap, new_key_type};
use swipelist_core::animation::{AnimationDriver, FrameAnimator};
use swipelist_core::logging::{PerfSpan, span_names, targets};
use swipelist_core::Signal;

use crate::config::SwipeConfig;
use crate::error::Result;
use crate::gesture::{SnapDecision, TouchSample, TrackerState};
use crate::layout::ItemLayout;
use crate::registry::{RowHost, RowLookup, RowRegistry};
use crate::row::{RowController, RowEvent, RowPhase};

new_key_type! {
    /// Handle to a mounted row.
    pub struct RowId;
}

/// Callback for presses on a row's hidden area.
///
/// Receives the item key and the row, or `None` if the item has no mounted
/// row.
pub type HiddenAreaHandler<K> = Box<dyn FnMut(&K, Option<RowRef<'_, K>>)>;

/// Limited access to a row handed to a [`HiddenAreaHandler`].
///
/// Only closing and deleting are offered; opening goes through
/// [`SwipeList::open`] so the other rows are closed first.
pub struct RowRef<'a, K> {
    row: &'a mut RowController<K>,
    driver: &'a mut dyn AnimationDriver,
}

impl<K: fmt::Debug> RowRef<'_, K> {
    /// The item key.
    pub fn key(&self) -> &K {
        self.row.key()
    }

    /// Current phase.
    pub fn phase(&self) -> RowPhase {
        self.row.phase()
    }

    /// Current horizontal offset.
    pub fn offset_x(&self) -> f64 {
        self.row.offset_x(&*self.driver)
    }

    /// Snap the row closed.
    pub fn close(&mut self) -> bool {
        self.row.close(&mut *self.driver)
    }

    /// Collapse the row, then call `on_complete`. See
    /// [`RowController::delete_row`].
    pub fn delete_row<F>(&mut self, on_complete: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        self.row.delete_row(&mut *self.driver, on_complete)
    }

    /// Collapse the row without a completion callback.
    pub fn delete(&mut self) -> bool {
        self.row.delete(&mut *self.driver)
    }
}

impl<K: fmt::Debug> fmt::Debug for RowRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowRef").field("row", &self.row).finish()
    }
}

/// The mounted rows as seen by the registry.
struct MountedRows<'a, K> {
    rows: &'a mut SlotMap<RowId, RowController<K>>,
    driver: &'a mut dyn AnimationDriver,
}

impl<K> RowLookup<RowId> for SlotMap<RowId, RowController<K>> {
    fn is_live(&self, handle: RowId) -> bool {
        self.contains_key(handle)
    }
}

impl<K> RowLookup<RowId> for MountedRows<'_, K> {
    fn is_live(&self, handle: RowId) -> bool {
        self.rows.is_live(handle)
    }
}

impl<K: fmt::Debug> RowHost<RowId> for MountedRows<'_, K> {
    fn close_row(&mut self, handle: RowId) {
        if let Some(row) = self.rows.get_mut(handle) {
            row.close(&mut *self.driver);
        }
    }
}

/// A list of swipeable rows.
///
/// `K` is the caller's stable item key. `D` is the animation engine; the
/// default [`FrameAnimator`] is advanced with [`tick`](Self::tick).
pub struct SwipeList<K, D = FrameAnimator> {
    config: SwipeConfig,
    driver: D,
    rows: SlotMap<RowId, RowController<K>>,
    registry: RowRegistry<K, RowId>,
    hidden_area_handler: Option<HiddenAreaHandler<K>>,

    /// Emitted when a row claims a horizontal drag.
    pub row_claimed: Signal<K>,
    /// Emitted when a claimed drag is released, with the snap decision.
    pub row_released: Signal<(K, SnapDecision)>,
    /// Emitted when a row is tapped. The host forwards this to the item's own
    /// tap handler.
    pub row_tapped: Signal<K>,
}

impl<K: fmt::Debug, D: fmt::Debug> fmt::Debug for SwipeList<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeList")
            .field("rows", &self.rows.len())
            .field("registry", &self.registry)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

impl<K> SwipeList<K, FrameAnimator>
where
    K: Clone + Eq + Hash + fmt::Debug + 'static,
{
    /// Create a list driven by a [`FrameAnimator`].
    pub fn new(config: SwipeConfig) -> Result<Self> {
        Self::with_driver(config, FrameAnimator::new())
    }

    /// Advance animations to `now`. Returns `true` while anything is moving.
    ///
    /// Delete callbacks of collapses that finish on this frame run before
    /// this returns.
    pub fn tick(&mut self, now: Duration) -> bool {
        let _span = PerfSpan::new(span_names::FRAME);
        self.driver.tick(now)
    }

    /// Advance animations by `dt`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let _span = PerfSpan::new(span_names::FRAME);
        self.driver.advance(dt)
    }

    /// Tick in fixed steps until idle or `max_frames` have run.
    pub fn run_until_idle(&mut self, step: Duration, max_frames: usize) -> bool {
        self.driver.run_until_idle(step, max_frames)
    }
}

impl<K, D> SwipeList<K, D>
where
    K: Clone + Eq + Hash + fmt::Debug + 'static,
    D: AnimationDriver,
{
    /// Create a list animated by `driver`.
    ///
    /// Fails if `config` does not validate.
    pub fn with_driver(config: SwipeConfig, driver: D) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            target: targets::LIST,
            hidden_area_width = config.hidden_area_width,
            line_height = config.line_height,
            "swipe list created"
        );
        Ok(Self {
            config,
            driver,
            rows: SlotMap::with_key(),
            registry: RowRegistry::new(),
            hidden_area_handler: None,
            row_claimed: Signal::new(),
            row_released: Signal::new(),
            row_tapped: Signal::new(),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The animation engine.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the animation engine.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Styling for the hidden-area container, as configured.
    pub fn hidden_area_style(&self) -> Option<&toml::Value> {
        self.config.hidden_area_style.as_ref()
    }

    /// Layout of item `index` when the fixed-size fast path is enabled.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.config
            .fixed_row_layout
            .then(|| ItemLayout::fixed(self.config.line_height, index))
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Mount a row for `key`. A previous registration of the same key is
    /// replaced.
    pub fn mount(&mut self, key: K) -> RowId {
        let row = RowController::new(key.clone(), &mut self.driver, &self.config);
        let id = self.rows.insert(row);
        if let Some(previous) = self.registry.register(key.clone(), id)
            && self.rows.contains_key(previous)
        {
            tracing::debug!(target: targets::LIST, ?key, ?previous, "key mounted while its previous row is still mounted");
        }
        tracing::debug!(target: targets::LIST, ?key, ?id, "row mounted");
        id
    }

    /// Unmount a row and release its animated values.
    ///
    /// A row unmounted mid-collapse still runs its delete callback, once.
    pub fn unmount(&mut self, id: RowId) -> bool {
        let Some(row) = self.rows.remove(id) else {
            tracing::trace!(target: targets::LIST, ?id, "unmount of stale row");
            return false;
        };
        self.registry.unregister(row.key(), id);
        tracing::debug!(target: targets::LIST, key = ?row.key(), phase = ?row.phase(), "row unmounted");
        row.detach(&mut self.driver);
        true
    }

    // =========================================================================
    // Touch routing
    // =========================================================================

    /// Touch down on a row.
    pub fn touch_start(&mut self, id: RowId, sample: TouchSample) {
        match self.rows.get_mut(id) {
            Some(row) => row.touch_start(sample),
            None => tracing::trace!(target: targets::LIST, ?id, "touch on stale row"),
        }
    }

    /// Touch moved on a row.
    ///
    /// Returns `true` while the row owns the gesture; the host should stop
    /// scrolling for the rest of the touch.
    pub fn touch_move(&mut self, id: RowId, sample: TouchSample) -> bool {
        let Some(row) = self.rows.get_mut(id) else {
            return false;
        };
        let event = row.touch_move(&mut self.driver, sample);
        let claimed = row.gesture_state() == TrackerState::HorizontalDrag;
        if let Some(event) = event {
            self.dispatch(id, event);
        }
        claimed
    }

    /// Touch lifted from a row.
    pub fn touch_end(&mut self, id: RowId, sample: TouchSample) {
        let Some(row) = self.rows.get_mut(id) else {
            return;
        };
        let event = row.touch_end(&mut self.driver, sample);
        if let Some(event) = event {
            self.dispatch(id, event);
        }
    }

    /// Touch lifted from a row, with a fling velocity (units per millisecond)
    /// reported by the host.
    pub fn touch_end_with_velocity(&mut self, id: RowId, sample: TouchSample, velocity_x: f64) {
        let Some(row) = self.rows.get_mut(id) else {
            return;
        };
        let event = row.touch_end_with_velocity(&mut self.driver, sample, velocity_x);
        if let Some(event) = event {
            self.dispatch(id, event);
        }
    }

    /// The host cancelled a touch on a row.
    pub fn touch_cancel(&mut self, id: RowId) {
        let Some(row) = self.rows.get_mut(id) else {
            return;
        };
        let event = row.touch_cancel(&mut self.driver);
        if let Some(event) = event {
            self.dispatch(id, event);
        }
    }

    /// The list scrolled. The open row, if any, is closed.
    pub fn scroll(&mut self) {
        let (registry, mut host) = self.split();
        registry.on_scroll(&mut host);
    }

    // =========================================================================
    // Row commands
    // =========================================================================

    /// Open the row for `key`, closing any other open row first.
    pub fn open(&mut self, key: &K) -> bool {
        let Some(id) = self.live_id(key) else {
            return false;
        };
        if self.rows.get(id).is_some_and(RowController::is_deleting) {
            return false;
        }
        let (registry, mut host) = self.split();
        registry.on_claim(id, &mut host);
        self.rows
            .get_mut(id)
            .is_some_and(|row| row.open(&mut self.driver))
    }

    /// Close the row for `key`.
    pub fn close(&mut self, key: &K) -> bool {
        let Some(id) = self.live_id(key) else {
            return false;
        };
        let closed = self
            .rows
            .get_mut(id)
            .is_some_and(|row| row.close(&mut self.driver));
        self.registry.on_closed(id);
        closed
    }

    /// Collapse the row for `key`, then call `on_complete`.
    ///
    /// `on_complete` is where the caller removes the item from its data
    /// source; it runs exactly once, after the collapse. If `key` has no
    /// mounted row there is nothing to animate and `on_complete` runs
    /// immediately. If the row is already deleting, the request is rejected
    /// and `on_complete` is dropped.
    pub fn delete_row<F>(&mut self, key: &K, on_complete: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        let Some(id) = self.live_id(key) else {
            tracing::debug!(target: targets::LIST, ?key, "delete of unmounted row completes immediately");
            on_complete();
            return false;
        };
        let started = match self.rows.get_mut(id) {
            Some(row) => row.delete_row(&mut self.driver, on_complete),
            None => false,
        };
        self.registry.on_closed(id);
        started
    }

    /// Install the hidden-area press handler.
    pub fn set_hidden_area_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&K, Option<RowRef<'_, K>>) + 'static,
    {
        self.hidden_area_handler = Some(Box::new(handler));
    }

    /// Remove the hidden-area press handler, restoring the default close.
    pub fn clear_hidden_area_handler(&mut self) {
        self.hidden_area_handler = None;
    }

    /// The hidden area of `key` was pressed.
    ///
    /// Calls the installed handler with the row, or `None` if the item has no
    /// mounted row. Without a handler the row is closed.
    pub fn press_hidden_area(&mut self, key: &K) {
        let id = self.live_id(key);
        tracing::debug!(target: targets::LIST, ?key, mounted = id.is_some(), "hidden area pressed");

        match self.hidden_area_handler.take() {
            Some(mut handler) => {
                let driver: &mut dyn AnimationDriver = &mut self.driver;
                let row = id
                    .and_then(|id| self.rows.get_mut(id))
                    .map(|row| RowRef { row, driver });
                handler(key, row);
                self.hidden_area_handler = Some(handler);
            }
            None => {
                if let Some(row) = id.and_then(|id| self.rows.get_mut(id)) {
                    row.close(&mut self.driver);
                }
            }
        }

        if let Some(id) = id
            && !self.rows.get(id).is_some_and(RowController::is_open)
        {
            self.registry.on_closed(id);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of mounted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are mounted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A mounted row.
    pub fn row(&self, id: RowId) -> Option<&RowController<K>> {
        self.rows.get(id)
    }

    /// Iterate over the mounted rows.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &RowController<K>)> {
        self.rows.iter()
    }

    /// Handle of the row mounted for `key`.
    pub fn row_id(&self, key: &K) -> Option<RowId> {
        self.live_id(key)
    }

    /// Horizontal offset of the row for `key`.
    pub fn offset_x(&self, key: &K) -> Option<f64> {
        self.row_for(key).map(|row| row.offset_x(&self.driver))
    }

    /// Height of the row for `key`.
    pub fn height(&self, key: &K) -> Option<f64> {
        self.row_for(key).map(|row| row.height(&self.driver))
    }

    /// Phase of the row for `key`.
    pub fn phase(&self, key: &K) -> Option<RowPhase> {
        self.row_for(key).map(RowController::phase)
    }

    /// Key of the row currently open or being dragged open.
    pub fn open_row(&self) -> Option<&K> {
        self.registry
            .current_open_live(&self.rows)
            .and_then(|id| self.rows.get(id))
            .map(RowController::key)
    }

    /// Number of rows whose phase is [`RowPhase::OpenSnapped`]. Never more
    /// than one.
    pub fn open_count(&self) -> usize {
        self.rows.values().filter(|row| row.is_open()).count()
    }

    fn row_for(&self, key: &K) -> Option<&RowController<K>> {
        self.live_id(key).and_then(|id| self.rows.get(id))
    }

    fn live_id(&self, key: &K) -> Option<RowId> {
        self.registry.lookup(key, &self.rows)
    }

    fn split(&mut self) -> (&mut RowRegistry<K, RowId>, MountedRows<'_, K>) {
        (
            &mut self.registry,
            MountedRows {
                rows: &mut self.rows,
                driver: &mut self.driver,
            },
        )
    }

    fn dispatch(&mut self, id: RowId, event: RowEvent) {
        let Some(key) = self.rows.get(id).map(|row| row.key().clone()) else {
            return;
        };
        match event {
            RowEvent::Claimed => {
                let (registry, mut host) = self.split();
                registry.on_claim(id, &mut host);
                self.row_claimed.emit(key);
            }
            RowEvent::Released(decision) => {
                let (registry, mut host) = self.split();
                match decision {
                    // Re-assert ownership: a scroll may have cleared it mid-drag.
                    SnapDecision::Open => registry.on_claim(id, &mut host),
                    SnapDecision::Close => registry.on_closed(id),
                }
                self.row_released.emit((key, decision));
            }
            RowEvent::Tapped => self.row_tapped.emit(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const FRAME: Duration = Duration::from_millis(16);

    fn list_with(keys: &[&'static str]) -> (SwipeList<&'static str>, Vec<RowId>) {
        let mut list = SwipeList::new(SwipeConfig::default()).unwrap();
        let ids = keys.iter().map(|key| list.mount(*key)).collect();
        (list, ids)
    }

    fn swipe_open(list: &mut SwipeList<&'static str>, id: RowId) {
        list.touch_start(id, TouchSample::at_millis(200.0, 20.0, 0));
        assert!(list.touch_move(id, TouchSample::at_millis(150.0, 21.0, 16)));
        list.touch_end_with_velocity(id, TouchSample::at_millis(110.0, 21.0, 32), -0.5);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SwipeConfig::default().with_line_height(-1.0);
        assert!(SwipeList::<u32>::new(config).is_err());
    }

    #[test]
    fn test_mount_and_unmount() {
        let (mut list, ids) = list_with(&["a", "b"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.row_id(&"a"), Some(ids[0]));
        assert_eq!(list.height(&"b"), Some(64.0));
        assert_eq!(list.driver().len(), 4);

        assert!(list.unmount(ids[0]));
        assert!(!list.unmount(ids[0]));
        assert_eq!(list.row_id(&"a"), None);
        assert_eq!(list.offset_x(&"a"), None);
        assert_eq!(list.driver().len(), 2);
    }

    #[test]
    fn test_remount_replaces_registration() {
        let (mut list, ids) = list_with(&["a"]);
        list.unmount(ids[0]);
        let again = list.mount("a");
        assert_ne!(again, ids[0]);
        assert_eq!(list.row_id(&"a"), Some(again));

        // A stale handle is a no-op.
        list.touch_start(ids[0], TouchSample::at_millis(0.0, 0.0, 0));
        assert!(!list.touch_move(ids[0], TouchSample::at_millis(-50.0, 0.0, 10)));
    }

    #[test]
    fn test_registry_follows_mounts() {
        let (mut list, ids) = list_with(&["a", "b"]);
        let again = list.mount("a");
        assert_eq!(list.registry.len(), 2);
        assert_eq!(list.registry.lookup(&"a", &list.rows), Some(again));

        // Unmounting the replaced row keeps the newer registration.
        list.unmount(ids[0]);
        assert_eq!(list.row_id(&"a"), Some(again));
        list.open(&"a");
        assert_eq!(list.open_row(), Some(&"a"));

        list.unmount(again);
        list.unmount(ids[1]);
        assert!(list.registry.is_empty());
        assert_eq!(list.open_row(), None);
        assert_eq!(list.row_id(&"a"), None);
    }

    #[test]
    fn test_hidden_area_press_on_replaced_row_reaches_live_row() {
        let (mut list, ids) = list_with(&["a"]);
        let again = list.mount("a");
        list.unmount(ids[0]);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        list.set_hidden_area_handler(move |key, row| {
            s.lock().push((*key, row.map(|row| row.phase())));
        });
        list.open(&"a");
        list.press_hidden_area(&"a");
        list.press_hidden_area(&"gone");

        assert_eq!(
            *seen.lock(),
            vec![("a", Some(RowPhase::OpenSnapped)), ("gone", None)]
        );
        assert_eq!(list.row_id(&"a"), Some(again));
    }

    #[test]
    fn test_signals() {
        let (mut list, ids) = list_with(&["a", "b"]);
        let log = Arc::new(Mutex::new(Vec::new()));

        let l = log.clone();
        list.row_claimed.connect(move |key| l.lock().push(format!("claimed {key}")));
        let l = log.clone();
        list.row_released
            .connect(move |(key, decision)| l.lock().push(format!("released {key} {decision:?}")));
        let l = log.clone();
        list.row_tapped.connect(move |key| l.lock().push(format!("tapped {key}")));

        swipe_open(&mut list, ids[0]);
        list.touch_start(ids[1], TouchSample::at_millis(10.0, 10.0, 100));
        list.touch_end(ids[1], TouchSample::at_millis(10.0, 10.0, 150));

        assert_eq!(
            *log.lock(),
            vec!["claimed a", "released a Open", "tapped b"]
        );
    }

    #[test]
    fn test_released_close_payload_and_disconnect() {
        let (mut list, ids) = list_with(&["a"]);
        let released = Arc::new(Mutex::new(Vec::new()));
        let tapped = Arc::new(Mutex::new(0));

        let r = released.clone();
        list.row_released.connect(move |payload| r.lock().push(*payload));
        let t = tapped.clone();
        let tap_id = list.row_tapped.connect(move |_| *t.lock() += 1);

        list.touch_start(ids[0], TouchSample::at_millis(200.0, 20.0, 0));
        assert!(list.touch_move(ids[0], TouchSample::at_millis(180.0, 20.0, 16)));
        list.touch_end_with_velocity(ids[0], TouchSample::at_millis(180.0, 20.0, 32), 0.0);
        assert_eq!(*released.lock(), vec![("a", SnapDecision::Close)]);

        assert!(list.row_tapped.disconnect(tap_id));
        list.touch_start(ids[0], TouchSample::at_millis(10.0, 10.0, 100));
        list.touch_end(ids[0], TouchSample::at_millis(10.0, 10.0, 150));
        assert_eq!(*tapped.lock(), 0);
        assert_eq!(list.row_tapped.connection_count(), 0);
    }

    #[test]
    fn test_programmatic_open_closes_other() {
        let (mut list, _) = list_with(&["a", "b"]);
        assert!(list.open(&"a"));
        list.run_until_idle(FRAME, 200);
        assert_eq!(list.offset_x(&"a"), Some(-72.0));

        assert!(list.open(&"b"));
        assert_eq!(list.phase(&"a"), Some(RowPhase::ClosedSnapped));
        assert_eq!(list.open_row(), Some(&"b"));
        list.run_until_idle(FRAME, 200);
        assert_eq!(list.offset_x(&"a"), Some(0.0));
        assert_eq!(list.offset_x(&"b"), Some(-72.0));
        assert_eq!(list.open_count(), 1);
    }

    #[test]
    fn test_close_clears_open_row() {
        let (mut list, _) = list_with(&["a"]);
        list.open(&"a");
        assert!(list.close(&"a"));
        assert_eq!(list.open_row(), None);
        assert!(!list.close(&"missing"));
    }

    #[test]
    fn test_scroll_during_drag_then_open() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.touch_start(ids[0], TouchSample::at_millis(200.0, 20.0, 0));
        list.touch_move(ids[0], TouchSample::at_millis(150.0, 21.0, 16));
        list.scroll();
        assert_eq!(list.open_row(), None);

        list.touch_end_with_velocity(ids[0], TouchSample::at_millis(110.0, 21.0, 32), -0.5);
        assert_eq!(list.open_row(), Some(&"a"));

        list.open(&"b");
        assert_eq!(list.phase(&"a"), Some(RowPhase::ClosedSnapped));
        assert_eq!(list.open_count(), 1);
    }

    #[test]
    fn test_hidden_area_default_closes() {
        let (mut list, _) = list_with(&["a"]);
        list.open(&"a");
        list.press_hidden_area(&"a");
        assert_eq!(list.phase(&"a"), Some(RowPhase::ClosedSnapped));
        assert_eq!(list.open_row(), None);

        // Unknown key is a miss, not a fault.
        list.press_hidden_area(&"zzz");
    }

    #[test]
    fn test_hidden_area_handler_receives_row() {
        let (mut list, ids) = list_with(&["a", "b"]);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        list.set_hidden_area_handler(move |key, row| {
            s.lock().push((*key, row.as_ref().map(|row| row.phase())));
        });

        list.open(&"a");
        list.press_hidden_area(&"a");
        list.unmount(ids[1]);
        list.press_hidden_area(&"b");

        assert_eq!(
            *seen.lock(),
            vec![("a", Some(RowPhase::OpenSnapped)), ("b", None)]
        );
        // The handler did nothing, so the row stays open.
        assert_eq!(list.open_row(), Some(&"a"));

        list.clear_hidden_area_handler();
        list.press_hidden_area(&"a");
        assert_eq!(list.open_row(), None);
    }

    #[test]
    fn test_delete_of_unmounted_row_completes_immediately() {
        let (mut list, _) = list_with(&[]);
        let done = Arc::new(Mutex::new(false));
        let d = done.clone();
        assert!(!list.delete_row(&"ghost", move || *d.lock() = true));
        assert!(*done.lock());
    }

    #[test]
    fn test_item_layout() {
        let (list, _) = list_with(&[]);
        assert_eq!(list.item_layout(2), None);

        let config = SwipeConfig::default().with_fixed_row_layout(true);
        let list = SwipeList::<u32>::new(config).unwrap();
        assert_eq!(
            list.item_layout(2),
            Some(ItemLayout {
                length: 64.0,
                offset: 128.0,
                index: 2
            })
        );
    }
}

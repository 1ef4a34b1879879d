//! Properties that must hold for any event sequence.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use swipelist::{
    Clock, ManualClock, RowId, RowPhase, SwipeConfig, SwipeList, TouchSample, TrackerState,
};

const FRAME: Duration = Duration::from_millis(16);
const WIDTH: f64 = 72.0;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn list_of(n: u32) -> (SwipeList<u32>, Vec<RowId>) {
    setup();
    let mut list = SwipeList::new(SwipeConfig::default()).unwrap();
    let ids = (0..n).map(|key| list.mount(key)).collect();
    (list, ids)
}

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * (self.next() % 10_000) as f64 / 10_000.0
    }
}

#[test]
fn test_vertical_gesture_never_moves_row() {
    let mut rng = Lcg(7);
    for _ in 0..50 {
        let (mut list, ids) = list_of(1);
        let id = ids[0];
        list.touch_start(id, TouchSample::at_millis(200.0, 200.0, 0));

        // First decisive sample is mostly vertical.
        let dy = rng.range(3.0, 40.0) * if rng.next() % 2 == 0 { 1.0 } else { -1.0 };
        let dx = rng.range(-0.99, 0.99) * dy.abs();
        assert!(!list.touch_move(id, TouchSample::at_millis(200.0 + dx, 200.0 + dy, 10)));

        for step in 2..20u64 {
            let x = 200.0 + rng.range(-300.0, 300.0);
            let y = 200.0 + rng.range(-300.0, 300.0);
            assert!(!list.touch_move(id, TouchSample::at_millis(x, y, step * 10)));
            assert_eq!(list.offset_x(&0), Some(0.0));
        }
        list.touch_end_with_velocity(id, TouchSample::at_millis(0.0, 0.0, 300), -5.0);
        assert_eq!(list.offset_x(&0), Some(0.0));
        assert_eq!(list.phase(&0), Some(RowPhase::Idle));
        assert_eq!(list.driver().active_count(), 0);
    }
}

#[test]
fn test_drag_offset_stays_in_bounds() {
    let mut rng = Lcg(11);
    let (mut list, ids) = list_of(1);
    let id = ids[0];

    for gesture in 0..30u64 {
        let t0 = gesture * 1000;
        list.touch_start(id, TouchSample::at_millis(200.0, 50.0, t0));
        assert!(list.touch_move(id, TouchSample::at_millis(195.0, 50.0, t0 + 5)));

        for step in 1..30u64 {
            let x = 200.0 + rng.range(-400.0, 150.0);
            let dx = x - 200.0;
            list.touch_move(id, TouchSample::at_millis(x, 52.0, t0 + 5 + step * 8));
            let offset = list.offset_x(&0).unwrap();
            if dx > 0.0 {
                assert_eq!(offset, 0.0, "rightward dx {dx} must force 0");
            } else {
                assert!((-WIDTH..=0.0).contains(&offset), "offset {offset} for dx {dx}");
                assert_eq!(offset, dx.max(-WIDTH));
            }
        }
        list.touch_cancel(id);
        list.run_until_idle(FRAME, 500);
    }
}

#[test]
fn test_rightward_motion_overrides_open_drag() {
    let (mut list, ids) = list_of(1);
    let id = ids[0];
    list.touch_start(id, TouchSample::at_millis(200.0, 50.0, 0));
    list.touch_move(id, TouchSample::at_millis(100.0, 50.0, 10));
    assert_eq!(list.offset_x(&0), Some(-WIDTH));

    list.touch_move(id, TouchSample::at_millis(200.1, 50.0, 20));
    assert_eq!(list.offset_x(&0), Some(0.0));
}

#[test]
fn test_at_most_one_row_open() {
    let mut rng = Lcg(42);
    let (mut list, ids) = list_of(6);
    let mut now = 0u64;

    for round in 0..300 {
        let row = (rng.next() % ids.len() as u64) as usize;
        let key = row as u32;
        match rng.next() % 6 {
            0 | 1 => {
                let id = ids[row];
                let dx = rng.range(-120.0, 40.0);
                let velocity = rng.range(-1.0, 0.5);
                list.touch_start(id, TouchSample::at_millis(200.0, 10.0, now));
                list.touch_move(id, TouchSample::at_millis(196.0, 10.0, now + 8));
                list.touch_move(id, TouchSample::at_millis(200.0 + dx, 11.0, now + 16));
                list.touch_end_with_velocity(id, TouchSample::at_millis(200.0 + dx, 11.0, now + 24), velocity);
            }
            2 => {
                list.open(&key);
            }
            3 => {
                list.close(&key);
            }
            4 => list.scroll(),
            _ => list.press_hidden_area(&key),
        }
        assert!(list.open_count() <= 1, "round {round}: {} rows open", list.open_count());

        for _ in 0..(rng.next() % 4) {
            now += 16;
            list.tick(Duration::from_millis(now));
        }
        assert!(list.open_count() <= 1, "round {round} after frames");

        if let Some(open) = list.open_row() {
            let open = *open;
            for other in (0..ids.len() as u32).filter(|k| *k != open) {
                assert_ne!(list.phase(&other), Some(RowPhase::OpenSnapped));
            }
        }
    }
}

#[test]
fn test_close_on_closed_row_is_noop() {
    let (mut list, _) = list_of(1);
    list.open(&0);
    list.run_until_idle(FRAME, 500);
    list.close(&0);
    list.run_until_idle(FRAME, 500);
    assert_eq!(list.offset_x(&0), Some(0.0));
    assert_eq!(list.phase(&0), Some(RowPhase::ClosedSnapped));

    assert!(!list.close(&0));
    assert_eq!(list.driver().active_count(), 0);
    assert_eq!(list.phase(&0), Some(RowPhase::ClosedSnapped));
}

#[test]
fn test_unclaimed_release_has_no_effect() {
    let (mut list, ids) = list_of(1);
    list.touch_start(ids[0], TouchSample::at_millis(10.0, 10.0, 0));
    list.touch_move(ids[0], TouchSample::at_millis(11.0, 10.0, 8));
    list.touch_cancel(ids[0]);
    assert_eq!(list.phase(&0), Some(RowPhase::Idle));
    assert_eq!(list.driver().active_count(), 0);
}

#[test]
fn test_delete_wins_over_drag() {
    let (mut list, ids) = list_of(2);
    let id = ids[0];
    let calls = Rc::new(Cell::new(0));

    list.touch_start(id, TouchSample::at_millis(200.0, 10.0, 0));
    assert!(list.touch_move(id, TouchSample::at_millis(170.0, 10.0, 10)));
    assert_eq!(list.open_row(), Some(&0));

    let c = calls.clone();
    assert!(list.delete_row(&0, move || c.set(c.get() + 1)));
    assert_eq!(list.open_row(), None);
    assert_eq!(list.row(id).unwrap().gesture_state(), TrackerState::Rejected);

    // The rest of the gesture and later commands are ignored.
    assert!(!list.touch_move(id, TouchSample::at_millis(100.0, 10.0, 20)));
    list.touch_end_with_velocity(id, TouchSample::at_millis(100.0, 10.0, 30), -2.0);
    assert!(!list.open(&0));
    assert!(!list.close(&0));
    assert_eq!(list.phase(&0), Some(RowPhase::Deleting));
    assert_eq!(list.offset_x(&0), Some(-30.0));

    // A second delete is rejected and its callback never runs.
    let c = calls.clone();
    assert!(!list.delete_row(&0, move || c.set(c.get() + 100)));

    list.run_until_idle(FRAME, 100);
    assert_eq!(calls.get(), 1);
    assert_eq!(list.offset_x(&0), Some(-30.0));

    // Other rows keep working.
    assert!(list.open(&1));
}

#[test]
fn test_delete_wins_over_pending_snap() {
    let (mut list, _) = list_of(1);
    list.open(&0);
    list.advance(FRAME);
    list.advance(FRAME * 2);
    let frozen = list.offset_x(&0).unwrap();
    assert!(frozen < 0.0 && frozen > -WIDTH);

    list.delete_row(&0, || {});
    list.run_until_idle(FRAME, 100);
    assert_eq!(list.offset_x(&0), Some(frozen));
    assert_eq!(list.height(&0), Some(0.0));
}

#[test]
fn test_unmount_mid_collapse_completes_once() {
    let (mut list, ids) = list_of(1);
    let calls = Rc::new(Cell::new(0));

    let c = calls.clone();
    list.delete_row(&0, move || c.set(c.get() + 1));
    list.tick(Duration::from_millis(200));
    assert_eq!(calls.get(), 0);

    list.unmount(ids[0]);
    assert_eq!(calls.get(), 1);
    assert!(list.driver().is_empty());

    list.run_until_idle(FRAME, 100);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_stale_handles_are_misses() {
    let (mut list, ids) = list_of(2);
    list.open(&0);
    list.unmount(ids[0]);

    assert_eq!(list.open_row(), None);
    assert!(!list.open(&0));
    assert!(!list.close(&0));
    assert_eq!(list.phase(&0), None);
    assert!(!list.touch_move(ids[0], TouchSample::at_millis(0.0, 0.0, 0)));

    // Claiming another row does not touch the unmounted one.
    list.touch_start(ids[1], TouchSample::at_millis(200.0, 10.0, 0));
    assert!(list.touch_move(ids[1], TouchSample::at_millis(150.0, 10.0, 10)));
    assert_eq!(list.open_row(), Some(&1));
}

#[test]
fn test_recycled_key_gets_fresh_row() {
    let (mut list, ids) = list_of(1);
    list.open(&0);
    list.run_until_idle(FRAME, 500);

    // The item scrolls out of the window and back in.
    list.unmount(ids[0]);
    let id = list.mount(0);
    assert_ne!(id, ids[0]);
    assert_eq!(list.phase(&0), Some(RowPhase::Idle));
    assert_eq!(list.offset_x(&0), Some(0.0));
}

#[test]
fn test_manual_clock_drives_frames() {
    let (mut list, _) = list_of(1);
    let clock = ManualClock::new();

    list.open(&0);
    let mut frames = 0;
    while list.tick(clock.advance(FRAME)) {
        frames += 1;
        assert!(frames < 500);
    }
    assert_eq!(list.driver().now(), clock.now());
    assert_eq!(list.offset_x(&0), Some(-WIDTH));
}

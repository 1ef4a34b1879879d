//! Replays a short session against a swipeable list and prints each frame.
//!
//! Run with: RUST_LOG=swipelist=debug cargo run -p swipelist --example swipe_demo

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use swipelist::{ManualClock, RowId, SwipeConfig, SwipeList, TouchSample};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

struct Host {
    list: SwipeList<String>,
    items: Rc<RefCell<Vec<String>>>,
    mounted: Vec<(String, RowId)>,
    clock: ManualClock,
}

impl Host {
    fn new() -> swipelist::Result<Self> {
        let mut list = SwipeList::new(SwipeConfig::default())?;
        let items: Vec<String> = ["inbox", "drafts", "archive", "spam"]
            .into_iter()
            .map(String::from)
            .collect();
        let mounted = items
            .iter()
            .map(|item| (item.clone(), list.mount(item.clone())))
            .collect();

        list.row_claimed.connect(|key| println!("  > {key} claimed the gesture"));
        list.row_released
            .connect(|(key, decision)| println!("  > {key} released: {decision:?}"));
        list.row_tapped.connect(|key| println!("  > {key} tapped"));

        Ok(Self {
            list,
            items: Rc::new(RefCell::new(items)),
            mounted,
            clock: ManualClock::new(),
        })
    }

    fn id(&self, key: &str) -> Option<RowId> {
        self.mounted
            .iter()
            .find(|(item, _)| item == key)
            .map(|(_, id)| *id)
    }

    fn now_ms(&self) -> u64 {
        self.list.driver().now().as_millis() as u64
    }

    fn swipe(&mut self, key: &str, dx: f64, velocity_x: f64) {
        let Some(id) = self.id(key) else {
            return;
        };
        let t = self.now_ms();
        println!("swipe {key} by {dx} at {velocity_x} units/ms");
        self.list.touch_start(id, TouchSample::at_millis(300.0, 20.0, t));
        self.list.touch_move(id, TouchSample::at_millis(296.0, 20.0, t + 8));
        self.list.touch_move(id, TouchSample::at_millis(300.0 + dx, 21.0, t + 16));
        self.list
            .touch_end_with_velocity(id, TouchSample::at_millis(300.0 + dx, 21.0, t + 24), velocity_x);
        self.run();
    }

    /// Tick until idle, then mirror the data source: unmount rows whose item
    /// was removed.
    fn run(&mut self) {
        while self.list.tick(self.clock.advance(FRAME)) {}

        let items = self.items.borrow();
        let (kept, removed): (Vec<_>, Vec<_>) = self
            .mounted
            .drain(..)
            .partition(|(item, _)| items.contains(item));
        drop(items);

        for (item, id) in removed {
            println!("  > {item} removed from the data source, unmounting");
            self.list.unmount(id);
        }
        self.mounted = kept;
        self.print();
    }

    fn print(&self) {
        for (item, _) in &self.mounted {
            println!(
                "    {item:<8} offset {:>7.2}  height {:>5.1}  {:?}",
                self.list.offset_x(item).unwrap_or_default(),
                self.list.height(item).unwrap_or_default(),
                self.list.phase(item).unwrap_or_default(),
            );
        }
    }
}

fn main() -> swipelist::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = Host::new()?;
    host.print();

    host.swipe("inbox", -90.0, -0.4);
    host.swipe("drafts", -30.0, 0.05);
    host.swipe("archive", -60.0, -0.3);

    println!("scroll");
    host.list.scroll();
    host.run();

    println!("delete spam from its hidden area");
    let items = host.items.clone();
    host.list.set_hidden_area_handler(move |key: &String, row| {
        let Some(mut row) = row else {
            return;
        };
        let items = items.clone();
        let key = key.clone();
        row.delete_row(move || items.borrow_mut().retain(|item| *item != key));
    });
    host.list.open(&"spam".to_string());
    host.run();
    host.list.press_hidden_area(&"spam".to_string());
    host.run();

    Ok(())
}

//! Browser host: window scroll, `localStorage` and gloo timers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::surface::{PreferenceStore, Scheduler, Task, Viewport};

/// Receiver for tasks whose timers fired. Installed once the controller exists.
pub type TaskSink = Rc<RefCell<Option<Box<dyn Fn(Task)>>>>;

pub struct BrowserHost {
    window: Window,
    storage: Option<Storage>,
    timers: HashMap<Task, Timeout>,
    sink: TaskSink,
}

impl BrowserHost {
    pub fn new(window: Window, sink: TaskSink) -> Self {
        // Storage can be absent (privacy modes); preference reads then miss.
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { window, storage, timers: HashMap::new(), sink }
    }
}

impl Viewport for BrowserHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl PreferenceStore for BrowserHost {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

impl Scheduler for BrowserHost {
    fn schedule(&mut self, task: Task, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let sink = Rc::clone(&self.sink);
        let timeout = Timeout::new(millis, move || {
            if let Some(deliver) = sink.borrow().as_ref() {
                deliver(task);
            }
        });
        // Dropping a replaced timeout clears it.
        self.timers.insert(task, timeout);
    }

    fn cancel(&mut self, task: Task) {
        self.timers.remove(&task);
    }
}

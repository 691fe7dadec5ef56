//! `setInterval`-backed scheduler

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::Scheduler;

/// Repeating browser timer around one bound callback
#[derive(Default)]
pub struct IntervalScheduler {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
    interval_ms: Option<u32>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick callback. Must happen before the first `arm`.
    pub fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Scheduler for IntervalScheduler {
    fn arm(&mut self, interval_ms: u32) {
        self.cancel();

        let Ok(timeout) = i32::try_from(interval_ms) else {
            log::error!("Interval {} ms out of range, timer not armed", interval_ms);
            return;
        };
        let Some(window) = web_sys::window() else {
            log::error!("No window, tick timer not armed");
            return;
        };
        let Some(callback) = self.callback.as_ref() else {
            log::error!("Tick callback not bound, timer not armed");
            return;
        };

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.interval_ms = Some(interval_ms);
            }
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
        self.interval_ms = None;
    }

    fn armed(&self) -> Option<u32> {
        self.interval_ms
    }
}

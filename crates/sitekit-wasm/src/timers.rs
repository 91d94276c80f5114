// File: src/timers.rs
// Purpose: setTimeout-backed one-shots, debouncing and async sleep

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::dom;

/// Run `callback` once after `ms` milliseconds. The closure is released by
/// the runtime after it fires.
pub fn schedule<F>(ms: u32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    )
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u32) -> Result<(), JsValue> {
    let window = dom::window()?;
    let mut scheduled = Ok(0);
    let promise = Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
    });
    scheduled?;
    JsFuture::from(promise).await.map(|_| ())
}

/// Delays a callback until `wait_ms` have passed without another trigger.
///
/// Owns the pending timer handle; each trigger clears it before scheduling
/// again, and dropping the debouncer cancels whatever is pending.
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub fn new<F>(wait_ms: u32, mut callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let fired = pending.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            fired.set(None);
            callback();
        });
        Self {
            wait_ms,
            pending,
            callback,
        }
    }

    pub fn trigger(&self) -> Result<(), JsValue> {
        let window = dom::window()?;
        if let Some(handle) = self.pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.wait_ms as i32,
        )?;
        self.pending.set(Some(handle));
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

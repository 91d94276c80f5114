// File: src/reveal.rs
// Purpose: Fade/slide-in of content as it enters the viewport

use js_sys::Array;
use sitekit_core::reveal::{
    reveal_transition, HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_SELECTORS, ROOT_MARGIN, THRESHOLD,
    VISIBLE_CLASS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

pub struct ScrollAnimations {
    observer: IntersectionObserver,
    observed: usize,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollAnimations {
    /// Returns `Ok(None)` in browsers without IntersectionObserver; content
    /// then simply stays visible.
    pub fn attach(document: &Document) -> Result<Option<Self>, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(THRESHOLD));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable, skipping reveal: {:?}", e);
                return Ok(None);
            }
        };

        let mut observed = 0;
        for selector in REVEAL_SELECTORS {
            for (index, element) in dom::elements(document.query_selector_all(selector)?)
                .into_iter()
                .enumerate()
            {
                dom::set_style(&element, "opacity", HIDDEN_OPACITY)?;
                dom::set_style(&element, "transform", HIDDEN_TRANSFORM)?;
                dom::set_style(&element, "transition", &reveal_transition(index))?;
                observer.observe(&element);
                observed += 1;
            }
        }

        tracing::debug!("Observing {} elements for reveal", observed);
        Ok(Some(Self {
            observer,
            observed,
            _callback: callback,
        }))
    }

    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Drop for ScrollAnimations {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

//! History Page
//!
//! Timeline items slide in once as they scroll into view.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::TimingConfig;
use crate::dom;
use crate::error::UiResult;
use crate::pages::annotate_dates;

pub const TIMELINE_SELECTOR: &str = ".timeline-item";

const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateX(-20px)"),
    ("transition", "all 0.6s ease-out"),
];

const REVEALED: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateX(0)")];

/// An item is revealed only once the visible fraction reaches `threshold`
pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Initialize the history page
pub fn init(document: &Document, timing: TimingConfig) -> UiResult<()> {
    annotate_dates(document, ".timeline-item time[datetime]");

    let items: Vec<HtmlElement> = dom::query_all(document, TIMELINE_SELECTOR);
    if items.is_empty() {
        return Ok(());
    }

    let threshold = timing.reveal_threshold;
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !should_reveal(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                continue;
            }
            let target = entry.target();
            if let Some(item) = target.dyn_ref::<HtmlElement>() {
                let _ = dom::set_styles(item, &REVEALED);
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for item in &items {
        dom::set_styles(item, &HIDDEN)?;
        observer.observe(item);
    }

    tracing::debug!(items = items.len(), threshold, "timeline reveal armed");
    Ok(())
}

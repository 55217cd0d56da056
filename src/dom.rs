//! DOM helpers
//!
//! Thin wrappers over `web-sys` for the selector queries, listeners and
//! inline styles used by the page initializers.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{UiError, UiResult};

/// The browser window
pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// The current document
pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// All document elements matching `selector` that are of type `T`.
///
/// An invalid selector or no matches yields an empty list.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector` that are of type `T`
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// First descendant of `root` matching `selector`, if it is of type `T`
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First document element matching `selector`, if it is of type `T`
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> UiResult<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set several inline style properties at once
pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> UiResult<()> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Set a single inline style property
pub fn set_style(el: &HtmlElement, name: &str, value: &str) -> UiResult<()> {
    el.style().set_property(name, value)?;
    Ok(())
}

/// Format a CSS pixel length
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

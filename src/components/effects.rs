//! Interactive Effects
//!
//! Ripple feedback on buttons and hover elevation on cards, installed on
//! every page.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::TimingConfig;
use crate::dom;
use crate::error::UiResult;

/// Elements that get a ripple on click
pub const BUTTON_SELECTOR: &str = ".btn";

/// Elements that lift on hover
pub const CARD_SELECTOR: &str = ".entry-card, .timeline-item, .stats-card";

/// Size and offset of a ripple relative to its button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Center a square ripple on the click point.
    ///
    /// `rect` is the button's `(left, top, width, height)` in viewport
    /// coordinates; `client` is the click position.
    pub fn at(rect: (f64, f64, f64, f64), client: (f64, f64)) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client.0 - left - size / 2.0,
            top: client.1 - top - size / 2.0,
        }
    }
}

/// Install ripple and hover effects
pub fn install(document: &Document, timing: TimingConfig) -> UiResult<()> {
    let buttons: Vec<HtmlElement> = dom::query_all(document, BUTTON_SELECTOR);
    for button in &buttons {
        let ripple_ms = timing.ripple_ms;
        dom::listen(button, "click", move |e: MouseEvent| {
            if let Err(err) = spawn_ripple(&e, ripple_ms) {
                tracing::warn!("ripple failed: {}", err);
            }
        })?;
    }

    let cards: Vec<HtmlElement> = dom::query_all(document, CARD_SELECTOR);
    for card in &cards {
        let target = card.clone();
        dom::listen(card, "mouseenter", move |_: MouseEvent| {
            let _ = dom::set_style(&target, "transform", "translateY(-4px)");
        })?;
        let target = card.clone();
        dom::listen(card, "mouseleave", move |_: MouseEvent| {
            let _ = dom::set_style(&target, "transform", "translateY(0)");
        })?;
    }

    tracing::debug!(buttons = buttons.len(), cards = cards.len(), "interactive effects installed");
    Ok(())
}

/// Spawn a ripple inside the clicked button and remove it after `ripple_ms`
pub fn spawn_ripple(event: &MouseEvent, ripple_ms: u32) -> UiResult<()> {
    let Some(button) = event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let document = dom::document()?;

    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::at(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        (f64::from(event.client_x()), f64::from(event.client_y())),
    );

    let ripple = document
        .create_element("span")?
        .unchecked_into::<HtmlElement>();
    let size = dom::px(geometry.size);
    let left = dom::px(geometry.left);
    let top = dom::px(geometry.top);
    dom::set_styles(
        &ripple,
        &[
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("left", left.as_str()),
            ("top", top.as_str()),
        ],
    )?;
    ripple.class_list().add_1("ripple")?;
    button.append_child(&ripple)?;

    Timeout::new(ripple_ms, move || ripple.remove()).forget();
    Ok(())
}

//! Pages
//!
//! Per-page initializers for the server-rendered views.

pub mod history;
pub mod home;
pub mod record;

use web_sys::{Document, Element};

use crate::dom;
use crate::format::format_date_ja;

/// Give `<time datetime>` elements a long-form date tooltip
pub(crate) fn annotate_dates(document: &Document, selector: &str) {
    for time in dom::query_all::<Element>(document, selector) {
        let Some(formatted) = time
            .get_attribute("datetime")
            .as_deref()
            .and_then(format_date_ja)
        else {
            continue;
        };
        if time.get_attribute("title").is_none() {
            let _ = time.set_attribute("title", &formatted);
        }
    }
}

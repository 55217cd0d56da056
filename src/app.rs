//! Page Controller
//!
//! Detects which server-rendered page is active and wires its behavior,
//! plus the effects and listeners shared by every page.

use std::fmt;

use web_sys::Document;

use crate::components::{effects, styles, Toaster};
use crate::config::UiConfig;
use crate::dom;
use crate::error::UiResult;
use crate::logging;
use crate::pages;
use crate::shortcuts;

/// Logical page, derived once from the URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Record,
    History,
    Unknown,
}

impl Page {
    /// Classify a URL path
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/index" => Page::Home,
            "/record" => Page::Record,
            "/history" => Page::History,
            _ => Page::Unknown,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::Record => "record",
            Page::History => "history",
            Page::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Everything an initializer needs
#[derive(Clone)]
pub struct App {
    pub document: Document,
    pub config: UiConfig,
    pub toaster: Toaster,
    pub page: Page,
}

impl App {
    /// Read config and classify the page from the current location
    pub fn new() -> UiResult<Self> {
        let document = dom::document()?;
        let path = dom::window()?.location().pathname()?;
        Ok(Self::with_path(document, &path))
    }

    /// Build an app for an explicit path
    pub fn with_path(document: Document, path: &str) -> Self {
        let config = UiConfig::load(&document);
        let toaster = Toaster::new(config.timing);
        Self {
            document,
            config,
            toaster,
            page: Page::from_path(path),
        }
    }

    /// Wire all behavior for this page.
    ///
    /// Each step is independent; a failure is logged and the rest still run.
    pub fn run(&self) {
        report("stylesheet", styles::inject(&self.document));
        report("toast host", self.toaster.mount(&self.document));
        report("interactive effects", effects::install(&self.document, self.config.timing));
        report("page initializer", self.init_page());
        report("global listeners", shortcuts::install(&self.document));
        tracing::info!(page = %self.page, "page enhancements ready");
    }

    /// Run the initializer for the current page
    fn init_page(&self) -> UiResult<()> {
        let timing = self.config.timing;
        match self.page {
            Page::Home => pages::home::init(&self.document, self.toaster, timing),
            Page::Record => pages::record::init(&self.document, self.toaster),
            Page::History => pages::history::init(&self.document, timing),
            Page::Unknown => Ok(()),
        }
    }
}

fn report(step: &str, result: UiResult<()>) {
    if let Err(e) = result {
        tracing::error!("{} failed: {}", step, e);
    }
}

/// Entry point: configure logging and enhance the current page
pub fn start() -> UiResult<()> {
    let app = App::new()?;
    logging::init(&app.config.log_level);
    tracing::debug!(page = %app.page, "starting");
    app.run();
    Ok(())
}

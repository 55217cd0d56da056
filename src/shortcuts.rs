//! Global Listeners
//!
//! Keyboard shortcuts and the delete confirmation gate, installed on every
//! page.

use web_sys::{Document, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use crate::dom;
use crate::error::UiResult;

/// Links that delete an entry
pub const DELETE_LINK_SELECTOR: &str = r#"a[href*="/delete/"]"#;

/// Prompt shown before following a delete link
pub const DELETE_PROMPT: &str = "この記録を削除しますか？";

/// Navigation triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + N
    NewRecord,
    /// Ctrl/Cmd + H
    History,
    /// Escape
    Home,
}

impl Shortcut {
    /// Match a key press against the shortcut table
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        let modifier = ctrl || meta;
        match key {
            "n" if modifier => Some(Shortcut::NewRecord),
            "h" if modifier => Some(Shortcut::History),
            "Escape" => Some(Shortcut::Home),
            _ => None,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Shortcut::NewRecord => "/record",
            Shortcut::History => "/history",
            Shortcut::Home => "/",
        }
    }

    /// Whether the browser's own binding must be suppressed
    pub fn overrides_browser(self) -> bool {
        !matches!(self, Shortcut::Home)
    }
}

/// Whether a delete should proceed given the dialog outcome.
///
/// A dialog that failed to open counts as declined.
pub fn delete_allowed<E>(answer: Result<bool, E>) -> bool {
    matches!(answer, Ok(true))
}

/// Install keyboard shortcuts and delete confirmation
pub fn install(document: &Document) -> UiResult<()> {
    install_delete_confirm(document)?;
    install_keys(document, navigate)
}

/// Gate every delete link behind a confirmation dialog
pub fn install_delete_confirm(document: &Document) -> UiResult<()> {
    let links: Vec<HtmlElement> = dom::query_all(document, DELETE_LINK_SELECTOR);
    for link in &links {
        dom::listen(link, "click", move |e: MouseEvent| {
            let answer = dom::window().and_then(|w| Ok(w.confirm_with_message(DELETE_PROMPT)?));
            if !delete_allowed(answer) {
                tracing::info!("delete cancelled");
                e.prevent_default();
            }
        })?;
    }
    tracing::debug!(delete_links = links.len(), "delete confirmation installed");
    Ok(())
}

/// Listen for shortcut keys on `target`, handing matched paths to `go`
pub fn install_keys(target: &EventTarget, go: impl Fn(&'static str) + 'static) -> UiResult<()> {
    dom::listen(target, "keydown", move |e: KeyboardEvent| {
        let Some(shortcut) = Shortcut::from_key(&e.key(), e.ctrl_key(), e.meta_key()) else {
            return;
        };
        if shortcut.overrides_browser() {
            e.prevent_default();
        }
        tracing::debug!(?shortcut, "keyboard navigation");
        go(shortcut.href());
    })
}

fn navigate(href: &'static str) {
    if let Err(err) = dom::window().and_then(|w| Ok(w.location().set_href(href)?)) {
        tracing::error!("navigation failed: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_shortcuts() {
        assert_eq!(Shortcut::from_key("n", true, false), Some(Shortcut::NewRecord));
        assert_eq!(Shortcut::from_key("n", false, true), Some(Shortcut::NewRecord));
        assert_eq!(Shortcut::from_key("h", true, false), Some(Shortcut::History));
        assert_eq!(Shortcut::from_key("h", false, true), Some(Shortcut::History));
    }

    #[test]
    fn test_plain_keys_are_ignored() {
        assert_eq!(Shortcut::from_key("n", false, false), None);
        assert_eq!(Shortcut::from_key("h", false, false), None);
        assert_eq!(Shortcut::from_key("x", true, true), None);
    }

    #[test]
    fn test_escape_goes_home_without_modifier() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::Home));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::Home));
        assert!(!Shortcut::Home.overrides_browser());
        assert!(Shortcut::NewRecord.overrides_browser());
    }

    #[test]
    fn test_targets() {
        assert_eq!(Shortcut::NewRecord.href(), "/record");
        assert_eq!(Shortcut::History.href(), "/history");
        assert_eq!(Shortcut::Home.href(), "/");
    }

    #[test]
    fn test_delete_gate() {
        assert!(delete_allowed::<()>(Ok(true)));
        assert!(!delete_allowed::<()>(Ok(false)));
        assert!(!delete_allowed(Err("dialog blocked")));
    }
}

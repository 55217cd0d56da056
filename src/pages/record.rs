//! Record Page
//!
//! Emotion picker highlighting and feedback, note auto-resize and the
//! submitting state of the record form.

use std::rc::Rc;

use leptos::*;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent,
};

use crate::components::{Severity, Toaster};
use crate::dom;
use crate::emotion;
use crate::error::UiResult;

pub const FORM_SELECTOR: &str = ".record-form";
pub const OPTION_SELECTOR: &str = ".emotion-option";
pub const NOTE_SELECTOR: &str = "#note";

const SUBMITTING_LABEL: &str = "記録中... ✨";

/// One radio choice in the emotion picker
#[derive(Clone)]
pub struct EmotionOption {
    pub root: HtmlElement,
    pub input: HtmlInputElement,
    pub label: HtmlElement,
}

impl EmotionOption {
    /// Options without a radio or label are skipped
    fn from_element(root: HtmlElement) -> Option<Self> {
        let input = dom::query_in(&root, r#"input[type="radio"]"#)?;
        let label = dom::query_in(&root, ".emotion-label")?;
        Some(Self { root, input, label })
    }

    fn apply(&self, style: &OptionStyle) -> UiResult<()> {
        self.root
            .class_list()
            .toggle_with_force("selected", style.selected)?;
        dom::set_styles(
            &self.label,
            &[("transform", style.transform), ("box-shadow", style.box_shadow)],
        )?;
        match style.accent {
            Some(color) => dom::set_style(&self.label, "--emotion-color", color)?,
            None => {
                self.label.style().remove_property("--emotion-color")?;
            }
        }
        Ok(())
    }
}

/// Visual state of one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionStyle {
    pub selected: bool,
    pub transform: &'static str,
    pub box_shadow: &'static str,
    pub accent: Option<&'static str>,
}

/// Style for an option given whether it is the current selection
pub fn option_style(selected: bool, value: &str) -> OptionStyle {
    if selected {
        OptionStyle {
            selected,
            transform: "scale(1.1)",
            box_shadow: "0 10px 25px rgba(0, 0, 0, 0.15)",
            accent: Some(emotion::color_for(value)),
        }
    } else {
        OptionStyle {
            selected,
            transform: "scale(1)",
            box_shadow: "none",
            accent: None,
        }
    }
}

/// Keys that select a focused emotion label
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Initialize the record page; does nothing without a record form.
///
/// The form may be a `<form>` or a wrapper around one; `submit` bubbles.
pub fn init(document: &Document, toaster: Toaster) -> UiResult<()> {
    let Some(form) = dom::query::<HtmlElement>(document, FORM_SELECTOR) else {
        tracing::debug!("no record form on page");
        return Ok(());
    };

    let options: Vec<EmotionOption> = dom::query_all::<HtmlElement>(document, OPTION_SELECTOR)
        .into_iter()
        .filter_map(EmotionOption::from_element)
        .collect();
    let selection = create_rw_signal(options.iter().position(|o| o.input.checked()));

    let options = Rc::new(options);
    {
        let options = Rc::clone(&options);
        create_effect(move |_| render_selection(&options, selection.get()));
    }

    for (index, option) in options.iter().enumerate() {
        let value = option.input.value();
        dom::listen(&option.input, "change", move |_: Event| {
            select(selection, toaster, index, &value);
        })?;

        let input = option.input.clone();
        let value = option.input.value();
        dom::listen(&option.label, "keydown", move |e: KeyboardEvent| {
            if !is_activation_key(&e.key()) {
                return;
            }
            e.prevent_default();
            // A checked radio fires no change on click either.
            if !input.checked() {
                input.set_checked(true);
                select(selection, toaster, index, &value);
            }
        })?;
    }

    if let Some(note) = dom::query::<HtmlTextAreaElement>(document, NOTE_SELECTOR) {
        install_auto_resize(&note)?;
    }

    let target = form.clone();
    dom::listen(&form, "submit", move |_: Event| {
        if let Some(button) = dom::query_in::<HtmlButtonElement>(&target, r#"button[type="submit"]"#) {
            if let Err(err) = show_submitting(&button) {
                tracing::warn!("could not update submit button: {}", err);
            }
        }
    })?;

    tracing::debug!(options = options.len(), "record page ready");
    Ok(())
}

fn select(selection: RwSignal<Option<usize>>, toaster: Toaster, index: usize, value: &str) {
    selection.set(Some(index));
    let message = emotion::pick_random(emotion::feedback_for(value));
    match value.parse::<emotion::Emotion>() {
        Ok(picked) => tracing::info!("selected {}", picked),
        Err(_) => tracing::warn!(value, "selected an unrecognized emotion"),
    }
    toaster.notify(message, Severity::Success);
}

fn render_selection(options: &[EmotionOption], selected: Option<usize>) {
    for (index, option) in options.iter().enumerate() {
        let style = option_style(selected == Some(index), &option.input.value());
        if let Err(err) = option.apply(&style) {
            tracing::warn!("could not style emotion option: {}", err);
        }
    }
}

fn install_auto_resize(note: &HtmlTextAreaElement) -> UiResult<()> {
    let target = note.clone();
    dom::listen(note, "input", move |_: Event| {
        let _ = dom::set_style(&target, "height", "auto");
        let height = dom::px(f64::from(target.scroll_height()));
        let _ = dom::set_style(&target, "height", &height);
    })?;

    let target = note.clone();
    dom::listen(note, "focus", move |_: Event| {
        let _ = dom::set_style(&target, "min-height", "120px");
    })
}

fn show_submitting(button: &HtmlButtonElement) -> UiResult<()> {
    button.set_inner_html(SUBMITTING_LABEL);
    button.set_disabled(true);
    dom::set_styles(
        button,
        &[
            ("background", "linear-gradient(135deg, #6C63FF, #8B5FBF)"),
            ("animation", "pulse 1s infinite"),
        ],
    )
}

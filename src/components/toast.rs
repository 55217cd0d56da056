//! Toast Notification Component
//!
//! Transient notifications that slide in from the right edge, stay for a
//! fixed duration and slide out again. Toasts are independent: there is no
//! queue, cap or de-duplication, and a scheduled hide always fires.

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::TimingConfig;
use crate::error::{UiError, UiResult};

/// Element id of the container the toast host is mounted into
pub const TOAST_ROOT_ID: &str = "emoiro-toasts";

const OFFSCREEN: &str = "translateX(400px)";
const ONSCREEN: &str = "translateX(0)";

/// Toast severity, mapped to its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#6C63FF",
            Severity::Success => "#4ECDC4",
            Severity::Error => "#EF5350",
        }
    }
}

/// Lifecycle of a toast while it is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached off-screen, waiting for the settle delay
    Entering,
    /// On-screen
    Shown,
    /// Sliding back out before removal
    Leaving,
}

impl ToastPhase {
    fn transform(self) -> &'static str {
        match self {
            ToastPhase::Shown => ONSCREEN,
            ToastPhase::Entering | ToastPhase::Leaving => OFFSCREEN,
        }
    }
}

/// A single attached toast
#[derive(Clone)]
pub struct ToastItem {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: RwSignal<ToastPhase>,
}

/// Handle for showing toasts; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<ToastItem>>,
    next_id: StoredValue<u64>,
    timing: TimingConfig,
}

impl Toaster {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            timing,
        }
    }

    /// Append the toast container to `<body>` and render into it
    pub fn mount(&self, document: &Document) -> UiResult<()> {
        let body = document.body().ok_or(UiError::MissingRoot("body"))?;
        let container = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::ElementType {
                selector: "div".to_string(),
                expected: "HtmlElement",
            })?;
        container.set_id(TOAST_ROOT_ID);
        body.append_child(&container)?;

        let toasts = self.toasts;
        mount_to(container, move || view! { <ToastHost toasts=toasts /> });
        Ok(())
    }

    /// Show a toast for the default duration
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        self.show(message, severity, self.timing.toast_default_ms)
    }

    /// Show a toast for `duration_ms`, returning its id
    pub fn show(&self, message: impl Into<String>, severity: Severity, duration_ms: u32) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let phase = create_rw_signal(ToastPhase::Entering);
        let message = message.into();
        tracing::debug!(id, severity = severity.as_str(), duration_ms, "showing toast: {}", message);

        self.toasts.update(|list| {
            list.push(ToastItem {
                id,
                message,
                severity,
                phase,
            })
        });

        // Only slide in if the hide has not already started.
        Timeout::new(self.timing.toast_settle_ms, move || {
            phase.try_update(|p| {
                if *p == ToastPhase::Entering {
                    *p = ToastPhase::Shown;
                }
            });
        })
        .forget();

        let toasts = self.toasts;
        let exit_ms = self.timing.toast_exit_ms;
        Timeout::new(duration_ms, move || {
            phase.try_set(ToastPhase::Leaving);
            Timeout::new(exit_ms, move || {
                toasts.update(|list| list.retain(|t| t.id != id));
                phase.dispose();
            })
            .forget();
        })
        .forget();

        id
    }

    /// Ids of the currently attached toasts
    pub fn active(&self) -> Vec<u64> {
        self.toasts
            .with_untracked(|list| list.iter().map(|t| t.id).collect())
    }

    /// Phase of an attached toast
    pub fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.toasts.with_untracked(|list| {
            list.iter()
                .find(|t| t.id == id)
                .map(|t| t.phase.get_untracked())
        })
    }

    /// Snapshot of an attached toast
    pub fn item(&self, id: u64) -> Option<ToastItem> {
        self.toasts
            .with_untracked(|list| list.iter().find(|t| t.id == id).cloned())
    }
}

/// Renders every attached toast
#[component]
pub fn ToastHost(toasts: RwSignal<Vec<ToastItem>>) -> impl IntoView {
    view! {
        <For
            each=move || toasts.get()
            key=|toast| toast.id
            children=move |toast: ToastItem| {
                let ToastItem { id, message, severity, phase } = toast;
                view! {
                    <div
                        class=move || toast_class(severity, phase.get())
                        style=move || toast_style(severity, phase.get())
                        data-toast-id=id.to_string()
                        role="status"
                    >
                        {message}
                    </div>
                }
            }
        />
    }
}

/// Class list for a toast; `show` drives the narrow-screen slide rule
pub fn toast_class(severity: Severity, phase: ToastPhase) -> String {
    let mut class = format!("toast toast-{}", severity.as_str());
    if phase == ToastPhase::Shown {
        class.push_str(" show");
    }
    class
}

/// Inline style for a toast
pub fn toast_style(severity: Severity, phase: ToastPhase) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 12px; \
         box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); z-index: 1000; transform: {}; \
         transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); max-width: 300px; \
         font-size: 0.9rem; line-height: 1.4;",
        severity.background(),
        phase.transform()
    )
}

//! UI Components
//!
//! Cross-page pieces: toasts, button/card effects and the injected styles.

pub mod effects;
pub mod styles;
pub mod toast;

pub use toast::{Severity, ToastHost, ToastPhase, Toaster};

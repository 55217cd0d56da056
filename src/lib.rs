//! # Emoiro
//!
//! Client-side enhancements for the Emoiro mood journal, compiled to
//! WebAssembly and loaded on every server-rendered page.
//!
//! ## Features
//!
//! - **Emotion picker**: highlighting and encouraging feedback on selection
//! - **Toasts**: transient notifications rendered with Leptos
//! - **Effects**: button ripples, card elevation, staggered and scroll reveals
//! - **Shortcuts**: Ctrl/Cmd+N, Ctrl/Cmd+H, Escape, delete confirmation
//!
//! ## Modules
//!
//! - [`app`]: page classification and dispatch
//! - [`pages`]: home, record and history initializers
//! - [`components`]: toasts, effects and injected styles
//! - [`shortcuts`]: global keyboard and delete handling

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod emotion;
pub mod error;
pub mod format;
pub mod logging;
pub mod pages;
pub mod shortcuts;

pub use app::{start, App, Page};
pub use components::{Severity, ToastPhase, Toaster};
pub use config::{TimingConfig, UiConfig};
pub use emotion::Emotion;
pub use error::{UiError, UiResult};

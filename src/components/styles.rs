//! Injected stylesheet for the ripple and toast classes.

use web_sys::Document;

use crate::error::{UiError, UiResult};

pub const STYLE_ELEMENT_ID: &str = "emoiro-styles";

pub const STYLESHEET: &str = r#"
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple-animation 0.6s linear;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .toast {
        cursor: pointer;
    }

    .toast:hover {
        transform: translateX(-5px) !important;
        box-shadow: 0 15px 35px rgba(0, 0, 0, 0.2) !important;
    }

    @media (max-width: 768px) {
        .toast {
            right: 10px;
            left: 10px;
            max-width: none;
            transform: translateY(-100px);
        }

        .toast.show {
            transform: translateY(0) !important;
        }
    }
"#;

/// Append the stylesheet to `<head>` unless it is already present
pub fn inject(document: &Document) -> UiResult<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(UiError::MissingRoot("head"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

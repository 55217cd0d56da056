//! Home Page
//!
//! Staggered entry card reveal, palette pulse and a motivational toast.

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::components::{Severity, Toaster};
use crate::config::TimingConfig;
use crate::dom;
use crate::emotion::{self, MOTIVATIONAL_MESSAGES};
use crate::error::UiResult;
use crate::pages::annotate_dates;

/// Initialize the home page
pub fn init(document: &Document, toaster: Toaster, timing: TimingConfig) -> UiResult<()> {
    let cards: Vec<HtmlElement> = dom::query_all(document, ".entry-card");
    for (index, card) in cards.into_iter().enumerate() {
        Timeout::new(stagger_delay(index, timing.stagger_ms), move || {
            let _ = dom::set_styles(&card, &[("opacity", "1"), ("transform", "translateY(0)")]);
        })
        .forget();
    }

    let palette: Vec<HtmlElement> = dom::query_all(document, ".palette-item");
    for item in &palette {
        let target = item.clone();
        let pulse_ms = timing.pulse_ms;
        dom::listen(item, "click", move |_: MouseEvent| {
            let _ = dom::set_style(&target, "animation", "pulse 0.6s ease-in-out");
            let target = target.clone();
            Timeout::new(pulse_ms, move || {
                let _ = dom::set_style(&target, "animation", "");
            })
            .forget();
        })?;
    }

    annotate_dates(document, ".entry-card time[datetime]");
    show_motivation(toaster, timing);
    Ok(())
}

/// Delay before the card at `index` is revealed
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

fn show_motivation(toaster: Toaster, timing: TimingConfig) {
    let message = emotion::pick_random(MOTIVATIONAL_MESSAGES);
    Timeout::new(timing.motivation_delay_ms, move || {
        toaster.show(message, Severity::Info, timing.motivation_duration_ms);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(1, 100), 100);
        assert_eq!(stagger_delay(6, 100), 600);
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }
}

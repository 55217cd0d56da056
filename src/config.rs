//! Configuration System
//!
//! Timing and logging settings for the page enhancements. The server may
//! override any of them by rendering a JSON block into the page:
//!
//! ```html
//! <script id="emoiro-config" type="application/json">
//!   { "log_level": "debug", "timing": { "toast_default_ms": 4000 } }
//! </script>
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use serde::Deserialize;
use web_sys::Document;

use crate::error::UiResult;

/// Element id of the optional configuration block
pub const CONFIG_ELEMENT_ID: &str = "emoiro-config";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            timing: TimingConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Animation and notification timings
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Lifetime of a ripple element
    pub ripple_ms: u32,
    /// Palette item pulse animation length
    pub pulse_ms: u32,
    /// Delay between consecutive entry card reveals on the home page
    pub stagger_ms: u32,
    /// Delay before a new toast slides in
    pub toast_settle_ms: u32,
    /// Slide-out time before a toast is detached
    pub toast_exit_ms: u32,
    /// Visible time for toasts shown without an explicit duration
    pub toast_default_ms: u32,
    /// Delay before the home page motivational message
    pub motivation_delay_ms: u32,
    /// Visible time of the motivational message
    pub motivation_duration_ms: u32,
    /// Fraction of a timeline item that must be visible to reveal it
    pub reveal_threshold: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ripple_ms: 600,
            pulse_ms: 600,
            stagger_ms: 100,
            toast_settle_ms: 100,
            toast_exit_ms: 300,
            toast_default_ms: 3000,
            motivation_delay_ms: 3000,
            motivation_duration_ms: 5000,
            reveal_threshold: 0.1,
        }
    }
}

impl UiConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> UiResult<Self> {
        let config: UiConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Load configuration from the page's config block.
    ///
    /// Absent block yields defaults. A malformed block is reported and
    /// defaults are used.
    pub fn load(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                // The subscriber is not installed yet at this point.
                web_sys::console::warn_1(
                    &format!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e).into(),
                );
                Self::default()
            }
        }
    }

    /// Replace an out-of-range reveal threshold with the default
    fn normalized(mut self) -> Self {
        let t = &mut self.timing;
        if !(0.0..=1.0).contains(&t.reveal_threshold) {
            t.reveal_threshold = TimingConfig::default().reveal_threshold;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_timings() {
        let config = UiConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.timing.ripple_ms, 600);
        assert_eq!(config.timing.toast_default_ms, 3000);
        assert_eq!(config.timing.toast_settle_ms, 100);
        assert_eq!(config.timing.motivation_delay_ms, 3000);
        assert_eq!(config.timing.motivation_duration_ms, 5000);
        assert_eq!(config.timing.reveal_threshold, 0.1);
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_json(r#"{"timing": {"toast_default_ms": 4000}}"#).unwrap();
        assert_eq!(config.timing.toast_default_ms, 4000);
        assert_eq!(config.timing.ripple_ms, 600);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(UiConfig::from_json("{ timing: }").is_err());
    }

    #[test]
    fn test_out_of_range_threshold_falls_back() {
        let config = UiConfig::from_json(r#"{"timing": {"reveal_threshold": 3.5}}"#).unwrap();
        assert_eq!(config.timing.reveal_threshold, 0.1);
    }
}

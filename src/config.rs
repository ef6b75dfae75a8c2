//! Page-level configuration.
//!
//! Defaults live in [`crate::consts`]. A page can override any field with a
//! JSON block:
//!
//! ```html
//! <script type="application/json" id="site-behavior-config">
//!   { "scroll_top_threshold_px": 500, "log_level": "debug" }
//! </script>
//! ```
//!
//! Fields missing from the block keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::BehaviorError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    pub log_level: LogLevel,

    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,

    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub nav_open_class: String,

    pub lightbox_image_selector: String,
    pub lightbox_id: String,
    pub lightbox_open_class: String,

    pub reveal_selectors: Vec<String>,
    pub reveal_pending_class: String,
    pub reveal_done_class: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    pub scroll_top_id: String,
    pub scroll_top_threshold_px: f64,
    pub scroll_top_visible_class: String,

    pub transition_delay_ms: u32,
    pub page_extension: String,
    pub loaded_class: String,
    pub transitioning_class: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            nav_toggle_id: consts::NAV_TOGGLE_ID.to_owned(),
            nav_menu_id: consts::NAV_MENU_ID.to_owned(),
            nav_open_class: consts::NAV_OPEN_CLASS.to_owned(),
            lightbox_image_selector: consts::LIGHTBOX_IMAGE_SELECTOR.to_owned(),
            lightbox_id: consts::LIGHTBOX_ID.to_owned(),
            lightbox_open_class: consts::LIGHTBOX_OPEN_CLASS.to_owned(),
            reveal_selectors: consts::REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            reveal_pending_class: consts::REVEAL_PENDING_CLASS.to_owned(),
            reveal_done_class: consts::REVEAL_DONE_CLASS.to_owned(),
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            scroll_top_id: consts::SCROLL_TOP_ID.to_owned(),
            scroll_top_threshold_px: consts::SCROLL_TOP_THRESHOLD_PX,
            scroll_top_visible_class: consts::SCROLL_TOP_VISIBLE_CLASS.to_owned(),
            transition_delay_ms: consts::TRANSITION_DELAY_MS,
            page_extension: consts::PAGE_EXTENSION.to_owned(),
            loaded_class: consts::LOADED_CLASS.to_owned(),
            transitioning_class: consts::TRANSITIONING_CLASS.to_owned(),
        }
    }
}

impl BehaviorConfig {
    /// Parse a config block, filling absent fields from defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    /// The comma-joined reveal selector list, or `None` when empty.
    pub fn reveal_selector(&self) -> Option<String> {
        let parts = self
            .reveal_selectors
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        if parts.is_empty() { None } else { Some(parts.join(", ")) }
    }

    fn normalized(mut self) -> Self {
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self.scroll_top_threshold_px = self.scroll_top_threshold_px.max(0.0);
        self
    }

    /// Read the page's config block; defaults when the page has none.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] for a malformed block.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, BehaviorError> {
        match document
            .get_element_by_id(consts::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

//! Default hooks, class names and numeric constants.
//!
//! Every value here is a default for a [`crate::config::BehaviorConfig`]
//! field; pages may override them through the config block.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "site-theme";

/// Attribute on `<html>` carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting the OS dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_OPEN_CLASS: &str = "open";

// ── Lightbox ────────────────────────────────────────────────────

/// Images that open in the lightbox when activated.
pub const LIGHTBOX_IMAGE_SELECTOR: &str = ".gallery img, img[data-lightbox]";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_OPEN_CLASS: &str = "open";

// ── Reveal ──────────────────────────────────────────────────────

/// Content-role elements that animate in on first sight.
pub const REVEAL_SELECTORS: &[&str] = &[".card", ".section-title", ".timeline-item", ".character-card", ".info-box"];
pub const REVEAL_PENDING_CLASS: &str = "reveal";
pub const REVEAL_DONE_CLASS: &str = "revealed";

/// Fraction of an element's area that must be visible to trigger.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the trigger region from the bottom of the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Scroll-to-top ───────────────────────────────────────────────

/// Visible iff the vertical scroll offset is strictly greater than this.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const SCROLL_TOP_ID: &str = "scroll-top";
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "visible";

// ── Page transitions ────────────────────────────────────────────

/// Delay between the exit animation starting and the real navigation.
pub const TRANSITION_DELAY_MS: u32 = 300;

/// Extension that marks a link as another page of this site.
pub const PAGE_EXTENSION: &str = ".html";

/// Page served for a directory path such as `/`.
pub const INDEX_PAGE: &str = "index.html";

pub const LOADED_CLASS: &str = "loaded";
pub const TRANSITIONING_CLASS: &str = "transitioning";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "site-behavior-config";

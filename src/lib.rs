//! # site-behavior
//!
//! Client-side behavior for the static fan site, compiled to WebAssembly and
//! loaded by every page.
//!
//! Each feature is split into a browser-free core (plain state machine,
//! tested natively) and a binding that owns its DOM elements and listeners.
//! Bindings exist only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference: storage, OS signal, toggle |
//! | [`nav`] | Mobile navigation disclosure |
//! | [`lightbox`] | Shared full-screen image overlay |
//! | [`reveal`] | One-shot scroll-triggered reveal animations |
//! | [`scroll_top`] | Floating scroll-to-top control |
//! | [`transition`] | Delayed same-site navigation for exit animations |
//! | [`anchor`] | Smooth scrolling for fragment links |
//! | [`controller`] | Installs and owns every feature |
//! | [`config`] | Page-overridable hooks and constants |
//! | [`consts`] | Default values |
//! | [`error`] | Installation errors |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod scroll_top;
pub mod theme;
pub mod transition;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point: install every feature on the current page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    use crate::config::{BehaviorConfig, LogLevel};
    use crate::controller::PageController;

    console_error_panic_hook::set_once();

    let (window, document) = match dom::window().and_then(|w| dom::document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(e) => {
            let _ = console_log::init_with_level(log::Level::Warn);
            log::error!("site-behavior: {e}");
            return;
        }
    };

    let config = BehaviorConfig::from_document(&document);
    let level = config.as_ref().map_or(LogLevel::default(), |c| c.log_level);
    let _ = console_log::init_with_level(level.into());
    let config = config.unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        BehaviorConfig::default()
    });

    let controller = PageController::install(&window, &document, &config);
    log::info!("site-behavior: {}", controller.report().summary());

    // Listeners stay registered while the controller lives; the page owns it
    // until unload.
    std::mem::forget(controller);
}

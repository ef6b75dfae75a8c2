//! Smooth scrolling for same-document fragment links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click alone (`#` placeholder or not a fragment link).
    Ignore,
    /// Scroll to the element with this id, if it exists.
    ScrollTo(String),
}

/// Decide what a click on a link with `href` should do.
///
/// `%XX` escapes in the fragment are decoded; malformed escapes and
/// fragments that do not decode to UTF-8 are kept verbatim.
#[must_use]
pub fn anchor_target(href: &str) -> AnchorAction {
    let Some(fragment) = href.trim().strip_prefix('#') else {
        return AnchorAction::Ignore;
    };
    let id = percent_decode_str(fragment)
        .decode_utf8()
        .map_or_else(|_| fragment.to_owned(), Cow::into_owned);
    if id.is_empty() { AnchorAction::Ignore } else { AnchorAction::ScrollTo(id) }
}

#[cfg(feature = "hydrate")]
pub use binding::AnchorBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use wasm_bindgen::JsValue;
    use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

    use super::{AnchorAction, anchor_target};
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    /// Owns one click listener per fragment link.
    pub struct AnchorBinding {
        _listeners: Vec<Listener>,
    }

    impl AnchorBinding {
        /// Wire every `a[href^="#"]`, or `Ok(None)` if there are none.
        ///
        /// # Errors
        ///
        /// Returns an error if a listener cannot be registered.
        pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, BehaviorError> {
            let links = dom::query_all(document, "a[href^=\"#\"]")?;
            if links.is_empty() {
                return Ok(None);
            }

            let mut listeners = Vec::with_capacity(links.len());
            for link in links {
                let (window, document, link_el) = (window.clone(), document.clone(), link.clone());
                listeners.push(Listener::new(&link, "click", move |event| {
                    let href = link_el.get_attribute("href").unwrap_or_default();
                    let AnchorAction::ScrollTo(id) = anchor_target(&href) else {
                        return;
                    };
                    let Some(target) = document.get_element_by_id(&id) else {
                        return;
                    };
                    event.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                    if let Ok(history) = window.history() {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                    }
                })?);
            }
            log::debug!("anchor: {} fragment link(s)", listeners.len());

            Ok(Some(Self { _listeners: listeners }))
        }
    }
}

//! Scroll-triggered reveal animations.
//!
//! Matching elements start tagged as pending and are watched by one
//! `IntersectionObserver` (10% visibility, trigger region pulled up from
//! the viewport bottom). The first intersection reveals an element for the
//! rest of the page view and stops watching it; later scrolling never
//! hides or replays it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First intersection: mark revealed and stop observing.
    Revealed,
    Ignored,
}

/// One-shot revealed flags for the registered elements.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements, indexed `0..count`, none revealed.
    #[must_use]
    pub fn with_len(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Record an intersection change for element `index`.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> RevealOutcome {
        match self.revealed.get_mut(index) {
            Some(flag) if intersecting && !*flag => {
                *flag = true;
                RevealOutcome::Revealed
            }
            _ => RevealOutcome::Ignored,
        }
    }
}

/// Index attribute stamped on each watched element.
#[cfg(feature = "hydrate")]
const INDEX_ATTRIBUTE: &str = "data-reveal-index";

#[cfg(feature = "hydrate")]
pub use binding::RevealBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{INDEX_ATTRIBUTE, RevealOutcome, RevealTracker};
    use crate::config::BehaviorConfig;
    use crate::dom;
    use crate::error::BehaviorError;

    type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    /// Owns the intersection observer and its callback.
    pub struct RevealBinding {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl Drop for RevealBinding {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    impl RevealBinding {
        /// Tag and observe every reveal target, or `Ok(None)` if none match.
        ///
        /// Without `IntersectionObserver` support nothing is hidden.
        ///
        /// # Errors
        ///
        /// Returns an error for an invalid selector list.
        pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>, BehaviorError> {
            let Some(selector) = config.reveal_selector() else {
                return Ok(None);
            };
            let elements = dom::query_all(document, &selector)?;
            if elements.is_empty() {
                log::debug!("reveal: no targets; observer not created");
                return Ok(None);
            }

            let tracker = Rc::new(RefCell::new(RevealTracker::with_len(elements.len())));
            let done_class = config.reveal_done_class.clone();
            let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = index_of(&target) else {
                        continue;
                    };
                    if tracker.borrow_mut().observe(index, entry.is_intersecting()) == RevealOutcome::Revealed {
                        dom::set_class(&target, &done_class, true);
                        observer.unobserve(&target);
                    }
                }
                if tracker.borrow().pending() == 0 {
                    observer.disconnect();
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
            options.set_root_margin(&config.reveal_root_margin);
            let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(_) => {
                    log::debug!("reveal: IntersectionObserver unavailable; content shown as-is");
                    return Ok(None);
                }
            };

            for (index, element) in elements.iter().enumerate() {
                let _ = element.set_attribute(INDEX_ATTRIBUTE, &index.to_string());
                dom::set_class(element, &config.reveal_pending_class, true);
                observer.observe(element);
            }
            log::debug!("reveal: watching {} element(s)", elements.len());

            Ok(Some(Self { observer, _callback: callback }))
        }
    }

    fn index_of(target: &Element) -> Option<usize> {
        target.get_attribute(INDEX_ATTRIBUTE)?.parse().ok()
    }
}

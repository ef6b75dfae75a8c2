//! Floating scroll-to-top control.
//!
//! Visibility is a pure function of the vertical scroll offset: shown iff
//! the offset is strictly above the threshold.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

/// Offset the control scrolls the page back to.
pub const TOP_OFFSET: f64 = 0.0;

/// A scroll the page should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub smooth: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollTop {
    threshold: f64,
    visible: bool,
}

impl ScrollTop {
    /// Start hidden, then call [`Self::on_scroll`] with the current offset.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn visible_at(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Recompute visibility; `Some(visible)` only when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let visible = self.visible_at(offset);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    /// The control was activated.
    #[must_use]
    pub fn activate(&self) -> ScrollRequest {
        ScrollRequest { top: TOP_OFFSET, smooth: true }
    }
}

#[cfg(feature = "hydrate")]
pub use binding::ScrollTopBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, HtmlButtonElement, ScrollBehavior, ScrollToOptions, Window};

    use super::ScrollTop;
    use crate::config::BehaviorConfig;
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    /// Owns the injected control and its listeners.
    pub struct ScrollTopBinding {
        _listeners: Vec<Listener>,
    }

    impl ScrollTopBinding {
        /// Inject the control and track scrolling.
        ///
        /// # Errors
        ///
        /// Returns an error if the control cannot be created or a listener
        /// cannot be registered.
        pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> Result<Option<Self>, BehaviorError> {
            let Some(body) = document.body() else {
                log::debug!("scroll-top: no <body>; disabled");
                return Ok(None);
            };

            let button: HtmlButtonElement = dom::create(document, "button")?;
            button.set_type("button");
            button.set_id(&config.scroll_top_id);
            button.set_class_name("scroll-top");
            let _ = button.set_attribute("aria-label", "Scroll to top");
            button.set_text_content(Some("\u{2191}"));
            body.append_child(&button).map_err(BehaviorError::dom("appendChild"))?;

            let visible_class = config.scroll_top_visible_class.clone();
            let state = Rc::new(RefCell::new(ScrollTop::new(config.scroll_top_threshold_px)));
            let sync = {
                let (window, button, state) = (window.clone(), button.clone(), Rc::clone(&state));
                move || {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    if let Some(visible) = state.borrow_mut().on_scroll(offset) {
                        dom::set_class(&button, &visible_class, visible);
                        let _ = button.set_attribute("aria-hidden", if visible { "false" } else { "true" });
                    }
                }
            };
            let _ = button.set_attribute("aria-hidden", "true");
            sync();

            let mut listeners = vec![Listener::passive(window, "scroll", move |_| sync())?];
            let target = window.clone();
            listeners.push(Listener::new(&button, "click", move |_| {
                let request = state.borrow().activate();
                let options = ScrollToOptions::new();
                options.set_top(request.top);
                options.set_behavior(if request.smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                target.scroll_to_with_scroll_to_options(&options);
            })?);

            Ok(Some(Self { _listeners: listeners }))
        }
    }
}

//! Full-screen image overlay.
//!
//! One overlay per page, built at install and reused for every image.
//! Opening while already open swaps the displayed image in place. Closing
//! by the close button, a backdrop click or Escape all land in the same
//! closed state and release the scroll lock.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        src: String,
        caption: String,
    },
}

/// What to do with page scrolling after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollLock {
    /// Suppress page scrolling and focus the close control.
    Engage,
    /// Already locked; leave scrolling and focus alone.
    Keep,
    /// Restore page scrolling.
    Release,
}

/// Rendering instructions after a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxView {
    pub open: bool,
    pub src: String,
    pub caption: String,
    pub scroll: ScrollLock,
}

impl LightboxView {
    /// Hide the caption slot when there is nothing to show.
    #[must_use]
    pub fn caption_hidden(&self) -> bool {
        self.caption.trim().is_empty()
    }
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Show `src` with `caption`, replacing any image already shown.
    pub fn open(&mut self, src: &str, caption: &str) -> LightboxView {
        let scroll = if self.is_open() { ScrollLock::Keep } else { ScrollLock::Engage };
        *self = Self::Open { src: src.to_owned(), caption: caption.trim().to_owned() };
        LightboxView { open: true, src: src.to_owned(), caption: caption.trim().to_owned(), scroll }
    }

    /// Close from any trigger. `None` if already closed.
    pub fn close(&mut self) -> Option<LightboxView> {
        if !self.is_open() {
            return None;
        }
        *self = Self::Closed;
        Some(LightboxView { open: false, src: String::new(), caption: String::new(), scroll: ScrollLock::Release })
    }

    /// Click inside the overlay; only the backdrop itself closes.
    pub fn overlay_click(&mut self, on_backdrop: bool) -> Option<LightboxView> {
        if on_backdrop { self.close() } else { None }
    }

    /// Key pressed anywhere on the page.
    pub fn key(&mut self, key: &str) -> Option<LightboxView> {
        if key == "Escape" { self.close() } else { None }
    }
}

/// Keys that open a focused designated image.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(feature = "hydrate")]
pub use binding::LightboxBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, KeyboardEvent};

    use super::{Lightbox, LightboxView, ScrollLock, is_activation_key};
    use crate::config::BehaviorConfig;
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    struct Overlay {
        container: HtmlElement,
        close: HtmlButtonElement,
        image: HtmlImageElement,
        caption: HtmlElement,
        body: Option<HtmlElement>,
        open_class: String,
        saved_overflow: RefCell<Option<String>>,
    }

    impl Overlay {
        fn build(document: &Document, config: &BehaviorConfig) -> Result<Self, BehaviorError> {
            let container: HtmlElement = dom::create(document, "div")?;
            container.set_id(&config.lightbox_id);
            container.set_class_name("lightbox");
            let _ = container.set_attribute("role", "dialog");
            let _ = container.set_attribute("aria-modal", "true");
            let _ = container.set_attribute("aria-label", "Image viewer");
            let _ = container.set_attribute("aria-hidden", "true");

            let close: HtmlButtonElement = dom::create(document, "button")?;
            close.set_type("button");
            close.set_class_name("lightbox-close");
            let _ = close.set_attribute("aria-label", "Close image viewer");
            close.set_text_content(Some("\u{00D7}"));

            let image: HtmlImageElement = dom::create(document, "img")?;
            image.set_class_name("lightbox-image");

            let caption: HtmlElement = dom::create(document, "p")?;
            caption.set_class_name("lightbox-caption");

            container.append_child(&close).map_err(BehaviorError::dom("appendChild"))?;
            container.append_child(&image).map_err(BehaviorError::dom("appendChild"))?;
            container.append_child(&caption).map_err(BehaviorError::dom("appendChild"))?;
            let body = document.body();
            if let Some(body) = &body {
                body.append_child(&container).map_err(BehaviorError::dom("appendChild"))?;
            }

            Ok(Self {
                container,
                close,
                image,
                caption,
                body,
                open_class: config.lightbox_open_class.clone(),
                saved_overflow: RefCell::new(None),
            })
        }

        fn render(&self, view: &LightboxView) {
            if view.open {
                self.image.set_src(&view.src);
                self.image.set_alt(&view.caption);
                self.caption.set_text_content(Some(&view.caption));
                self.caption.set_hidden(view.caption_hidden());
            }
            dom::set_class(&self.container, &self.open_class, view.open);
            let _ = self
                .container
                .set_attribute("aria-hidden", if view.open { "false" } else { "true" });

            match view.scroll {
                ScrollLock::Engage => {
                    if let Some(body) = &self.body {
                        let style = body.style();
                        let previous = style.get_property_value("overflow").unwrap_or_default();
                        *self.saved_overflow.borrow_mut() = Some(previous);
                        let _ = style.set_property("overflow", "hidden");
                    }
                    let _ = self.close.focus();
                }
                ScrollLock::Keep => {}
                ScrollLock::Release => {
                    if let Some(body) = &self.body {
                        let previous = self.saved_overflow.borrow_mut().take().unwrap_or_default();
                        let style = body.style();
                        if previous.is_empty() {
                            let _ = style.remove_property("overflow");
                        } else {
                            let _ = style.set_property("overflow", &previous);
                        }
                    }
                }
            }
        }
    }

    /// Owns the overlay subtree and every lightbox listener.
    pub struct LightboxBinding {
        _listeners: Vec<Listener>,
    }

    impl LightboxBinding {
        /// Build the overlay and wire every designated image.
        ///
        /// The overlay is built even when the page has no images.
        ///
        /// # Errors
        ///
        /// Returns an error if the overlay cannot be built or a listener
        /// cannot be registered.
        pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Self, BehaviorError> {
            let overlay = Rc::new(Overlay::build(document, config)?);
            let state = Rc::new(RefCell::new(Lightbox::new()));
            let images = dom::query_all(document, &config.lightbox_image_selector)?;
            log::debug!("lightbox: {} image(s)", images.len());

            let mut listeners = Vec::new();
            for image in images {
                let _ = image.set_attribute("tabindex", "0");
                let _ = image.set_attribute("role", "button");

                let (o, st, img) = (Rc::clone(&overlay), Rc::clone(&state), image.clone());
                listeners.push(Listener::new(&image, "click", move |_| open_from(&img, &o, &st))?);

                let (o, st, img) = (Rc::clone(&overlay), Rc::clone(&state), image.clone());
                listeners.push(Listener::new(&image, "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                        return;
                    };
                    if is_activation_key(&key) {
                        event.prevent_default();
                        open_from(&img, &o, &st);
                    }
                })?);
            }

            {
                let (overlay, state) = (Rc::clone(&overlay), Rc::clone(&state));
                let close = overlay.close.clone();
                listeners.push(Listener::new(&close, "click", move |_| {
                    if let Some(view) = state.borrow_mut().close() {
                        overlay.render(&view);
                    }
                })?);
            }
            {
                let (overlay, state) = (Rc::clone(&overlay), Rc::clone(&state));
                let container = overlay.container.clone();
                listeners.push(Listener::new(&container, "click", move |event| {
                    let on_backdrop = event.target() == event.current_target();
                    if let Some(view) = state.borrow_mut().overlay_click(on_backdrop) {
                        overlay.render(&view);
                    }
                })?);
            }
            listeners.push(Listener::new(document, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                    return;
                };
                if let Some(view) = state.borrow_mut().key(&key) {
                    overlay.render(&view);
                }
            })?);

            Ok(Self { _listeners: listeners })
        }
    }

    fn open_from(image: &Element, overlay: &Overlay, state: &RefCell<Lightbox>) {
        let src = image
            .dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::current_src)
            .filter(|s| !s.is_empty())
            .or_else(|| image.get_attribute("src"))
            .unwrap_or_default();
        if src.is_empty() {
            return;
        }
        let caption = image.get_attribute("alt").unwrap_or_default();
        let view = state.borrow_mut().open(&src, &caption);
        overlay.render(&view);
    }
}

//! Browser helpers shared by the feature bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bindings own their listeners through [`Listener`]; dropping a binding
//! unregisters everything it installed. The page controller keeps every
//! binding alive until unload.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::BehaviorError;

/// An event listener registered for as long as this value is owned.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Dom`] if the browser rejects the listener.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, false, handler)
    }

    /// Register a listener that promises never to call `preventDefault`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Dom`] if the browser rejects the listener.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, true, handler)
    }

    fn register<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(BehaviorError::dom("addEventListener"))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// The global window.
///
/// # Errors
///
/// Returns [`BehaviorError::NoWindow`] outside a browser context.
pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`BehaviorError::NoDocument`] if the window has none.
pub fn document(window: &Window) -> Result<Document, BehaviorError> {
    window.document().ok_or(BehaviorError::NoDocument)
}

/// Look up an element by id as an `HtmlElement`.
pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`BehaviorError::Dom`] for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = document
        .query_selector_all(selector)
        .map_err(BehaviorError::dom("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Create an element and cast it to `T`.
///
/// # Errors
///
/// Returns [`BehaviorError::Dom`] if creation fails or the tag does not
/// produce a `T`.
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, BehaviorError> {
    document
        .create_element(tag)
        .map_err(BehaviorError::dom("createElement"))?
        .dyn_into::<T>()
        .map_err(|_| BehaviorError::Dom { op: "createElement", message: format!("<{tag}> has unexpected type") })
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// The element an event was dispatched to, if it is an element.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

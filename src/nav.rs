//! Mobile navigation disclosure.
//!
//! Two states, initially closed. The trigger toggles; a pointer press
//! outside both trigger and menu, Escape, or following a link inside the
//! menu closes it. Escape also hands focus back to the trigger so keyboard
//! users never sit inside a hidden menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Rendering instructions after a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
    /// Move keyboard focus to the trigger.
    pub focus_trigger: bool,
}

impl NavView {
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger activated.
    pub fn toggle(&mut self) -> NavView {
        self.open = !self.open;
        NavView { open: self.open, focus_trigger: false }
    }

    /// Pointer pressed somewhere on the page.
    ///
    /// `inside` is true when the press landed in the trigger or the menu.
    pub fn pointer_down(&mut self, inside: bool) -> Option<NavView> {
        if inside { None } else { self.close(false) }
    }

    /// Key pressed anywhere on the page.
    pub fn key(&mut self, key: &str) -> Option<NavView> {
        if key == "Escape" { self.close(true) } else { None }
    }

    /// A link inside the menu was followed.
    pub fn link_followed(&mut self) -> Option<NavView> {
        self.close(false)
    }

    fn close(&mut self, focus_trigger: bool) -> Option<NavView> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(NavView { open: false, focus_trigger })
    }
}

#[cfg(feature = "hydrate")]
pub use binding::NavBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, KeyboardEvent, Node};

    use super::{NavMenu, NavView};
    use crate::config::BehaviorConfig;
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    struct Parts {
        trigger: HtmlElement,
        menu: HtmlElement,
        open_class: String,
    }

    impl Parts {
        fn render(&self, view: NavView) {
            dom::set_class(&self.trigger, &self.open_class, view.open);
            dom::set_class(&self.menu, &self.open_class, view.open);
            let _ = self.trigger.set_attribute("aria-expanded", view.aria_expanded());
            if view.focus_trigger {
                let _ = self.trigger.focus();
            }
        }

        fn contains(&self, node: Option<&Node>) -> bool {
            self.trigger.contains(node) || self.menu.contains(node)
        }
    }

    /// Owns the navigation trigger, menu and their listeners.
    pub struct NavBinding {
        _listeners: Vec<Listener>,
    }

    impl NavBinding {
        /// Wire the trigger and menu, or `Ok(None)` if either is absent.
        ///
        /// # Errors
        ///
        /// Returns an error if a listener cannot be registered.
        pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>, BehaviorError> {
            let (Some(trigger), Some(menu)) = (
                dom::html_by_id(document, &config.nav_toggle_id),
                dom::html_by_id(document, &config.nav_menu_id),
            ) else {
                log::debug!("nav: trigger or menu missing; disabled");
                return Ok(None);
            };

            let parts = Rc::new(Parts { trigger, menu, open_class: config.nav_open_class.clone() });
            let state = Rc::new(RefCell::new(NavMenu::new()));
            parts.render(NavView { open: false, focus_trigger: false });

            let mut listeners = Vec::new();
            {
                let trigger = parts.trigger.clone();
                let parts = Rc::clone(&parts);
                let state = Rc::clone(&state);
                listeners.push(Listener::new(&trigger, "click", move |_| {
                    let view = state.borrow_mut().toggle();
                    parts.render(view);
                })?);
            }
            {
                let parts = Rc::clone(&parts);
                let state = Rc::clone(&state);
                listeners.push(Listener::new(document, "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = parts.contains(target.as_ref());
                    if let Some(view) = state.borrow_mut().pointer_down(inside) {
                        parts.render(view);
                    }
                })?);
            }
            {
                let parts = Rc::clone(&parts);
                let state = Rc::clone(&state);
                listeners.push(Listener::new(document, "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                        return;
                    };
                    if let Some(view) = state.borrow_mut().key(&key) {
                        parts.render(view);
                    }
                })?);
            }
            {
                let menu = parts.menu.clone();
                listeners.push(Listener::new(&menu, "click", move |event| {
                    let on_link = dom::target_element(&event)
                        .and_then(|el| el.closest("a[href]").ok().flatten())
                        .is_some();
                    if !on_link {
                        return;
                    }
                    if let Some(view) = state.borrow_mut().link_followed() {
                        parts.render(view);
                    }
                })?);
            }

            Ok(Some(Self { _listeners: listeners }))
        }
    }
}

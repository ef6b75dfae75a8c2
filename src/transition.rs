//! Simulated page transitions.
//!
//! On load the document is marked loaded. Activating a link to another page
//! of this site marks it transitioning and navigates after a fixed delay so
//! the exit animation can play. Links to the current page, external links
//! and modified clicks keep their default behavior.
//!
//! Links are resolved against the current page URL. A target is a page of
//! this site when it shares the current origin and its path ends in the page
//! extension; it is the current page when the paths match, a directory
//! standing for its index page.
//!
//! Once a navigation is pending, further same-site activations are
//! suppressed.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use url::Url;

use crate::consts::INDEX_PAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Another page of this site.
    OtherPage,
    /// The page currently shown.
    SamePage,
    /// Anything else: other origins, fragments, non-page resources.
    External,
}

/// Path of `url`, with the index page for a directory.
#[must_use]
pub fn page_path(url: &Url) -> String {
    let path = url.path();
    if path.ends_with('/') { format!("{path}{INDEX_PAGE}") } else { path.to_owned() }
}

/// Resolve `href` against the page at `current`.
///
/// Fragment-only and empty hrefs never leave the page and resolve to `None`.
#[must_use]
pub fn resolve_link(href: &str, current: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    current.join(href).ok()
}

/// Classify `href` relative to the page at `current`.
#[must_use]
pub fn classify_link(href: &str, current: &Url, extension: &str) -> LinkKind {
    resolve_link(href, current).map_or(LinkKind::External, |target| classify_target(&target, current, extension))
}

fn classify_target(target: &Url, current: &Url, extension: &str) -> LinkKind {
    if !same_site(target, current) {
        return LinkKind::External;
    }
    if !target.path().to_ascii_lowercase().ends_with(&extension.to_ascii_lowercase()) {
        return LinkKind::External;
    }
    if page_path(target) == page_path(current) {
        LinkKind::SamePage
    } else {
        LinkKind::OtherPage
    }
}

// `file:` origins are opaque and never compare equal, so a site opened from
// disk is matched on scheme alone.
fn same_site(target: &Url, current: &Url) -> bool {
    if current.scheme() == "file" {
        return target.scheme() == "file";
    }
    target.origin() == current.origin()
}

/// How a click was made.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Click {
    /// Non-primary mouse button.
    pub auxiliary: bool,
    /// Ctrl, Meta, Shift or Alt held.
    pub modified: bool,
    /// The link opens in another browsing context (`target="_blank"` etc).
    pub new_context: bool,
    /// Another handler already cancelled the default action.
    pub default_prevented: bool,
}

impl Click {
    /// A click the browser would turn into an in-tab navigation.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        !(self.auxiliary || self.modified || self.new_context || self.default_prevented)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intercept {
    /// Leave the click alone.
    PassThrough,
    /// Cancel the click; a transition is already underway.
    Suppress,
    /// Cancel the click, mark transitioning, navigate after `delay_ms`.
    Navigate { href: String, delay_ms: u32 },
}

#[derive(Clone, Debug)]
pub struct PageTransition {
    delay_ms: u32,
    extension: String,
    pending: Option<String>,
}

impl PageTransition {
    #[must_use]
    pub fn new(delay_ms: u32, extension: &str) -> Self {
        Self { delay_ms, extension: extension.to_owned(), pending: None }
    }

    /// Target of the navigation in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Whether `href` is worth a click listener at all.
    #[must_use]
    pub fn is_site_page(&self, href: &str, current: &Url) -> bool {
        classify_link(href, current, &self.extension) != LinkKind::External
    }

    /// Decide what an activation of a link to `href` should do.
    ///
    /// The navigation target is the absolute URL `href` resolves to.
    pub fn activate(&mut self, href: &str, current: &Url, click: Click) -> Intercept {
        if !click.is_plain() {
            return Intercept::PassThrough;
        }
        let Some(target) = resolve_link(href, current) else {
            return Intercept::PassThrough;
        };
        let kind = classify_target(&target, current, &self.extension);
        if kind == LinkKind::External {
            return Intercept::PassThrough;
        }
        if self.pending.is_some() {
            return Intercept::Suppress;
        }
        match kind {
            LinkKind::OtherPage => {
                let href = String::from(target);
                self.pending = Some(href.clone());
                Intercept::Navigate { href, delay_ms: self.delay_ms }
            }
            LinkKind::SamePage | LinkKind::External => Intercept::PassThrough,
        }
    }

    /// The page came back from the back/forward cache.
    ///
    /// Returns true if a pending transition was abandoned.
    pub fn restored(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(feature = "hydrate")]
pub use binding::TransitionBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use url::Url;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, MouseEvent, PageTransitionEvent, Window};

    use super::{Click, Intercept, PageTransition};
    use crate::config::BehaviorConfig;
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    /// Owns the link listeners and the pending navigation timer.
    pub struct TransitionBinding {
        _listeners: Vec<Listener>,
        _timer: Rc<RefCell<Option<Timeout>>>,
    }

    struct Shared {
        window: Window,
        marker: Element,
        transitioning_class: String,
        state: RefCell<PageTransition>,
        timer: Rc<RefCell<Option<Timeout>>>,
    }

    impl TransitionBinding {
        /// Mark the document loaded and intercept same-site page links.
        ///
        /// # Errors
        ///
        /// Returns an error if a listener cannot be registered.
        pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> Result<Self, BehaviorError> {
            let marker: Element = match document.body() {
                Some(body) => body.into(),
                None => document.document_element().ok_or(BehaviorError::NoDocument)?,
            };
            dom::set_class(&marker, &config.loaded_class, true);

            let timer = Rc::new(RefCell::new(None));
            let shared = Rc::new(Shared {
                window: window.clone(),
                marker,
                transitioning_class: config.transitioning_class.clone(),
                state: RefCell::new(PageTransition::new(config.transition_delay_ms, &config.page_extension)),
                timer: Rc::clone(&timer),
            });

            let current = current_url(window);
            if current.is_none() {
                log::warn!("transition: page URL unreadable; links left alone");
            }
            let mut listeners = Vec::new();
            for link in dom::query_all(document, "a[href]")? {
                let Some(href) = link.get_attribute("href") else {
                    continue;
                };
                if !current.as_ref().is_some_and(|c| shared.state.borrow().is_site_page(&href, c)) {
                    continue;
                }
                let (shared, link_el) = (Rc::clone(&shared), link.clone());
                listeners.push(Listener::new(&link, "click", move |event| {
                    on_click(&shared, &link_el, &event);
                })?);
            }
            log::debug!("transition: intercepting {} link(s)", listeners.len());

            listeners.push(Listener::new(window, "pageshow", move |event| {
                let persisted = event
                    .dyn_ref::<PageTransitionEvent>()
                    .is_some_and(PageTransitionEvent::persisted);
                if persisted && shared.state.borrow_mut().restored() {
                    shared.timer.borrow_mut().take();
                    dom::set_class(&shared.marker, &shared.transitioning_class, false);
                }
            })?);

            Ok(Self { _listeners: listeners, _timer: timer })
        }
    }

    fn current_url(window: &Window) -> Option<Url> {
        Url::parse(&window.location().href().ok()?).ok()
    }

    fn click_of(link: &Element, event: &Event) -> Click {
        let target = link.get_attribute("target").unwrap_or_default();
        let mouse = event.dyn_ref::<MouseEvent>();
        Click {
            auxiliary: mouse.is_some_and(|m| m.button() != 0),
            modified: mouse.is_some_and(|m| m.ctrl_key() || m.meta_key() || m.shift_key() || m.alt_key()),
            new_context: !(target.is_empty() || target.eq_ignore_ascii_case("_self")),
            default_prevented: event.default_prevented(),
        }
    }

    fn on_click(shared: &Rc<Shared>, link: &Element, event: &Event) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let click = click_of(link, event);
        let Some(current) = current_url(&shared.window) else {
            return;
        };
        let decision = shared.state.borrow_mut().activate(&href, &current, click);
        match decision {
            Intercept::PassThrough => {}
            Intercept::Suppress => event.prevent_default(),
            Intercept::Navigate { href, delay_ms } => {
                event.prevent_default();
                dom::set_class(&shared.marker, &shared.transitioning_class, true);
                let location = shared.window.location();
                let timeout = Timeout::new(delay_ms, move || {
                    if let Err(e) = location.set_href(&href) {
                        log::warn!("transition: navigation to {href} failed: {e:?}");
                    }
                });
                *shared.timer.borrow_mut() = Some(timeout);
            }
        }
    }
}

//! Theme preference manager.
//!
//! The effective theme is the stored explicit preference if one exists,
//! otherwise the OS `prefers-color-scheme` signal. It is applied as a
//! `data-theme` attribute on `<html>` and mirrored on the toggle control.
//!
//! TRADE-OFFS
//! ==========
//! Only user toggles persist. Applying the OS fallback at startup or on a
//! live OS change never writes storage, so "no preference" survives page
//! loads and the site keeps tracking the OS until the user picks a side.
//! Storage is best-effort: a failed write still counts as an explicit
//! choice for the current page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// A supported color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme implied by the OS dark-mode signal.
    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Persistence for the explicit theme preference.
///
/// Implementations swallow their own failures; an unreadable store reads
/// as "no preference".
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// What the page should show for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    /// `aria-pressed` on the toggle: true while dark.
    pub pressed: bool,
    /// Icon for the theme the toggle would switch to.
    pub icon: &'static str,
    /// Accessible label naming the toggle's action.
    pub label: &'static str,
}

impl ThemeView {
    #[must_use]
    pub fn of(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self { theme, pressed: true, icon: "\u{2600}", label: "Switch to light mode" },
            Theme::Light => Self { theme, pressed: false, icon: "\u{263E}", label: "Switch to dark mode" },
        }
    }

    #[must_use]
    pub fn aria_pressed(&self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

/// Tracks the effective theme and whether it was chosen explicitly.
pub struct ThemeManager<S> {
    store: S,
    current: Theme,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Compute the effective theme from `store` and the OS signal.
    pub fn resolve(store: S, os_prefers_dark: bool) -> Self {
        let stored = store.load();
        Self {
            current: stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark)),
            explicit: stored.is_some(),
            store,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    #[must_use]
    pub fn view(&self) -> ThemeView {
        ThemeView::of(self.current)
    }

    /// Apply `theme` as the user's explicit choice and persist it.
    pub fn apply(&mut self, theme: Theme) -> ThemeView {
        self.current = theme;
        self.explicit = true;
        self.store.save(theme);
        self.view()
    }

    /// Switch to the inverse of the displayed theme.
    ///
    /// `displayed` is what the document currently shows; `None` falls back
    /// to the tracked theme.
    pub fn toggle(&mut self, displayed: Option<Theme>) -> ThemeView {
        let from = displayed.unwrap_or(self.current);
        self.apply(from.inverse())
    }

    /// Follow a live OS preference change while no explicit choice exists.
    ///
    /// Returns `None` when an explicit preference already pins the theme. A
    /// preference stored elsewhere since startup pins it from now on, and
    /// its view is returned so the page shows it.
    pub fn os_changed(&mut self, prefers_dark: bool) -> Option<ThemeView> {
        if self.explicit {
            return None;
        }
        if let Some(stored) = self.store.load() {
            // Another tab stored a choice since startup.
            self.explicit = true;
            self.current = stored;
            return Some(self.view());
        }
        self.current = Theme::from_os(prefers_dark);
        Some(self.view())
    }
}

#[cfg(feature = "hydrate")]
pub use binding::{LocalStore, ThemeBinding};

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, MediaQueryListEvent, Storage, Window};

    use super::{PreferenceStore, Theme, ThemeManager, ThemeView};
    use crate::config::BehaviorConfig;
    use crate::consts::DARK_SCHEME_QUERY;
    use crate::dom::{self, Listener};
    use crate::error::BehaviorError;

    /// `localStorage`-backed preference store.
    pub struct LocalStore {
        storage: Option<Storage>,
        key: String,
    }

    impl LocalStore {
        pub fn new(window: &Window, key: &str) -> Self {
            Self { storage: window.local_storage().ok().flatten(), key: key.to_owned() }
        }
    }

    impl PreferenceStore for LocalStore {
        fn load(&self) -> Option<Theme> {
            let raw = self.storage.as_ref()?.get_item(&self.key).ok().flatten()?;
            raw.parse().ok()
        }

        fn save(&self, theme: Theme) {
            let Some(storage) = &self.storage else {
                log::debug!("theme: storage unavailable, preference kept for this page only");
                return;
            };
            if storage.set_item(&self.key, theme.as_str()).is_err() {
                log::debug!("theme: storage write rejected");
            }
        }
    }

    /// Owns the theme toggle and OS-preference listeners.
    pub struct ThemeBinding {
        _listeners: Vec<Listener>,
    }

    struct Surface {
        root: Element,
        toggle: Option<HtmlElement>,
        attribute: String,
    }

    impl Surface {
        fn displayed(&self) -> Option<Theme> {
            self.root.get_attribute(&self.attribute)?.parse().ok()
        }

        fn render(&self, view: &ThemeView) {
            let _ = self.root.set_attribute(&self.attribute, view.theme.as_str());
            if let Some(toggle) = &self.toggle {
                let _ = toggle.set_attribute("aria-pressed", view.aria_pressed());
                let _ = toggle.set_attribute("aria-label", view.label);
                toggle.set_title(view.label);
                toggle.set_text_content(Some(view.icon));
            }
        }
    }

    impl ThemeBinding {
        /// Apply the effective theme and wire the toggle and OS listeners.
        ///
        /// Pages without a toggle still get the root attribute.
        ///
        /// # Errors
        ///
        /// Returns an error if the document has no root element or a
        /// listener cannot be registered.
        pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> Result<Self, BehaviorError> {
            let root = document.document_element().ok_or(BehaviorError::NoDocument)?;
            let surface = Rc::new(Surface {
                root,
                toggle: dom::html_by_id(document, &config.theme_toggle_id),
                attribute: config.theme_attribute.clone(),
            });

            let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
            let os_dark = query.as_ref().map_or(false, web_sys::MediaQueryList::matches);
            let manager = ThemeManager::resolve(LocalStore::new(window, &config.theme_storage_key), os_dark);
            surface.render(&manager.view());
            log::debug!(
                "theme: applied {} ({})",
                manager.current(),
                if manager.has_explicit_preference() { "stored" } else { "os" }
            );
            let manager = Rc::new(RefCell::new(manager));

            let mut listeners = Vec::new();
            if let Some(toggle) = &surface.toggle {
                let surface = Rc::clone(&surface);
                let manager = Rc::clone(&manager);
                listeners.push(Listener::new(toggle, "click", move |_| {
                    let view = manager.borrow_mut().toggle(surface.displayed());
                    surface.render(&view);
                })?);
            } else {
                log::debug!("theme: no #{} on this page; toggle disabled", config.theme_toggle_id);
            }

            if let Some(query) = query {
                let fallback = query.clone();
                listeners.push(Listener::new(&query, "change", move |event| {
                    let prefers_dark = event
                        .dyn_ref::<MediaQueryListEvent>()
                        .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
                    if let Some(view) = manager.borrow_mut().os_changed(prefers_dark) {
                        surface.render(&view);
                    }
                })?);
            }

            Ok(Self { _listeners: listeners })
        }
    }
}

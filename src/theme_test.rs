use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<Theme>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    fn holding(theme: Theme) -> Rc<Self> {
        let store = Rc::new(Self::default());
        *store.value.borrow_mut() = Some(theme);
        store
    }
}

impl PreferenceStore for Rc<MemoryStore> {
    fn load(&self) -> Option<Theme> {
        *self.value.borrow()
    }

    fn save(&self, theme: Theme) {
        *self.value.borrow_mut() = Some(theme);
        self.writes.set(self.writes.get() + 1);
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parses_supported_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn theme_rejects_unknown_values() {
    assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".into())));
    assert!("Dark".parse::<Theme>().is_err());
}

#[test]
fn theme_inverse_and_display() {
    assert_eq!(Theme::Light.inverse(), Theme::Dark);
    assert_eq!(Theme::Dark.inverse(), Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn stored_preference_wins_over_os() {
    let manager = ThemeManager::resolve(MemoryStore::holding(Theme::Light), true);
    assert_eq!(manager.current(), Theme::Light);
    assert!(manager.has_explicit_preference());
}

#[test]
fn os_signal_used_without_stored_preference() {
    let dark = ThemeManager::resolve(Rc::new(MemoryStore::default()), true);
    let light = ThemeManager::resolve(Rc::new(MemoryStore::default()), false);
    assert_eq!(dark.current(), Theme::Dark);
    assert_eq!(light.current(), Theme::Light);
    assert!(!dark.has_explicit_preference());
}

#[test]
fn resolve_never_writes_storage() {
    let store = Rc::new(MemoryStore::default());
    let _ = ThemeManager::resolve(Rc::clone(&store), true);
    assert_eq!(store.writes.get(), 0);
    assert_eq!(*store.value.borrow(), None);
}

// =============================================================
// Apply / toggle
// =============================================================

#[test]
fn apply_sets_marker_persists_and_presses_for_dark() {
    for theme in [Theme::Light, Theme::Dark] {
        let store = Rc::new(MemoryStore::default());
        let mut manager = ThemeManager::resolve(Rc::clone(&store), false);
        let view = manager.apply(theme);
        assert_eq!(view.theme, theme);
        assert_eq!(*store.value.borrow(), Some(theme));
        assert_eq!(view.pressed, theme == Theme::Dark);
    }
}

#[test]
fn toggle_twice_round_trips() {
    let mut manager = ThemeManager::resolve(Rc::new(MemoryStore::default()), false);
    let original = manager.current();
    let once = manager.toggle(Some(original));
    let twice = manager.toggle(Some(once.theme));
    assert_ne!(once.theme, original);
    assert_eq!(twice.theme, original);
}

#[test]
fn toggle_reads_displayed_theme() {
    let mut manager = ThemeManager::resolve(Rc::new(MemoryStore::default()), false);
    let view = manager.toggle(Some(Theme::Dark));
    assert_eq!(view.theme, Theme::Light);
}

#[test]
fn toggle_without_displayed_theme_uses_tracked_theme() {
    let mut manager = ThemeManager::resolve(Rc::new(MemoryStore::default()), true);
    assert_eq!(manager.toggle(None).theme, Theme::Light);
}

#[test]
fn view_labels_name_the_target_theme() {
    let dark = ThemeView::of(Theme::Dark);
    assert_eq!(dark.icon, "\u{2600}");
    assert!(dark.label.contains("light"));
    assert_eq!(dark.aria_pressed(), "true");

    let light = ThemeView::of(Theme::Light);
    assert!(light.label.contains("dark"));
    assert_eq!(light.aria_pressed(), "false");
}

// =============================================================
// OS changes
// =============================================================

#[test]
fn os_changes_tracked_without_writing_storage() {
    let store = Rc::new(MemoryStore::default());
    let mut manager = ThemeManager::resolve(Rc::clone(&store), false);

    assert_eq!(manager.os_changed(true).map(|v| v.theme), Some(Theme::Dark));
    assert_eq!(manager.os_changed(false).map(|v| v.theme), Some(Theme::Light));
    assert_eq!(store.writes.get(), 0);
    assert!(!manager.has_explicit_preference());
}

#[test]
fn os_changes_ignored_with_stored_preference() {
    let mut manager = ThemeManager::resolve(MemoryStore::holding(Theme::Light), false);
    assert_eq!(manager.os_changed(true), None);
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn os_changes_ignored_after_toggle() {
    let mut manager = ThemeManager::resolve(Rc::new(MemoryStore::default()), false);
    manager.toggle(None);
    assert_eq!(manager.os_changed(false), None);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn os_change_defers_to_preference_stored_elsewhere() {
    let store = Rc::new(MemoryStore::default());
    let mut manager = ThemeManager::resolve(Rc::clone(&store), false);
    *store.value.borrow_mut() = Some(Theme::Dark);

    let view = manager.os_changed(false);
    assert_eq!(view, Some(ThemeView::of(Theme::Dark)));
    assert_eq!(manager.current(), Theme::Dark);
    assert!(manager.has_explicit_preference());

    // Pinned from now on.
    assert_eq!(manager.os_changed(true), None);
    assert_eq!(store.writes.get(), 0);
}

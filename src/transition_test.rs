use super::*;

const EXT: &str = ".html";
const SITE: &str = "https://fans.example";

fn transition() -> PageTransition {
    PageTransition::new(300, EXT)
}

fn at(path: &str) -> Url {
    Url::parse(SITE).unwrap().join(path).unwrap()
}

fn home() -> Url {
    at("/index.html")
}

// =============================================================
// Page paths
// =============================================================

#[test]
fn page_path_keeps_full_path() {
    assert_eq!(page_path(&at("/games/timeline.html")), "/games/timeline.html");
    assert_eq!(page_path(&at("/characters.html?tab=2#top")), "/characters.html");
}

#[test]
fn directory_path_is_index() {
    assert_eq!(page_path(&at("/")), "/index.html");
    assert_eq!(page_path(&at("/site/")), "/site/index.html");
}

// =============================================================
// Classification
// =============================================================

#[test]
fn other_site_page() {
    assert_eq!(classify_link("characters.html", &home(), EXT), LinkKind::OtherPage);
    assert_eq!(classify_link("./lore/items.HTML", &home(), EXT), LinkKind::OtherPage);
}

#[test]
fn link_to_current_page_is_same_page() {
    assert_eq!(classify_link("index.html", &at("/"), EXT), LinkKind::SamePage);
    assert_eq!(classify_link("bosses.html#phase-2", &at("/bosses.html"), EXT), LinkKind::SamePage);
    assert_eq!(classify_link("../lore/index.html", &at("/lore/"), EXT), LinkKind::SamePage);
}

#[test]
fn nested_index_is_another_page() {
    assert_eq!(classify_link("lore/index.html", &home(), EXT), LinkKind::OtherPage);
}

#[test]
fn parent_index_is_another_page() {
    assert_eq!(classify_link("../index.html", &at("/lore/index.html"), EXT), LinkKind::OtherPage);
}

#[test]
fn same_origin_absolute_href_is_site_page() {
    assert_eq!(classify_link("https://fans.example/maps.html", &home(), EXT), LinkKind::OtherPage);
    assert_eq!(classify_link("https://fans.example/index.html", &home(), EXT), LinkKind::SamePage);
    assert_eq!(classify_link("/maps.html", &at("/lore/index.html"), EXT), LinkKind::OtherPage);
}

#[test]
fn pages_opened_from_disk_are_site_pages() {
    let current = Url::parse("file:///home/fan/site/index.html").unwrap();
    assert_eq!(classify_link("maps.html", &current, EXT), LinkKind::OtherPage);
    assert_eq!(classify_link("index.html", &current, EXT), LinkKind::SamePage);
}

#[test]
fn external_and_non_page_links() {
    for href in [
        "https://example.com/page.html",
        "http://fans.example/page.html",
        "//cdn.example.com/a.html",
        "mailto:fan@example.com",
        "#top",
        "",
        "assets/map.png",
        "downloads/",
    ] {
        assert_eq!(classify_link(href, &home(), EXT), LinkKind::External, "{href}");
    }
}

// =============================================================
// Activation
// =============================================================

#[test]
fn same_page_link_has_no_transition() {
    let mut t = transition();
    assert_eq!(t.activate("index.html", &home(), Click::default()), Intercept::PassThrough);
    assert_eq!(t.pending(), None);
}

#[test]
fn other_page_link_schedules_delayed_navigation() {
    let mut t = transition();
    let decision = t.activate("weapons.html", &home(), Click::default());
    let href = "https://fans.example/weapons.html";
    assert_eq!(decision, Intercept::Navigate { href: href.into(), delay_ms: 300 });
    assert_eq!(t.pending(), Some(href));
}

#[test]
fn navigation_target_is_resolved_against_current_page() {
    let mut t = transition();
    let decision = t.activate("../index.html", &at("/lore/index.html"), Click::default());
    assert_eq!(
        decision,
        Intercept::Navigate { href: "https://fans.example/index.html".into(), delay_ms: 300 }
    );
}

#[test]
fn second_activation_while_pending_is_suppressed() {
    let mut t = transition();
    t.activate("weapons.html", &home(), Click::default());
    assert_eq!(t.activate("maps.html", &home(), Click::default()), Intercept::Suppress);
    assert_eq!(t.activate("index.html", &home(), Click::default()), Intercept::Suppress);
    assert_eq!(t.pending(), Some("https://fans.example/weapons.html"));
}

#[test]
fn external_link_passes_through_even_while_pending() {
    let mut t = transition();
    t.activate("weapons.html", &home(), Click::default());
    assert_eq!(t.activate("https://example.com", &home(), Click::default()), Intercept::PassThrough);
}

#[test]
fn modified_clicks_are_not_intercepted() {
    let mut t = transition();
    let clicks = [
        Click { modified: true, ..Default::default() },
        Click { auxiliary: true, ..Default::default() },
        Click { new_context: true, ..Default::default() },
        Click { default_prevented: true, ..Default::default() },
    ];
    for click in clicks {
        assert!(!click.is_plain());
        assert_eq!(t.activate("maps.html", &home(), click), Intercept::PassThrough);
    }
    assert_eq!(t.pending(), None);
}

#[test]
fn restore_clears_pending_guard() {
    let mut t = transition();
    t.activate("maps.html", &home(), Click::default());
    assert!(t.restored());
    assert!(!t.restored());
    assert!(matches!(t.activate("maps.html", &home(), Click::default()), Intercept::Navigate { .. }));
}

#[test]
fn site_page_filter() {
    let t = transition();
    assert!(t.is_site_page("lore.html", &home()));
    assert!(t.is_site_page("index.html", &home()));
    assert!(!t.is_site_page("#faq", &home()));
}

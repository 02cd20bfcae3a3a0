use super::*;
use crate::config::AppProfile;

fn marine() -> RouteTable {
    AppProfile::MarineLibrary.routes()
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolves_explicit_paths() {
    let table = marine();
    assert_eq!(table.resolve("/").view, ViewKind::Home);
    assert_eq!(table.resolve("/browse").view, ViewKind::Browse);
    assert_eq!(table.resolve("/query").view, ViewKind::Query);
    assert_eq!(table.resolve("/about").view, ViewKind::About);
    assert_eq!(table.resolve("/superadmin").view, ViewKind::Superadmin);
}

#[test]
fn unknown_paths_hit_the_wildcard() {
    let table = marine();
    for path in ["/nope", "/browse/123", "/queryx", "/api/auth/verify"] {
        let entry = table.resolve(path);
        assert_eq!(entry.view, ViewKind::NotFound, "{path}");
        assert_eq!(entry.name, "not-found");
    }
}

#[test]
fn matching_ignores_case_and_one_trailing_slash() {
    let table = marine();
    assert_eq!(table.resolve("/Browse").view, ViewKind::Browse);
    assert_eq!(table.resolve("/QUERY/").view, ViewKind::Query);
    assert_eq!(table.resolve("/browse//").view, ViewKind::NotFound);
}

#[test]
fn query_and_fragment_are_not_part_of_the_path() {
    let table = marine();
    assert_eq!(table.resolve("/browse?page=2").view, ViewKind::Browse);
    assert_eq!(table.resolve("/query#smiles").view, ViewKind::Query);
    assert_eq!(table.resolve("?x=1").view, ViewKind::Home);
}

#[test]
fn empty_path_is_home() {
    assert_eq!(marine().resolve("").view, ViewKind::Home);
}

#[test]
fn normalize_path_cases() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/a/"), "/a");
    assert_eq!(normalize_path("/a?b=c"), "/a");
    assert_eq!(normalize_path("/a/#top"), "/a");
}

// =============================================================
// titles
// =============================================================

#[test]
fn mapped_paths_get_their_title() {
    let table = marine();
    assert_eq!(table.title_for("/browse"), "Browse - Marine Natural Product Library");
    assert_eq!(table.title_for("/Browse/"), "Browse - Marine Natural Product Library");
}

#[test]
fn unknown_paths_get_default_title() {
    assert_eq!(marine().title_for("/missing"), "Marine Natural Product Library");
}

#[test]
fn routed_but_untitled_paths_get_default_title() {
    const ENTRIES: &[RouteEntry] = &[
        RouteEntry { path: "/", name: "home", view: ViewKind::Home },
        RouteEntry { path: "/login", name: "login", view: ViewKind::Login },
    ];
    const TITLES: &[(&str, &str)] = &[("/", "Home - Lab")];
    let table = RouteTable::new(ENTRIES, TITLES, "Lab");
    assert_eq!(table.resolve("/login").view, ViewKind::Login);
    assert_eq!(table.title_for("/login"), "Lab");
}

// =============================================================
// guards
// =============================================================

#[test]
fn transition_describe_formats_both_cases() {
    assert_eq!(Transition::new(None, "/").describe(), "initial navigation to /");
    assert_eq!(
        Transition::new(Some("/".to_owned()), "/browse").describe(),
        "navigating from / to /browse"
    );
}

#[test]
fn after_each_returns_route_title() {
    let table = marine();
    let title = after_each(&table, &Transition::new(Some("/".to_owned()), "/query"));
    assert_eq!(title, "Query - Marine Natural Product Library");
}

#[test]
fn after_each_on_not_found_uses_default_title() {
    let table = marine();
    assert_eq!(after_each(&table, &Transition::new(None, "/gone")), "Marine Natural Product Library");
}

#[test]
fn before_each_never_blocks() {
    // Logs only; returns unit and leaves the transition untouched.
    let transition = Transition::new(None, "/about");
    before_each(&transition);
    assert_eq!(transition.to, "/about");
}

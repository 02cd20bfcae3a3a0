//! Static route tables and navigation guards.
//!
//! ARCHITECTURE
//! ============
//! Each variant owns an ordered table of `{path, name, view}` entries. Lookup
//! is case-insensitive and ignores one trailing slash; anything else falls
//! through to the not-found entry. Leptos routes all render `RoutedView`, which
//! dispatches through this table, so the table is the single source of truth.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Which page a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    Browse,
    Query,
    About,
    Superadmin,
    Login,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewKind,
}

/// Catch-all entry for unmatched paths.
pub const NOT_FOUND: RouteEntry = RouteEntry { path: "/:pathMatch(.*)*", name: "not-found", view: ViewKind::NotFound };

/// Ordered route table plus the path-to-title mapping applied after navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
    titles: &'static [(&'static str, &'static str)],
    default_title: &'static str,
}

impl RouteTable {
    #[must_use]
    pub const fn new(
        entries: &'static [RouteEntry],
        titles: &'static [(&'static str, &'static str)],
        default_title: &'static str,
    ) -> Self {
        Self { entries, titles, default_title }
    }

    #[must_use]
    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// Resolve a location path to its entry, falling back to [`NOT_FOUND`].
    #[must_use]
    pub fn resolve(&self, path: &str) -> &'static RouteEntry {
        let wanted = normalize_path(path);
        self.entries
            .iter()
            .find(|entry| entry.path.eq_ignore_ascii_case(wanted))
            .unwrap_or(&NOT_FOUND)
    }

    /// Document title for `path`; unmapped and unknown paths get the default.
    #[must_use]
    pub fn title_for(&self, path: &str) -> &'static str {
        let entry = self.resolve(path);
        self.titles
            .iter()
            .find(|(p, _)| *p == entry.path)
            .map_or(self.default_title, |&(_, title)| title)
    }
}

/// Strip query, fragment and a single trailing slash. Empty becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() { "/" } else { trimmed }
}

// =============================================================================
// NAVIGATION GUARDS
// =============================================================================

/// A completed or pending navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<String>,
    pub to: String,
}

impl Transition {
    #[must_use]
    pub fn new(from: Option<String>, to: impl Into<String>) -> Self {
        Self { from, to: to.into() }
    }

    /// Log line emitted by the pre-navigation hook.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.from {
            Some(from) => format!("navigating from {from} to {}", self.to),
            None => format!("initial navigation to {}", self.to),
        }
    }
}

/// Pre-navigation hook. Logs only; navigation always proceeds.
pub fn before_each(transition: &Transition) {
    log::info!("{}", transition.describe());
}

/// Post-navigation hook: scroll to the top and retitle the document.
/// Returns the title it applied.
pub fn after_each(table: &RouteTable, transition: &Transition) -> &'static str {
    let title = table.title_for(&transition.to);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
            if let Some(doc) = window.document() {
                doc.set_title(title);
            }
        }
    }
    title
}

//! Build-time variant selection.
//!
//! The same crate builds two frontends: the marine natural product library
//! browser (default) and the generic MCBW shell (`--features mcbw`). They
//! differ in route table, titles, i18n fallback and startup verification.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::i18n::Locale;
use crate::net::api::AuthEndpoints;
use crate::routes::{RouteEntry, RouteTable, ViewKind};

const MARINE_TITLE: &str = "Marine Natural Product Library";
const MCBW_TITLE: &str = "MCBW";

const MARINE_ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "home", view: ViewKind::Home },
    RouteEntry { path: "/browse", name: "browse", view: ViewKind::Browse },
    RouteEntry { path: "/query", name: "query", view: ViewKind::Query },
    RouteEntry { path: "/about", name: "about", view: ViewKind::About },
    RouteEntry { path: "/superadmin", name: "superadmin", view: ViewKind::Superadmin },
    RouteEntry { path: "/login", name: "login", view: ViewKind::Login },
];

const MARINE_TITLES: &[(&str, &str)] = &[
    ("/", "Home - Marine Natural Product Library"),
    ("/browse", "Browse - Marine Natural Product Library"),
    ("/query", "Query - Marine Natural Product Library"),
    ("/about", "About - Marine Natural Product Library"),
    ("/superadmin", "Administration - Marine Natural Product Library"),
    ("/login", "Sign in - Marine Natural Product Library"),
];

const MCBW_ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "home", view: ViewKind::Home },
    RouteEntry { path: "/browse", name: "browse", view: ViewKind::Browse },
    RouteEntry { path: "/query", name: "query", view: ViewKind::Query },
    RouteEntry { path: "/login", name: "login", view: ViewKind::Login },
];

const MCBW_TITLES: &[(&str, &str)] = &[
    ("/", "Home - MCBW"),
    ("/browse", "Browse - MCBW"),
    ("/query", "Query - MCBW"),
    ("/login", "Sign in - MCBW"),
];

/// Which frontend this build is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppProfile {
    MarineLibrary,
    Mcbw,
}

impl AppProfile {
    /// Variant selected by cargo features.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(feature = "mcbw") { Self::Mcbw } else { Self::MarineLibrary }
    }

    #[must_use]
    pub const fn app_title(self) -> &'static str {
        match self {
            Self::MarineLibrary => MARINE_TITLE,
            Self::Mcbw => MCBW_TITLE,
        }
    }

    #[must_use]
    pub const fn routes(self) -> RouteTable {
        match self {
            Self::MarineLibrary => RouteTable::new(MARINE_ROUTES, MARINE_TITLES, MARINE_TITLE),
            Self::Mcbw => RouteTable::new(MCBW_ROUTES, MCBW_TITLES, MCBW_TITLE),
        }
    }

    /// Locale shown at startup.
    #[must_use]
    pub const fn default_locale(self) -> Locale {
        Locale::EnUs
    }

    /// Locale consulted when the active one lacks a message.
    #[must_use]
    pub const fn fallback_locale(self) -> Locale {
        match self {
            Self::MarineLibrary => Locale::EnUs,
            Self::Mcbw => Locale::ZhCn,
        }
    }

    /// Whether the shell verifies a persisted token once at startup.
    #[must_use]
    pub const fn eager_verify(self) -> bool {
        matches!(self, Self::MarineLibrary)
    }

    #[must_use]
    pub fn auth_endpoints(self) -> AuthEndpoints {
        AuthEndpoints::default()
    }
}

//! Top navigation bar: route links, auth status, sign-out and locale toggle.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppProfile;
use crate::i18n::{Locale, use_translate};
use crate::routes::{RouteEntry, RouteTable, ViewKind};
use crate::state::auth::{AuthSession, AuthState};

/// Translation key for a route's link label.
pub(crate) fn nav_label_key(view: ViewKind) -> &'static str {
    match view {
        ViewKind::Home => "nav.home",
        ViewKind::Browse => "nav.browse",
        ViewKind::Query => "nav.query",
        ViewKind::About => "nav.about",
        ViewKind::Superadmin => "nav.superadmin",
        ViewKind::Login => "nav.login",
        ViewKind::NotFound => "not_found.title",
    }
}

/// Links shown in the bar. Sign-in lives on the right; administration only
/// appears for administrators.
pub(crate) fn visible_links(table: &RouteTable, is_admin: bool) -> Vec<RouteEntry> {
    table
        .entries()
        .iter()
        .filter(|entry| match entry.view {
            ViewKind::Login | ViewKind::NotFound => false,
            ViewKind::Superadmin => is_admin,
            _ => true,
        })
        .copied()
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let profile = expect_context::<AppProfile>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AuthSession>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = use_translate();
    let table = profile.routes();

    let links = move || {
        visible_links(&table, auth.get().is_admin())
            .into_iter()
            .map(|entry| {
                let label = nav_label_key(entry.view);
                view! {
                    <li class="nav-item">
                        <A href=entry.path attr:class="nav-link">{move || t(label)}</A>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let account = move || {
        let state = auth.get();
        if state.is_authenticated() {
            let who = state
                .user_info
                .as_ref()
                .and_then(|info| info.operator().map(str::to_owned))
                .unwrap_or_default();
            let badge = state.is_admin().then(|| {
                view! { <span class="badge text-bg-warning">{t("auth.admin")}</span> }
            });
            let session = session.clone();
            view! {
                <span class="navbar-text">{t("auth.signed_in_as")} " " <strong>{who}</strong></span>
                {badge}
                <button class="btn btn-outline-light btn-sm" on:click=move |_| session.logout()>
                    {t("nav.logout")}
                </button>
            }
                .into_any()
        } else {
            view! {
                <A href="/login" attr:class="btn btn-outline-light btn-sm">{t("nav.login")}</A>
            }
                .into_any()
        }
    };

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-primary">
            <div class="container-fluid">
                <A href="/" attr:class="navbar-brand">{profile.app_title()}</A>
                <ul class="navbar-nav me-auto">{links}</ul>
                <div class="navbar__account d-flex align-items-center gap-2">
                    {account}
                    <button
                        class="btn btn-link btn-sm text-light"
                        on:click=move |_| {
                            locale.update(|l| *l = l.toggled());
                            log::debug!("locale switched to {}", locale.get_untracked().code());
                        }
                    >
                        {move || t("nav.language")}
                    </button>
                </div>
            </div>
        </nav>
    }
}

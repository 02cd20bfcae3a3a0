//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `RoutedView` picks the page for the current location from
//! the active route table.

pub mod about;
pub mod browse;
pub mod home;
pub mod login;
pub mod not_found;
pub mod query;
pub mod superadmin;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::AppProfile;
use crate::routes::ViewKind;

use self::{
    about::AboutPage, browse::BrowsePage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    query::QueryPage, superadmin::SuperadminPage,
};

/// Renders the page the route table maps the current path to.
#[component]
pub fn RoutedView() -> impl IntoView {
    let profile = expect_context::<AppProfile>();
    let location = use_location();

    move || match profile.routes().resolve(&location.pathname.get()).view {
        ViewKind::Home => view! { <HomePage/> }.into_any(),
        ViewKind::Browse => view! { <BrowsePage/> }.into_any(),
        ViewKind::Query => view! { <QueryPage/> }.into_any(),
        ViewKind::About => view! { <AboutPage/> }.into_any(),
        ViewKind::Superadmin => view! { <SuperadminPage/> }.into_any(),
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

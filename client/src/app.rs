//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Html, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navbar::NavBar;
use crate::config::AppProfile;
use crate::i18n::Locale;
use crate::pages::RoutedView;
use crate::routes::{Transition, after_each, before_each};
use crate::state::auth::{AuthSession, AuthState};
use crate::util::dom_events::broadcast_auth_changed;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth session, provides all shared contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = AppProfile::current();
    let session = AuthSession::browser(profile.auth_endpoints());

    // Starts signed out on both server and client so hydration matches; the
    // persisted session is applied once mounted.
    let auth = RwSignal::new(AuthState::default());
    let locale = RwSignal::new(profile.default_locale());

    {
        let handle = session.downgrade();
        session.subscribe(move |_| {
            if let Some(session) = handle.upgrade() {
                auth.set(session.snapshot());
            }
        });
    }
    session.subscribe(broadcast_auth_changed);

    {
        let session = session.clone();
        Effect::new(move || auth.set(session.snapshot()));
    }

    if profile.eager_verify() && session.is_authenticated() {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if !session.verify_token().await {
                    log::info!("persisted auth token did not verify");
                }
            });
        }
    }

    provide_context(profile);
    provide_context(session);
    provide_context(auth);
    provide_context::<RwSignal<Locale>>(locale);

    view! {
        <Html attr:lang=move || locale.get().html_lang()/>
        <Stylesheet id="leptos" href="/pkg/marinelib.css"/>

        <Router>
            <NavigationGuards/>
            <NavBar/>
            <main class="container py-4">
                // Every path renders through the route table, which owns case
                // folding, trailing slashes and the per-variant page set.
                // `NotFoundPage` sets the 404 status during server rendering.
                <Routes fallback=|| view! { <RoutedView/> }>
                    <Route path=StaticSegment("") view=RoutedView/>
                    <Route path=WildcardSegment("any") view=RoutedView/>
                </Routes>
            </main>
        </Router>
    }
}

/// Runs the navigation hooks on every location change and keeps the
/// document title in sync for server rendering.
#[component]
fn NavigationGuards() -> impl IntoView {
    let profile = expect_context::<AppProfile>();
    let table = profile.routes();
    let location = use_location();

    Effect::new(move |prev: Option<String>| {
        let to = location.pathname.get();
        let transition = Transition::new(prev, to.clone());
        before_each(&transition);
        after_each(&table, &transition);
        to
    });

    view! { <Title text=move || table.title_for(&location.pathname.get())/> }
}

//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppProfile;
use crate::i18n::use_translate;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = expect_context::<AppProfile>();
    let t = use_translate();

    view! {
        <section class="home-page">
            <h1>{profile.app_title()}</h1>
            <p class="lead">{move || t("home.intro")}</p>
            <div class="home-page__actions d-flex gap-2">
                <A href="/browse" attr:class="btn btn-primary">{move || t("nav.browse")}</A>
                <A href="/query" attr:class="btn btn-outline-primary">{move || t("nav.query")}</A>
            </div>
        </section>
    }
}

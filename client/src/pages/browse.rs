//! Compound browsing page.

use leptos::prelude::*;

use crate::i18n::use_translate;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let t = use_translate();

    view! {
        <section class="browse-page">
            <h2>{move || t("nav.browse")}</h2>
            <p>{move || t("browse.intro")}</p>
        </section>
    }
}

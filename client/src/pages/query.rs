//! Structure and text query page.

use leptos::prelude::*;

use crate::i18n::use_translate;

#[component]
pub fn QueryPage() -> impl IntoView {
    let t = use_translate();

    view! {
        <section class="query-page">
            <h2>{move || t("nav.query")}</h2>
            <p>{move || t("query.intro")}</p>
        </section>
    }
}

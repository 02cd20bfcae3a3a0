//! Catch-all view for paths outside the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_translate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let t = use_translate();

    // Server rendering answers with 404 whenever the route table sends a path here.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found-page text-center">
            <h2>"404"</h2>
            <p>{move || t("not_found.title")}</p>
            <A href="/" attr:class="btn btn-primary">{move || t("not_found.back")}</A>
        </section>
    }
}

use leptos::prelude::*;

use crate::config::AppProfile;
use crate::i18n::use_translate;

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = expect_context::<AppProfile>();
    let t = use_translate();

    view! {
        <section class="about-page">
            <h2>{move || t("nav.about")}</h2>
            <p>{move || t("about.intro")}</p>
            <p class="text-muted">{profile.app_title()}</p>
        </section>
    }
}

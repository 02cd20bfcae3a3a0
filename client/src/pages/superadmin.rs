//! Passkey administration page. Access is decided by the backend; the navbar
//! hides the link from non-admins but the page asks the server regardless.

use leptos::prelude::*;

use crate::i18n::use_translate;
use crate::state::auth::AuthSession;

#[component]
pub fn SuperadminPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let t = use_translate();

    let allowed = LocalResource::new(move || {
        let session = session.clone();
        async move { session.verify_passkey_modifiable().await }
    });

    view! {
        <section class="superadmin-page">
            <h2>{move || t("nav.superadmin")}</h2>
            <Suspense fallback=move || view! { <p>{move || t("superadmin.checking")}</p> }>
                {move || {
                    allowed
                        .get()
                        .map(|ok| {
                            if ok {
                                view! { <div class="alert alert-success">{move || t("superadmin.allowed")}</div> }
                                    .into_any()
                            } else {
                                view! { <div class="alert alert-danger">{move || t("superadmin.denied")}</div> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

//! Passkey sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::use_translate;
use crate::state::auth::AuthSession;

/// The passkey as typed, or the translation key of the validation message.
/// The backend compares passkeys exactly, so surrounding spaces are kept.
pub(crate) fn validate_passkey_input(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err("login.empty");
    }
    Ok(raw.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();
    let t = use_translate();

    let passkey = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_passkey_input(&passkey.get()) {
            Ok(value) => value,
            Err(key) => {
                info.set(t(key).to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(t("login.busy").to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login_with_passkey(&value).await {
                    Ok(_) => {
                        passkey.set(String::new());
                        info.set(String::new());
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("{}: {e}", t("login.failed"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate, value);
        }
    };

    view! {
        <section class="login-page">
            <div class="login-card card mx-auto">
                <div class="card-body">
                    <h2 class="card-title">{move || t("login.title")}</h2>
                    <form class="login-form" on:submit=on_submit>
                        <label class="form-label" for="passkey">{move || t("login.passkey")}</label>
                        <input
                            id="passkey"
                            class="form-control"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || passkey.get()
                            on:input=move |ev| passkey.set(event_target_value(&ev))
                        />
                        <button class="btn btn-primary mt-3" type="submit" disabled=move || busy.get()>
                            {move || t("login.submit")}
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message mt-2">{move || info.get()}</p>
                    </Show>
                </div>
            </div>
        </section>
    }
}

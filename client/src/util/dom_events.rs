//! Re-broadcast auth changes as a DOM `CustomEvent` on `window`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rust components subscribe to `AuthSession` directly. Any non-Rust script
//! on the page can listen for `auth-changed` on `window` instead, with
//! `{isAuthenticated, userInfo}` as `detail`.

#[cfg(test)]
#[path = "dom_events_test.rs"]
mod dom_events_test;

use crate::state::auth::AuthEvent;

pub const AUTH_CHANGED_EVENT: &str = "auth-changed";

/// JSON text used as the event's `detail`.
pub(crate) fn event_detail_json(event: &AuthEvent) -> Option<String> {
    serde_json::to_string(event).ok()
}

/// Dispatch `auth-changed` on `window`. No-op outside the browser.
pub fn broadcast_auth_changed(event: &AuthEvent) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(raw) = event_detail_json(event) else {
            return;
        };
        let Ok(detail) = js_sys::JSON::parse(&raw) else {
            return;
        };
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(AUTH_CHANGED_EVENT, &init) {
            Ok(dom_event) => {
                let _ = window.dispatch_event(&dom_event);
            }
            Err(e) => log::warn!("failed to build {AUTH_CHANGED_EVENT} event: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
    }
}

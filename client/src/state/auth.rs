//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` owns the bearer token and cached user info, persists both
//! through a `KeyValueStore`, and verifies the token against the backend
//! through an `AuthTransport`. It is provided once as Leptos context; route
//! guards, the navigation bar and pages read it or subscribe to its changes.
//!
//! DESIGN
//! ======
//! The session is a cheap-to-clone handle over shared state so it can be
//! provided as context (which must be `Send + Sync`). Listeners are invoked
//! after the state lock is released, so a listener may call back into the
//! session. No lock is held across an `.await`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::Serialize;

use crate::net::api::{ApiError, AuthEndpoints, AuthTransport, Headers, HttpTransport, parse_login_response};
use crate::net::types::{LoginRequest, UserInfo};
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_INFO_KEY: &str = "userInfo";

/// Snapshot of the session handed to reactive UI state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: String,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().is_some_and(UserInfo::is_admin)
    }
}

/// Payload of the auth-changed notification.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEvent {
    pub is_authenticated: bool,
    pub user_info: Option<UserInfo>,
}

/// Handle returned by [`AuthSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

struct Inner {
    state: Mutex<AuthState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    store: Arc<dyn KeyValueStore>,
    transport: Arc<dyn AuthTransport>,
    endpoints: AuthEndpoints,
}

/// Token-based authentication session.
#[derive(Clone)]
pub struct AuthSession {
    inner: Arc<Inner>,
}

/// Weak counterpart of [`AuthSession`].
#[derive(Clone)]
pub struct WeakAuthSession {
    inner: Weak<Inner>,
}

impl WeakAuthSession {
    /// The session, if any strong handle is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<AuthSession> {
        self.inner.upgrade().map(|inner| AuthSession { inner })
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &self.snapshot())
            .field("endpoints", &self.inner.endpoints)
            .finish_non_exhaustive()
    }
}

impl AuthSession {
    /// Build a session, restoring any token and user info left in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, transport: Arc<dyn AuthTransport>, endpoints: AuthEndpoints) -> Self {
        let state = load_persisted(store.as_ref());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                store,
                transport,
                endpoints,
            }),
        }
    }

    /// Session over `localStorage` and `fetch`.
    pub fn browser(endpoints: AuthEndpoints) -> Self {
        Self::new(Arc::new(BrowserStorage), Arc::new(HttpTransport), endpoints)
    }

    /// Non-owning handle for listeners that need to read the session back.
    /// A listener holding a strong clone would keep the session alive through
    /// its own listener list.
    #[must_use]
    pub fn downgrade(&self) -> WeakAuthSession {
        WeakAuthSession { inner: Arc::downgrade(&self.inner) }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, AuthState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AuthState {
        self.state().clone()
    }

    pub fn auth_token(&self) -> String {
        self.state().token.clone()
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.state().user_info.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state().is_admin()
    }

    /// Store a new token and user info, persist both, and notify listeners.
    ///
    /// Storage failures are logged and otherwise ignored: the in-memory
    /// session is still updated.
    pub fn login(&self, token: &str, user_info: Option<UserInfo>) {
        {
            let mut state = self.state();
            state.token = token.to_owned();
            state.user_info.clone_from(&user_info);
        }

        let store = self.inner.store.as_ref();
        if let Err(e) = store.set(TOKEN_KEY, token) {
            log::warn!("failed to persist auth token: {e}");
        }
        match &user_info {
            Some(info) => match serde_json::to_string(info) {
                Ok(raw) => {
                    if let Err(e) = store.set(USER_INFO_KEY, &raw) {
                        log::warn!("failed to persist user info: {e}");
                    }
                }
                Err(e) => log::warn!("failed to encode user info: {e}"),
            },
            None => store.remove(USER_INFO_KEY),
        }

        self.emit(&AuthEvent { is_authenticated: !token.is_empty(), user_info });
    }

    /// Clear the token and user info everywhere and notify listeners.
    pub fn logout(&self) {
        {
            let mut state = self.state();
            state.token.clear();
            state.user_info = None;
        }
        self.inner.store.remove(TOKEN_KEY);
        self.inner.store.remove(USER_INFO_KEY);

        self.emit(&AuthEvent { is_authenticated: false, user_info: None });
    }

    /// `Authorization: Bearer <token>`, or nothing when signed out.
    pub fn auth_header(&self) -> Headers {
        let token = self.auth_token();
        let mut headers = Headers::new();
        if !token.is_empty() {
            headers.insert("Authorization".to_owned(), format!("Bearer {token}"));
        }
        headers
    }

    /// Ask the backend whether the current token is still valid.
    ///
    /// Returns `false` without a request when signed out. A 401 signs the
    /// session out. Transport failures are logged and reported as `false`.
    pub async fn verify_token(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let headers = self.auth_header();
        match self.inner.transport.get(&self.inner.endpoints.verify, &headers).await {
            Ok(resp) => {
                if resp.status == 401 {
                    log::info!("auth token rejected by backend, signing out");
                    self.logout();
                }
                resp.ok()
            }
            Err(e) => {
                log::error!("token verification failed: {e}");
                false
            }
        }
    }

    /// Ask the backend whether the current holder may manage passkeys.
    pub async fn verify_passkey_modifiable(&self) -> bool {
        let headers = self.auth_header();
        match self
            .inner
            .transport
            .get(&self.inner.endpoints.passkey_modifiable, &headers)
            .await
        {
            Ok(resp) => resp.ok(),
            Err(e) => {
                log::error!("passkey permission check failed: {e}");
                false
            }
        }
    }

    /// Exchange a passkey for a token and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a blank passkey, otherwise the
    /// transport, decode, or backend rejection error.
    pub async fn login_with_passkey(&self, passkey: &str) -> Result<UserInfo, ApiError> {
        if passkey.trim().is_empty() {
            return Err(ApiError::InvalidInput("passkey must not be empty"));
        }
        let body = serde_json::to_value(LoginRequest { passkey }).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = self
            .inner
            .transport
            .post_json(&self.inner.endpoints.login, &body, &Headers::new())
            .await?;
        let data = parse_login_response(&resp)?;
        let info = UserInfo::new(data.user);
        self.login(&data.token, Some(info.clone()));
        Ok(info)
    }

    /// Register a listener for auth changes.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn emit(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

/// Read the persisted token and user info. Unparseable user info is dropped.
fn load_persisted(store: &dyn KeyValueStore) -> AuthState {
    let token = store.get(TOKEN_KEY).unwrap_or_default();
    let user_info = store.get(USER_INFO_KEY).and_then(|raw| {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => UserInfo::from_value(value),
            Err(e) => {
                log::warn!("ignoring unreadable persisted user info: {e}");
                None
            }
        }
    });
    AuthState { token, user_info }
}

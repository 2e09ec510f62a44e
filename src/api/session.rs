//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! A thin wrapper around Actix cookie sessions so handlers only deal with
//! an optional resolved account id. Cookies are never parsed here or
//! anywhere else in the crate.

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::errors::{Result, TinylinkError};
use crate::services::AccountService;
use crate::storage::Account;

pub(crate) const ACCOUNT_ID_KEY: &str = "account_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated account's id in the session cookie.
    pub fn persist_account(&self, account_id: &str) -> Result<()> {
        self.0
            .insert(ACCOUNT_ID_KEY, account_id)
            .map_err(|e| TinylinkError::session(format!("failed to persist session: {}", e)))
    }

    /// Fetch the account id carried by the session, if any.
    pub fn account_id(&self) -> Result<Option<String>> {
        self.0
            .get::<String>(ACCOUNT_ID_KEY)
            .map_err(|e| TinylinkError::session(format!("failed to read session: {}", e)))
    }

    /// Drop all session state, signing the caller out.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Resolve the session's account id against the account directory. A stale
/// or tampered id that no longer resolves is treated as anonymous.
pub async fn current_account(
    session: &SessionContext,
    accounts: &AccountService,
) -> Result<Option<Account>> {
    match session.account_id()? {
        Some(id) => Ok(accounts.get(&id).await),
        None => Ok(None),
    }
}

/// Build the cookie-session middleware used by the app and its tests.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Derive the session signing key from the configured secret, falling back
/// to an ephemeral key (all sessions die with the process) when the secret
/// is missing or too short to derive from.
pub fn session_key(secret: &str) -> Key {
    if secret.len() >= 32 {
        Key::derive_from(secret.as_bytes())
    } else {
        if !secret.is_empty() {
            tracing::warn!("session secret shorter than 32 bytes, using ephemeral key");
        } else {
            tracing::warn!("no session secret configured, using ephemeral key");
        }
        Key::generate()
    }
}

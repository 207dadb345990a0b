//! Session resolution.
//!
//! Identity is resolved per request through the injectable
//! [`SessionProvider`] interface, so a real identity provider can be
//! substituted without touching any handler. The shipped implementation is
//! [`StaticSessionProvider`], which binds every request to one fixed
//! account.

use std::sync::Arc;

use axum::http::request::Parts;
use jiff::{Span, Timestamp};
use murmur_postgres::model::NewAccount;
use uuid::Uuid;

/// Resolved identity and expiry for the current request.
///
/// Sessions are created per request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Account the request acts on behalf of.
    pub account_id: Uuid,
    /// Display name of the account holder.
    pub display_name: String,
    /// Email address of the account holder.
    pub email_address: String,
    /// When the session stops being valid.
    pub expires_at: Timestamp,
}

impl Session {
    /// Returns whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Timestamp::now()
    }
}

/// Resolves the identity behind an incoming request.
///
/// Returning `None` means the request is unauthenticated; callers reject
/// with a 401 and perform no persistence.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    /// Resolves a session from the request head.
    async fn resolve(&self, parts: &Parts) -> Option<Session>;
}

/// Shared handle to the configured session provider.
pub type SessionResolver = Arc<dyn SessionProvider>;

/// Account id the fixed development identity resolves to.
pub const STUB_ACCOUNT_ID: Uuid = Uuid::from_u128(1);

/// Display name of the fixed development identity.
pub const STUB_DISPLAY_NAME: &str = "John Doe";

/// Email address of the fixed development identity.
pub const STUB_EMAIL_ADDRESS: &str = "john@example.com";

/// Account row backing the fixed identity.
///
/// Seeded at startup so that chats created through the stub provider
/// satisfy the accounts foreign key.
pub fn stub_account() -> NewAccount {
    NewAccount {
        id: Some(STUB_ACCOUNT_ID),
        display_name: STUB_DISPLAY_NAME.to_string(),
        email_address: STUB_EMAIL_ADDRESS.to_string(),
    }
}

/// Session provider bound to one fixed account.
///
/// Every request resolves to the same identity with a fresh 24-hour
/// expiry.
#[derive(Debug, Clone)]
pub struct StaticSessionProvider {
    account_id: Uuid,
    display_name: String,
    email_address: String,
}

impl StaticSessionProvider {
    /// Creates a provider bound to the given account.
    pub fn new(account_id: Uuid) -> Self {
        Self {
            account_id,
            display_name: STUB_DISPLAY_NAME.to_string(),
            email_address: STUB_EMAIL_ADDRESS.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn resolve(&self, _parts: &Parts) -> Option<Session> {
        Some(Session {
            account_id: self.account_id,
            display_name: self.display_name.clone(),
            email_address: self.email_address.clone(),
            expires_at: Timestamp::now().saturating_add(Span::new().hours(24)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_always_resolves() {
        let account_id = Uuid::now_v7();
        let provider = StaticSessionProvider::new(account_id);

        let request = axum::http::Request::builder()
            .uri("/api/chat")
            .body(())
            .unwrap();
        let (parts, ()) = request.into_parts();

        let session = provider.resolve(&parts).await.unwrap();
        assert_eq!(session.account_id, account_id);
        assert_eq!(session.email_address, STUB_EMAIL_ADDRESS);
        assert!(!session.is_expired());
    }
}

//! Session extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind};
use crate::service::{Session, SessionResolver};

/// Authenticated session for the current request.
///
/// Extraction asks the configured [`SessionProvider`] for the request's
/// identity; absence or expiry rejects with a 401 before the handler body
/// runs, so a handler that takes [`AuthSession`] never executes
/// unauthenticated.
///
/// [`SessionProvider`]: crate::service::SessionProvider
#[derive(Debug, Clone, Deref, PartialEq)]
pub struct AuthSession(pub Session);

impl AuthSession {
    /// Returns the inner session.
    #[inline]
    pub fn into_inner(self) -> Session {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    SessionResolver: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let resolver = SessionResolver::from_ref(state);

        let Some(session) = resolver.resolve(parts).await else {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                "Request carries no resolvable session"
            );
            return Err(ErrorKind::MissingAuthToken.into_error());
        };

        if session.is_expired() {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                account_id = %session.account_id,
                expires_at = %session.expires_at,
                "Session expired"
            );
            return Err(ErrorKind::Unauthorized.with_message("Session expired"));
        }

        Ok(Self(session))
    }
}

impl aide::OperationInput for AuthSession {}

//! Bearer-token authentication.

use std::collections::HashSet;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use procgate_app::ports::ProcedureStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Policy deciding whether a request's bearer token is acceptable.
#[derive(Debug)]
pub enum BearerAuth {
    /// Accept every request. Meant for local development.
    Open,
    /// Accept only requests presenting one of the listed tokens.
    Tokens(HashSet<String>),
}

impl BearerAuth {
    /// Policy that accepts everything.
    #[must_use]
    pub fn open() -> Self {
        Self::Open
    }

    /// Policy that accepts exactly the given tokens.
    #[must_use]
    pub fn tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// Check a raw `Authorization` header value against the policy.
    #[must_use]
    pub fn allows(&self, header: Option<&str>) -> bool {
        match self {
            Self::Open => true,
            Self::Tokens(tokens) => header
                .and_then(bearer_token)
                .is_some_and(|token| tokens.contains(token)),
        }
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Middleware rejecting any request the state's [`BearerAuth`] refuses.
pub async fn require_bearer<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Response
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if state.auth.allows(header) {
        next.run(request).await
    } else {
        ApiError::Unauthorized.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_anything_when_open() {
        let auth = BearerAuth::open();

        assert!(auth.allows(None));
        assert!(auth.allows(Some("Bearer whatever")));
    }

    #[test]
    fn should_accept_listed_token() {
        let auth = BearerAuth::tokens(["secret"]);

        assert!(auth.allows(Some("Bearer secret")));
    }

    #[test]
    fn should_reject_missing_header_when_tokens_configured() {
        let auth = BearerAuth::tokens(["secret"]);

        assert!(!auth.allows(None));
    }

    #[test]
    fn should_reject_unlisted_token() {
        let auth = BearerAuth::tokens(["secret"]);

        assert!(!auth.allows(Some("Bearer other")));
    }

    #[test]
    fn should_reject_token_without_bearer_prefix() {
        let auth = BearerAuth::tokens(["secret"]);

        assert!(!auth.allows(Some("secret")));
        assert!(!auth.allows(Some("Basic secret")));
    }
}

//! Axum extractors for authentication.

use armory_domain::OwnerId;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::debug;

use super::error::ApiError;
use super::state::AppState;

/// Extractor for identified callers.
///
/// Reads the `Authorization` header (an optional `Bearer ` prefix is
/// dropped) and hands it to the state's identity provider. Rejects with
/// 401 before the handler body runs, so an unidentified caller never
/// reaches the store.
///
/// # Example
///
/// ```ignore
/// async fn my_loadouts(AuthenticatedOwner(owner): AuthenticatedOwner) -> String {
///     format!("Hello, {}!", owner)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedOwner(pub OwnerId);

#[async_trait]
impl<R> FromRequestParts<AppState<R>> for AuthenticatedOwner
where
    R: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let credential = credential_from_headers(&parts.headers);

        match state.identity.resolve(credential) {
            Ok(owner) => Ok(AuthenticatedOwner(owner)),
            Err(e) => {
                debug!(error = %e, "Rejected request without usable credential");
                Err(e.into())
            }
        }
    }
}

/// Raw credential from the `Authorization` header; `""` when absent.
pub fn credential_from_headers(headers: &HeaderMap) -> &str {
    let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return "";
    };

    let trimmed = value.trim_start();
    let (Some(scheme), Some(rest)) = (trimmed.get(..BEARER.len()), trimmed.get(BEARER.len()..))
    else {
        return value;
    };
    // A bare scheme (`Bearer` with its trailing space dropped on the wire)
    // carries no token.
    if scheme.eq_ignore_ascii_case(BEARER)
        && (rest.is_empty() || rest.starts_with(char::is_whitespace))
    {
        rest.trim_start()
    } else {
        value
    }
}

const BEARER: &str = "bearer";

//! Request extractors for the authenticated user
//!
//! `CurrentUser` rejects requests without a valid bearer token.
//! `MaybeUser` never rejects; logout uses it so an expired token still
//! gets a 204 instead of a 401.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::tokens;
use crate::error::ApiError;
use crate::server::PinPeopleServer;

/// Identity of the authenticated requester
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub is_superuser: bool,
}

/// Requester identity that may be absent or invalid
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn authenticate(parts: &Parts, server: &PinPeopleServer) -> Result<CurrentUser, ApiError> {
    let token = bearer_token(parts)
        .ok_or_else(|| ApiError::authentication("Missing bearer token"))?;
    let claims = tokens::verify_token(&server.config.jwt_secret, token)
        .map_err(|_| ApiError::authentication("Invalid or expired token"))?;
    Ok(CurrentUser {
        id: claims.sub,
        username: claims.username,
        is_superuser: claims.is_superuser,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    PinPeopleServer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let server = PinPeopleServer::from_ref(state);
        authenticate(parts, &server)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    PinPeopleServer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let server = PinPeopleServer::from_ref(state);
        Ok(MaybeUser(authenticate(parts, &server).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn bearer_token_is_extracted() {
        let parts = parts_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_header_yields_no_token() {
        let parts = parts_with_auth(None);
        assert_eq!(bearer_token(&parts), None);
    }

    #[test]
    fn non_bearer_scheme_is_ignored() {
        let parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&parts), None);
    }

    #[test]
    fn empty_bearer_value_is_ignored() {
        let parts = parts_with_auth(Some("Bearer   "));
        assert_eq!(bearer_token(&parts), None);
    }
}

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated requester extracted from a bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.sub }
    }
}

/// Rejects the request with 401 unless it carries a valid bearer token
pub async fn require_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_user = authenticate(&state, &token)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Attaches the requester when a token is sent; anonymous requests pass through.
/// A token that is present but invalid is still a 401.
pub async fn optional_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    match extract_bearer_token(&headers) {
        Ok(Some(token)) => match authenticate(&state, &token) {
            Ok(auth_user) => {
                request.extensions_mut().insert(auth_user);
            }
            Err(e) => return e.into_response(),
        },
        Ok(None) => {}
        Err(e) => return e.into_response(),
    }

    next.run(request).await
}

fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    validate_jwt(&state.config.security, token)
        .map(AuthUser::from)
        .map_err(|e| {
            tracing::debug!("rejected bearer token: {}", e);
            ApiError::unauthorized(e.to_string())
        })
}

/// `Ok(None)` when no Authorization header is present
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        Some(_) => Err(ApiError::unauthorized("Empty bearer token")),
        None => Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        )),
    }
}

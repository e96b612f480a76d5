use crate::core::auth::{AuthenticationError, CurrentUser, TokenKeys};
use crate::error::Error;
use crate::AppResult;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Rejects requests without a valid bearer token and exposes the caller as a
/// [CurrentUser] request extension.
pub async fn verify_bearer<B>(
    State(keys): State<TokenKeys>,
    mut req: Request<B>,
    next: Next<B>,
) -> AppResult<Response> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(Error::new(AuthenticationError::Unauthenticated))?
        .to_str()
        .map_err(|_| AuthenticationError::Unauthenticated)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(Error::new(AuthenticationError::Unauthenticated))?;

    let claims = keys
        .verify(token)
        .map_err(|_| AuthenticationError::Unauthenticated)?;

    let id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AuthenticationError::Unauthenticated)?;

    req.extensions_mut().insert(CurrentUser {
        id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

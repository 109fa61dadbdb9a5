use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::manager::DatabaseManager;
use crate::database::models::UserRole;
use crate::error::ApiError;
use crate::services::{identity, ServiceError};

/// Authenticated caller identity, resolved once per request and attached as
/// a request extension. Handlers consume this and nothing else.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: UserRole,
    pub email: String,
}

/// Routes that skip authentication entirely
const PUBLIC_ROUTES: &[&str] = &["/", "/health", "/login", "/cadastrate"];

fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path) || path.starts_with("/docs")
}

/// Authentication middleware: validates the bearer token and resolves the
/// caller's id + role before any handler runs. Fails closed on a missing,
/// malformed, expired or unresolvable token.
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    if is_public(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Token missing or invalid"))?;

    let claims = auth::validate_jwt(&token)
        .map_err(|_| ApiError::unauthorized("Token expired or invalid"))?;

    // The token subject is an email; id + role come from the database so a
    // deactivated account loses access without waiting for token expiry.
    let pool = DatabaseManager::pool().await?;
    let caller = identity::resolve_identity(&pool, &claims.sub)
        .await
        .map_err(|e| match e {
            ServiceError::NotFound(_) | ServiceError::InvalidInput(_) => {
                ApiError::unauthorized("Token expired or invalid")
            }
            other => ApiError::from(other),
        })?;

    let auth_user = AuthUser {
        user_id: caller.user_id,
        role: caller.role,
        email: claims.sub,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;

    let token = auth_str.strip_prefix("Bearer ")?;
    if token.trim().is_empty() {
        return None;
    }
    Some(token.to_string())
}

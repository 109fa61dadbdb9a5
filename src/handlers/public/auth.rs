use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::database::manager::DatabaseManager;
use crate::database::models::{NewUser, UserRole};
use crate::error::ApiError;
use crate::services::{address, identity, ServiceError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login - authenticate and receive a bearer token.
///
/// Credentials are checked against exactly one active user row; any
/// mismatch (wrong password, unknown email, deactivated account) collapses
/// to the same 401.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let authenticated = identity::sign_in(&pool, &payload.username, &payload.password).await?;
    if !authenticated {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = auth::generate_jwt(Claims::new(payload.username.as_str())).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    Ok(Json(json!({
        "message": "Login successful",
        "user": payload.username,
        "access_token": token,
        "token_type": "bearer"
    })))
}

#[derive(Debug, Deserialize)]
pub struct CadastrateRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub tipo_usuario: UserRole,
    pub descricao: Option<String>,
    pub documento: Option<String>,
    pub cep: Option<String>,
}

/// POST /cadastrate - register a new account.
///
/// Receivers must supply a cause description, document and a postal code
/// that the lookup service recognizes. For donors and admins the profile
/// fields are stored as NULL even when provided. Every failure on this
/// endpoint is a 400.
pub async fn cadastrate(Json(payload): Json<CadastrateRequest>) -> Result<Json<Value>, ApiError> {
    let new_user = match payload.tipo_usuario {
        UserRole::Receiver => {
            let descricao = non_empty(payload.descricao)
                .ok_or_else(|| ApiError::bad_request("Receiver registration requires a cause description"))?;
            let documento = non_empty(payload.documento)
                .ok_or_else(|| ApiError::bad_request("Receiver registration requires a document"))?;
            let cep_raw = non_empty(payload.cep)
                .ok_or_else(|| ApiError::bad_request("Receiver registration requires a postal code"))?;

            let cep = address::normalize_cep(&cep_raw)
                .ok_or_else(|| ApiError::bad_request("Invalid postal code"))?;
            if !address::validate_cep(&cep).await {
                return Err(ApiError::bad_request("Postal code not found"));
            }

            NewUser {
                nome: payload.nome,
                email: payload.email,
                senha: payload.senha,
                role: UserRole::Receiver,
                descricao: Some(descricao),
                documento: Some(documento),
                cep: Some(cep),
            }
        }
        role => NewUser {
            nome: payload.nome,
            email: payload.email,
            senha: payload.senha,
            role,
            descricao: None,
            documento: None,
            cep: None,
        },
    };

    let pool = DatabaseManager::pool().await?;
    identity::register(&pool, &new_user).await.map_err(|e| match e {
        ServiceError::Conflict(_) => {
            ApiError::bad_request("Cadastration failed: email already registered")
        }
        other => ApiError::from(other),
    })?;

    Ok(Json(json!({
        "message": "Cadastration successful",
        "user": new_user.nome
    })))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

use sqlx::PgPool;

use crate::database::models::{NewUser, UserRole};
use crate::services::{ServiceError, ServiceResult};

/// Caller identity resolved from a validated token subject
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: i32,
    pub role: UserRole,
}

/// True iff exactly one active row matches email + password.
///
/// Passwords are compared as stored. That matches the data this service
/// inherits; see DESIGN.md before relying on it anywhere new.
pub async fn sign_in(pool: &PgPool, email: &str, senha: &str) -> ServiceResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM usuarios WHERE email = $1 AND senha = $2 AND ativo = true",
    )
    .bind(email)
    .bind(senha)
    .fetch_one(pool)
    .await?;

    Ok(count == 1)
}

/// Insert a new user row. Duplicate email surfaces as Conflict; the
/// registration endpoint downgrades that to its 400 contract.
pub async fn register(pool: &PgPool, user: &NewUser) -> ServiceResult<()> {
    let result = sqlx::query(
        "INSERT INTO usuarios (nome, email, senha, tipo_usuario, descricao, documento, cep, ativo)
         VALUES ($1, $2, $3, $4, $5, $6, $7, true)",
    )
    .bind(&user.nome)
    .bind(&user.email)
    .bind(&user.senha)
    .bind(user.role.as_str())
    .bind(&user.descricao)
    .bind(&user.documento)
    .bind(&user.cep)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
            ServiceError::Conflict("Email already registered".to_string()),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Resolve id + role for an active user by email
pub async fn resolve_identity(pool: &PgPool, email: &str) -> ServiceResult<CallerIdentity> {
    let row: Option<(i32, String)> = sqlx::query_as(
        "SELECT id_usuario, tipo_usuario FROM usuarios WHERE email = $1 AND ativo = true",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let (user_id, tipo) = row.ok_or_else(|| {
        ServiceError::NotFound("User not found or inactive".to_string())
    })?;

    let role = tipo
        .parse::<UserRole>()
        .map_err(ServiceError::InvalidInput)?;

    Ok(CallerIdentity { user_id, role })
}

/// Soft-deactivate a user. The target must exist, still be active, and carry
/// the role of the surface the request came in on (the donor endpoint only
/// deactivates donors, the receiver endpoint only receivers).
pub async fn deactivate(
    pool: &PgPool,
    target_id: i32,
    required_role: UserRole,
) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let row: Option<(bool, String)> =
        sqlx::query_as("SELECT ativo, tipo_usuario FROM usuarios WHERE id_usuario = $1")
            .bind(target_id)
            .fetch_optional(&mut *tx)
            .await?;

    let (ativo, tipo) = row.ok_or_else(|| {
        ServiceError::NotFound("User not found or already inactive".to_string())
    })?;

    if !ativo {
        return Err(ServiceError::NotFound(
            "User not found or already inactive".to_string(),
        ));
    }

    if tipo != required_role.as_str() {
        return Err(ServiceError::Forbidden(format!(
            "Unauthorized: can only deactivate {} accounts here",
            required_role.as_str()
        )));
    }

    sqlx::query("UPDATE usuarios SET ativo = false WHERE id_usuario = $1")
        .bind(target_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

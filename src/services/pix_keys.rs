use sqlx::PgPool;

use crate::database::models::NewPixKey;
use crate::services::{ServiceError, ServiceResult};

/// True when the user has no key on file, i.e. is free to add one.
///
/// Both `add` and `delete` branch on this boolean with opposite signs:
/// add requires it true, delete requires it false. Keep the direction
/// straight when touching either.
pub async fn validate_no_existing_key(pool: &PgPool, user_id: i32) -> ServiceResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM pix_chaves WHERE id_usuario = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(count == 0)
}

/// Register a receiver's Pix key; at most one per user
pub async fn add(pool: &PgPool, key: &NewPixKey) -> ServiceResult<()> {
    if !validate_no_existing_key(pool, key.id_usuario).await? {
        return Err(ServiceError::Conflict("PIX key already exists".to_string()));
    }

    sqlx::query(
        "INSERT INTO pix_chaves (id_usuario, chave, tipo_chave, data_cadastro)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(key.id_usuario)
    .bind(&key.chave)
    .bind(&key.tipo_chave)
    .bind(key.data_cadastro)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a receiver's Pix key
pub async fn delete(pool: &PgPool, user_id: i32, key_id: i32) -> ServiceResult<()> {
    if validate_no_existing_key(pool, user_id).await? {
        return Err(ServiceError::NotFound("PIX key not found".to_string()));
    }

    sqlx::query("DELETE FROM pix_chaves WHERE id_usuario = $1 AND id_chave = $2")
        .bind(user_id)
        .bind(key_id)
        .execute(pool)
        .await?;

    Ok(())
}

use chrono::Utc;
use sqlx::PgPool;

use crate::database::models::FavoriteCause;
use crate::services::{ServiceError, ServiceResult};

/// Favorite a cause for a donor. The duplicate check and the insert share a
/// transaction; dropping it on the error path rolls back automatically.
pub async fn add(pool: &PgPool, user_id: i32, cause_id: i32) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT id_favorito FROM favoritos WHERE id_usuario = $1 AND id_causa = $2")
            .bind(user_id)
            .bind(cause_id)
            .fetch_optional(&mut *tx)
            .await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict("Cause already favorited".to_string()));
    }

    sqlx::query("INSERT INTO favoritos (id_usuario, id_causa, data_cadastro) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(cause_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Remove a favorite by id
pub async fn remove(pool: &PgPool, favorite_id: i32) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT id_favorito FROM favoritos WHERE id_favorito = $1")
            .bind(favorite_id)
            .fetch_optional(&mut *tx)
            .await?;

    if existing.is_none() {
        return Err(ServiceError::NotFound("Favorite not found".to_string()));
    }

    sqlx::query("DELETE FROM favoritos WHERE id_favorito = $1")
        .bind(favorite_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Causes a donor has favorited. Only causes with a registered postal code
/// are listed.
pub async fn list(pool: &PgPool, user_id: i32) -> ServiceResult<Vec<FavoriteCause>> {
    let rows = sqlx::query_as(
        "SELECT f.id_causa,
                u.nome,
                u.descricao,
                u.cep,
                u.documento
            FROM favoritos f
                INNER JOIN usuarios u ON f.id_causa = u.id_usuario
            WHERE f.id_usuario = $1
            AND u.cep IS NOT NULL",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

use chrono::Utc;
use sqlx::PgPool;

use crate::database::models::{NewProduct, Product, ProductUpdate};
use crate::services::{ServiceError, ServiceResult};

/// Create a product for a cause and return its id
pub async fn create(pool: &PgPool, product: &NewProduct) -> ServiceResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO produtos (id_causa, nome, descricao, valor, data_cadastro)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id_produto",
    )
    .bind(product.id_causa)
    .bind(&product.nome)
    .bind(&product.descricao)
    .bind(product.valor)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Update a product. The WHERE clause pins both the product id and the
/// owning cause id; zero affected rows means the pair did not match.
pub async fn update(pool: &PgPool, product: &ProductUpdate) -> ServiceResult<()> {
    let result = sqlx::query(
        "UPDATE produtos
         SET nome = $1, descricao = $2, valor = $3
         WHERE id_produto = $4 AND id_causa = $5",
    )
    .bind(&product.nome)
    .bind(&product.descricao)
    .bind(product.valor)
    .bind(product.id_produto)
    .bind(product.id_causa)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::NotFound(
            "Product not found for this cause".to_string(),
        ));
    }

    Ok(())
}

/// Delete a product owned by the given cause
pub async fn delete(pool: &PgPool, cause_id: i32, product_id: i32) -> ServiceResult<()> {
    let result = sqlx::query("DELETE FROM produtos WHERE id_produto = $1 AND id_causa = $2")
        .bind(product_id)
        .bind(cause_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::NotFound(
            "Product not found for this cause".to_string(),
        ));
    }

    Ok(())
}

/// List products, optionally filtered by owning cause
pub async fn list(pool: &PgPool, cause_id: Option<i32>) -> ServiceResult<Vec<Product>> {
    let rows = match cause_id {
        Some(id) => {
            sqlx::query_as(
                "SELECT id_produto, id_causa, nome, descricao, valor, data_cadastro
                 FROM produtos WHERE id_causa = $1",
            )
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT id_produto, id_causa, nome, descricao, valor, data_cadastro
                 FROM produtos",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}

//! Receiver-facing surface: account deactivation, received donations, Pix
//! keys, and product management for the caller's own cause.

use axum::extract::Path;
use axum::response::Json;
use axum::Extension;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::policy;
use crate::database::manager::DatabaseManager;
use crate::database::models::{
    DonationRecord, NewPixKey, NewProduct, Product, ProductUpdate, UserRole,
};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{donations, identity, pix_keys, products};

#[derive(Debug, Deserialize)]
pub struct DeactivateRequest {
    pub id_usuario: i32,
}

/// POST /receiver/deactivate - deactivate a receiver account (self, or any
/// receiver when the caller is an admin)
pub async fn deactivate(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<DeactivateRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::DEACTIVATE_RECEIVER, Some(payload.id_usuario))?;

    let pool = DatabaseManager::pool().await?;
    identity::deactivate(&pool, payload.id_usuario, UserRole::Receiver).await?;

    Ok(Json(json!({
        "message": format!("Receiver with ID {} deactivated successfully", payload.id_usuario)
    })))
}

/// GET /receiver/list_donations_received - donations made to the caller
pub async fn list_donations_received(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<DonationRecord>>, ApiError> {
    policy::authorize(&user, &policy::LIST_DONATIONS_RECEIVED, None)?;

    let pool = DatabaseManager::pool().await?;
    let records = donations::list_by_receiver(&pool, user.user_id).await?;

    Ok(Json(records))
}

#[derive(Debug, Deserialize)]
pub struct AddPixKeyRequest {
    pub chave: String,
    pub tipo_chave: String,
    pub data_cadastro: Option<DateTime<Utc>>,
}

/// POST /receiver/add_pix_key - register the caller's Pix key; at most one
/// key per receiver
pub async fn add_pix_key(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddPixKeyRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PIX_KEYS, None)?;

    let key = NewPixKey {
        id_usuario: user.user_id,
        chave: payload.chave,
        tipo_chave: payload.tipo_chave,
        data_cadastro: payload.data_cadastro.unwrap_or_else(Utc::now),
    };

    let pool = DatabaseManager::pool().await?;
    pix_keys::add(&pool, &key).await?;

    Ok(Json(json!({ "message": "Pix key added successfully" })))
}

#[derive(Debug, Deserialize)]
pub struct DeletePixKeyRequest {
    pub id_chave: i32,
}

/// DELETE /receiver/delete_pix_key - remove the caller's Pix key
pub async fn delete_pix_key(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<DeletePixKeyRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PIX_KEYS, None)?;

    let pool = DatabaseManager::pool().await?;
    pix_keys::delete(&pool, user.user_id, payload.id_chave).await?;

    Ok(Json(json!({ "message": "Pix key deleted successfully" })))
}

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub nome: String,
    pub descricao: Option<String>,
    pub valor: Decimal,
}

/// POST /receiver/add_product - list a product for the caller's cause
pub async fn add_product(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddProductRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PRODUCTS, None)?;

    let product = NewProduct {
        id_causa: user.user_id,
        nome: payload.nome,
        descricao: payload.descricao,
        valor: payload.valor,
    };

    let pool = DatabaseManager::pool().await?;
    let id = products::create(&pool, &product).await?;

    Ok(Json(json!({
        "message": "Product created successfully",
        "id_produto": id
    })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id_produto: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub valor: Decimal,
}

/// PUT /receiver/update_product - update one of the caller's products.
/// Targeting another cause's product matches zero rows and comes back 404.
pub async fn update_product(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PRODUCTS, None)?;

    let update = ProductUpdate {
        id_produto: payload.id_produto,
        id_causa: user.user_id,
        nome: payload.nome,
        descricao: payload.descricao,
        valor: payload.valor,
    };

    let pool = DatabaseManager::pool().await?;
    products::update(&pool, &update).await?;

    Ok(Json(json!({ "message": "Product updated successfully" })))
}

/// DELETE /receiver/delete_product/:id - delete one of the caller's products
pub async fn delete_product(
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PRODUCTS, None)?;

    let pool = DatabaseManager::pool().await?;
    products::delete(&pool, user.user_id, product_id).await?;

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

/// GET /receiver/get_products - the caller's own product listing
pub async fn get_products(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Product>>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_PRODUCTS, None)?;

    let pool = DatabaseManager::pool().await?;
    let items = products::list(&pool, Some(user.user_id)).await?;

    Ok(Json(items))
}

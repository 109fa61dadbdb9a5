//! Donor-facing surface. Every handler takes the resolved caller identity,
//! evaluates its policy constant, and delegates to a domain service.

use axum::extract::Path;
use axum::response::Json;
use axum::Extension;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::policy;
use crate::database::manager::DatabaseManager;
use crate::database::models::{DonationRecord, FavoriteCause, NewDonation, Product, UserRole};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{donations, favorites, identity, products, receivers};
use crate::services::receivers::ReceiverSort;

/// GET /donator/list_receivers/:sort - browse active causes
pub async fn list_receivers(
    Extension(user): Extension<AuthUser>,
    Path(sort): Path<String>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::LIST_RECEIVERS, None)?;

    let pool = DatabaseManager::pool().await?;
    let causes = receivers::list(&pool, ReceiverSort::from_param(&sort)).await?;

    Ok(Json(json!({ "receivers": causes })))
}

#[derive(Debug, Deserialize)]
pub struct DeactivateRequest {
    pub id_usuario: i32,
}

/// POST /donator/deactivate - deactivate a donor account (self, or any
/// donor when the caller is an admin)
pub async fn deactivate(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<DeactivateRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::DEACTIVATE_DONATOR, Some(payload.id_usuario))?;

    let pool = DatabaseManager::pool().await?;
    identity::deactivate(&pool, payload.id_usuario, UserRole::Donor).await?;

    Ok(Json(json!({
        "message": format!("Donator with ID {} deactivated successfully", payload.id_usuario)
    })))
}

/// POST /donator/favorite/:cause_id - favorite an active cause
pub async fn favorite_cause(
    Extension(user): Extension<AuthUser>,
    Path(cause_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_FAVORITES, None)?;

    let pool = DatabaseManager::pool().await?;
    if !receivers::validate_cause_id(&pool, cause_id).await? {
        return Err(ApiError::not_found("Cause not found or not active"));
    }

    favorites::add(&pool, user.user_id, cause_id).await?;

    Ok(Json(json!({
        "message": format!("Cause with ID {} favorited successfully", cause_id)
    })))
}

/// DELETE /donator/favorite/:fav_id - remove a favorite
pub async fn remove_favorite(
    Extension(user): Extension<AuthUser>,
    Path(fav_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_FAVORITES, None)?;

    let pool = DatabaseManager::pool().await?;
    favorites::remove(&pool, fav_id).await?;

    Ok(Json(json!({
        "message": format!("Favorite with ID {} removed successfully", fav_id)
    })))
}

/// GET /donator/favorites - list the caller's favorited causes
pub async fn list_favorites(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<FavoriteCause>>, ApiError> {
    policy::authorize(&user, &policy::MANAGE_FAVORITES, None)?;

    let pool = DatabaseManager::pool().await?;
    let causes = favorites::list(&pool, user.user_id).await?;

    Ok(Json(causes))
}

#[derive(Debug, Deserialize)]
pub struct AddDonationRequest {
    pub id_causa: i32,
    pub valor: Decimal,
    pub mensagem: Option<String>,
    pub data_doacao: Option<DateTime<Utc>>,
}

/// POST /donator/add_donation - record a donation. The donor id is always
/// the authenticated caller; anything the body says about it is ignored.
pub async fn add_donation(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddDonationRequest>,
) -> Result<Json<Value>, ApiError> {
    policy::authorize(&user, &policy::ADD_DONATION, None)?;

    if payload.valor <= Decimal::ZERO {
        return Err(ApiError::bad_request("Donation amount must be positive"));
    }

    let donation = NewDonation {
        id_doador: user.user_id,
        id_causa: payload.id_causa,
        valor: payload.valor,
        mensagem: payload.mensagem,
        data_doacao: payload.data_doacao.unwrap_or_else(Utc::now),
    };

    let pool = DatabaseManager::pool().await?;
    donations::add(&pool, &donation).await?;

    Ok(Json(json!({ "message": "Donation recorded successfully" })))
}

/// GET /donator/list_donations_made - the caller's donation history
pub async fn list_donations_made(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<DonationRecord>>, ApiError> {
    policy::authorize(&user, &policy::LIST_DONATIONS_MADE, None)?;

    let pool = DatabaseManager::pool().await?;
    let records = donations::list_by_donor(&pool, user.user_id).await?;

    Ok(Json(records))
}

/// GET /donator/get_cause_products/:cause_id - products a cause lists
pub async fn get_cause_products(
    Extension(user): Extension<AuthUser>,
    Path(cause_id): Path<i32>,
) -> Result<Json<Vec<Product>>, ApiError> {
    policy::authorize(&user, &policy::BROWSE_CAUSE_PRODUCTS, None)?;

    let pool = DatabaseManager::pool().await?;
    let items = products::list(&pool, Some(cause_id)).await?;

    Ok(Json(items))
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product a cause lists for donation
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id_produto: i32,
    pub id_causa: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub valor: Decimal,
    pub data_cadastro: DateTime<Utc>,
}

/// Insert payload for a product; the cause id is the authenticated receiver
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id_causa: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub valor: Decimal,
}

/// Update payload; the WHERE clause pins both the product and the owning
/// cause, so a receiver cannot touch another cause's product.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id_produto: i32,
    pub id_causa: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub valor: Decimal,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cause profile as returned by the favorites listing. Only causes with a
/// registered postal code appear here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteCause {
    pub id_causa: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub cep: Option<String>,
    pub documento: Option<String>,
}

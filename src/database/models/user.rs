use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// User role as stored in `usuarios.tipo_usuario`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "doador")]
    Donor,
    #[serde(rename = "receptor")]
    Receiver,
    #[serde(rename = "admin")]
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => "doador",
            UserRole::Receiver => "receptor",
            UserRole::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doador" => Ok(UserRole::Donor),
            "receptor" => Ok(UserRole::Receiver),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown user role: {}", other)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated registration payload handed to the identity service.
/// Profile fields are already nulled out for non-receiver roles.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub role: UserRole,
    pub descricao: Option<String>,
    pub documento: Option<String>,
    pub cep: Option<String>,
}

/// Public profile of an active cause, as returned by the receiver listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReceiverProfile {
    pub id_usuario: i32,
    pub nome: String,
    pub email: String,
    pub documento: Option<String>,
    pub cep: Option<String>,
    pub descricao: Option<String>,
    pub data_cadastro: DateTime<Utc>,
}

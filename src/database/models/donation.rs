use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One donation joined with both parties' display names, as returned by the
/// donor and receiver listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonationRecord {
    pub id_doacao: i32,
    pub doador: String,
    pub receptor: String,
    pub valor: Decimal,
    pub mensagem: Option<String>,
    pub data_doacao: DateTime<Utc>,
}

/// Insert payload for a donation. The donor id comes from the authenticated
/// caller, never from the request body.
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub id_doador: i32,
    pub id_causa: i32,
    pub valor: Decimal,
    pub mensagem: Option<String>,
    pub data_doacao: DateTime<Utc>,
}

use chrono::{DateTime, Utc};

/// Insert payload for a receiver's Pix key
#[derive(Debug, Clone)]
pub struct NewPixKey {
    pub id_usuario: i32,
    pub chave: String,
    pub tipo_chave: String,
    pub data_cadastro: DateTime<Utc>,
}

use sqlx::PgPool;

use crate::database::models::ReceiverProfile;
use crate::services::ServiceResult;

/// Sort order for the receiver listing. Anything outside the four named
/// keys (the empty string included) maps to Unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverSort {
    NameAsc,
    NameDesc,
    CreatedAtAsc,
    CreatedAtDesc,
    Unsorted,
}

impl ReceiverSort {
    pub fn from_param(param: &str) -> Self {
        match param {
            "name_asc" => ReceiverSort::NameAsc,
            "name_desc" => ReceiverSort::NameDesc,
            "created_at_asc" => ReceiverSort::CreatedAtAsc,
            "created_at_desc" => ReceiverSort::CreatedAtDesc,
            _ => ReceiverSort::Unsorted,
        }
    }

    fn order_clause(&self) -> &'static str {
        match self {
            ReceiverSort::NameAsc => " ORDER BY nome ASC",
            ReceiverSort::NameDesc => " ORDER BY nome DESC",
            ReceiverSort::CreatedAtAsc => " ORDER BY data_cadastro ASC",
            ReceiverSort::CreatedAtDesc => " ORDER BY data_cadastro DESC",
            ReceiverSort::Unsorted => "",
        }
    }
}

/// List active causes. The ORDER BY fragment comes from the enum above,
/// never from the raw request parameter.
pub async fn list(pool: &PgPool, sort: ReceiverSort) -> ServiceResult<Vec<ReceiverProfile>> {
    let query = format!(
        "SELECT id_usuario, nome, email, documento, cep, descricao, data_cadastro
         FROM usuarios
         WHERE ativo = true AND tipo_usuario = 'receptor'{}",
        sort.order_clause()
    );

    let rows = sqlx::query_as(&query).fetch_all(pool).await?;
    Ok(rows)
}

/// True iff the id belongs to an active receiver
pub async fn validate_cause_id(pool: &PgPool, cause_id: i32) -> ServiceResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM usuarios
         WHERE id_usuario = $1 AND ativo = true AND tipo_usuario = 'receptor'",
    )
    .bind(cause_id)
    .fetch_one(pool)
    .await?;

    Ok(count == 1)
}

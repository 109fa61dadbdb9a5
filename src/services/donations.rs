use sqlx::PgPool;

use crate::database::models::{DonationRecord, NewDonation};
use crate::services::ServiceResult;

const LIST_QUERY: &str = "SELECT d.id_doacao,
        u.nome AS doador,
        ub.nome AS receptor,
        d.valor_doacao AS valor,
        d.mensagem,
        d.data_doacao
    FROM doacoes d
        INNER JOIN usuarios u ON u.id_usuario = d.id_doador
        INNER JOIN usuarios ub ON ub.id_usuario = d.id_causa";

/// Record one donation
pub async fn add(pool: &PgPool, donation: &NewDonation) -> ServiceResult<()> {
    sqlx::query(
        "INSERT INTO doacoes (id_doador, id_causa, valor_doacao, mensagem, data_doacao)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(donation.id_doador)
    .bind(donation.id_causa)
    .bind(donation.valor)
    .bind(&donation.mensagem)
    .bind(donation.data_doacao)
    .execute(pool)
    .await?;

    Ok(())
}

/// Donations made by a donor, with both parties' names
pub async fn list_by_donor(pool: &PgPool, user_id: i32) -> ServiceResult<Vec<DonationRecord>> {
    let query = format!("{} WHERE d.id_doador = $1", LIST_QUERY);
    let rows = sqlx::query_as(&query).bind(user_id).fetch_all(pool).await?;
    Ok(rows)
}

/// Donations received by a cause, with both parties' names
pub async fn list_by_receiver(pool: &PgPool, user_id: i32) -> ServiceResult<Vec<DonationRecord>> {
    let query = format!("{} WHERE d.id_causa = $1", LIST_QUERY);
    let rows = sqlx::query_as(&query).bind(user_id).fetch_all(pool).await?;
    Ok(rows)
}

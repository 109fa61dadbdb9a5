//! Postal code (CEP) validation against a ViaCEP-compatible lookup service.
//!
//! The contract is deliberately closed: a CEP is valid only when the service
//! answers 200 without an `erro` marker. Network failure, a non-2xx status,
//! an unparseable body and a not-found answer all count as invalid.

use std::time::Duration;

use crate::config;

/// Strip everything but digits and require exactly 8 of them
pub fn normalize_cep(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 8 {
        Some(digits)
    } else {
        None
    }
}

/// Validate a postal code against the configured lookup service
pub async fn validate_cep(raw: &str) -> bool {
    let Some(cep) = normalize_cep(raw) else {
        return false;
    };

    let cfg = &config::config().address;
    let url = format!(
        "{}/ws/{}/json/",
        cfg.cep_lookup_base_url.trim_end_matches('/'),
        cep
    );

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.cep_lookup_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build CEP lookup client: {}", e);
            return false;
        }
    };

    let response = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("CEP lookup failed for {}: {}", cep, e);
            return false;
        }
    };

    if !response.status().is_success() {
        tracing::warn!("CEP lookup for {} returned {}", cep, response.status());
        return false;
    }

    match response.json::<serde_json::Value>().await {
        // ViaCEP answers 200 with {"erro": true} for unknown codes
        Ok(body) => body.get("erro").is_none(),
        Err(e) => {
            tracing::warn!("CEP lookup body unreadable for {}: {}", cep, e);
            false
        }
    }
}

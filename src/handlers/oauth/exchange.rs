use crate::models::oauth::{ExchangeBody, ExchangeOutcome};
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

/// Trade an authorization code for tokens. One attempt, no retries; every
/// failure mode is folded into the returned outcome so the caller can
/// render it instead of propagating it.
pub async fn exchange_code(
    client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: Option<&str>,
    redirect_uri: &str,
    code: &str,
) -> ExchangeOutcome {
    debug!("exchanging code against {}", token_url);

    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
    ];
    if let Some(secret) = client_secret {
        form.push(("client_secret", secret));
    }

    let response = match client
        .post(token_url)
        .header(ACCEPT, "application/json")
        .form(&form)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("token exchange failed: {}", e);
            return ExchangeOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to read token response body: {}", e);
            return ExchangeOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    // Providers should answer JSON; keep anything else verbatim.
    let body = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => ExchangeBody::Json(value),
        Err(_) => ExchangeBody::Raw(text),
    };

    ExchangeOutcome::Completed {
        ok: status.is_success(),
        status: status.as_u16(),
        body,
    }
}

use crate::models::AppState;
use crate::models::oauth::{CallbackParams, ExchangeBody, ExchangeOutcome};
use crate::views::{TITLE, escape, page};
use axum::{
    extract::{Query, State},
    http::Uri,
    response::{Html, IntoResponse},
};
use tracing::info;

use super::exchange::exchange_code;

/// What the token-exchange part of the page should say. Decided up front
/// so every combination of query and config is covered exactly once.
enum ExchangeSection {
    NoCode,
    Disabled,
    Attempted(ExchangeOutcome),
}

pub async fn callback_handler(
    Query(params): Query<CallbackParams>,
    uri: Uri,
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!("/callback params: {:?}", params);

    let config = &state.config;

    let section = match (
        params.get("code"),
        config.token_url.as_deref(),
        config.client_id.as_deref(),
    ) {
        (None, _, _) => ExchangeSection::NoCode,
        (Some(code), Some(token_url), Some(client_id)) => ExchangeSection::Attempted(
            exchange_code(
                &state.http,
                token_url,
                client_id,
                config.client_secret.as_deref(),
                &config.redirect_uri,
                code,
            )
            .await,
        ),
        (Some(_), _, _) => ExchangeSection::Disabled,
    };

    let params_json =
        serde_json::to_string_pretty(&params).unwrap_or_else(|_| "{}".to_string());

    let body = format!(
        r#"
    <div class="container">
      <div class="row g-3">
        <div class="col-lg-10">
          <div class="card shadow-sm">
            <div class="card-body">
              <h5 class="card-title mb-3">Callback Received</h5>
              <p class="text-muted">Below are the query parameters returned by the identity provider.</p>
              <div class="mb-2"><span class="text-muted">Path:</span> <code>{path}</code></div>
              <div class="mb-3"><span class="text-muted">Request URI:</span> <code>{uri}</code></div>
              <label class="form-label">Query Parameters</label>
              <pre class="bg-body-tertiary p-3 border rounded small">{params_json}</pre>
              <hr />
              <h6 class="mb-2">Token Exchange (optional)</h6>
              {section}
              <div class="mt-3 d-flex gap-2">
                <a class="btn btn-outline-secondary" href="/">Home</a>
              </div>
            </div>
          </div>
        </div>
      </div>
    </div>"#,
        path = escape(uri.path()),
        uri = escape(&uri.to_string()),
        params_json = escape(&params_json),
        section = render_section(&section),
    );

    Html(page(TITLE, &body))
}

fn render_section(section: &ExchangeSection) -> String {
    match section {
        ExchangeSection::NoCode => {
            r#"<div class="alert alert-info">No <code>code</code> found in query; skipping token exchange.</div>"#
                .to_string()
        }
        ExchangeSection::Disabled => {
            r#"<div class="alert alert-warning">Token exchange disabled. Set <code>TOKEN_URL</code> and <code>CLIENT_ID</code> (and optionally <code>CLIENT_SECRET</code>, <code>REDIRECT_URI</code>).</div>"#
                .to_string()
        }
        ExchangeSection::Attempted(ExchangeOutcome::Failed { message }) => format!(
            r#"<div class="alert alert-danger"><strong>Exchange Error:</strong> {}</div>"#,
            escape(message)
        ),
        ExchangeSection::Attempted(ExchangeOutcome::Completed { ok, status, body }) => {
            let payload = match body {
                ExchangeBody::Json(value) => serde_json::to_string_pretty(value)
                    .unwrap_or_else(|_| value.to_string()),
                ExchangeBody::Raw(text) => text.clone(),
            };
            format!(
                r#"
              <div class="mb-2"><span class="text-muted">Exchange:</span> <code>Status: {status}, OK: {ok}</code></div>
              <label class="form-label">Token Response</label>
              <pre class="bg-body-tertiary p-3 border rounded small">{payload}</pre>"#,
                status = status,
                ok = ok,
                payload = escape(&payload),
            )
        }
    }
}

use crate::models::AppState;
use crate::views::{TITLE, escape, page};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use serde_json::json;

/// Home page, also served for every unmatched path. Unknown paths are
/// intentionally not 404s: a mistyped redirect URI should still land the
/// tester on a page explaining how to configure the tool.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;

    // Non-secret view of the current config. TOKEN_URL is only reported
    // as set/unset and the client secret never appears.
    let shown = json!({
        "TOKEN_URL": if config.token_url.is_some() { "[set]" } else { "" },
        "CLIENT_ID": config.client_id.clone().unwrap_or_default(),
        "REDIRECT_URI": config.redirect_uri,
    });
    let shown = serde_json::to_string_pretty(&shown).unwrap_or_else(|_| shown.to_string());

    let body = format!(
        r#"
    <div class="container">
      <div class="row g-3">
        <div class="col-lg-8">
          <div class="card shadow-sm">
            <div class="card-body">
              <h5 class="card-title">Welcome</h5>
              <p>Use this service as your <code>redirect_uri</code> for your identity provider. It will simply display whatever parameters were returned to <code>/callback</code>.</p>
              <ul>
                <li>Configure the valid redirect URIs of your client to include: <code>{redirect_uri}</code></li>
                <li>Point your auth request's <code>redirect_uri</code> to the same value.</li>
              </ul>
              <div class="mt-2"><span class="text-muted">Health:</span> <code>/healthz</code></div>
              <div class="mt-2"><span class="text-muted">Callback endpoint:</span> <code>/callback</code></div>
              <hr />
              <h6>Optional Token Exchange</h6>
              <p class="mb-1">Set the following env vars to enable exchanging <code>code</code> for tokens:</p>
              <ul class="mb-2">
                <li><code>TOKEN_URL</code> (or <code>KEYCLOAK_TOKEN_URL</code>)</li>
                <li><code>CLIENT_ID</code></li>
                <li><code>CLIENT_SECRET</code> (if required by your client)</li>
                <li><code>REDIRECT_URI</code> (defaults to <code>http://localhost:{port}/callback</code>)</li>
              </ul>
              <div class="mb-2 small text-muted">Current config (non-secret fields only):</div>
              <pre class="bg-body-tertiary p-3 border rounded small">{shown}</pre>
            </div>
          </div>
        </div>
      </div>
    </div>"#,
        redirect_uri = escape(&config.redirect_uri),
        port = config.port,
        shown = escape(&shown),
    );

    Html(page(TITLE, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: AppConfig {
                port: 9090,
                token_url: Some("https://idp.example/token".to_string()),
                client_id: Some("explorer".to_string()),
                client_secret: Some("s3cret".to_string()),
                redirect_uri: "http://localhost:9090/callback".to_string(),
            },
            http: reqwest::Client::new(),
        }
    }

    async fn render(state: AppState) -> (StatusCode, String) {
        let app = Router::new()
            .route("/", get(home_handler))
            .with_state(state);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_shows_redirect_uri_and_endpoints() {
        let (status, html) = render(test_state()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("http://localhost:9090/callback"));
        assert!(html.contains("/healthz"));
        assert!(html.contains("/callback"));
    }

    #[tokio::test]
    async fn home_masks_secrets() {
        let (_, html) = render(test_state()).await;

        assert!(html.contains("[set]"));
        assert!(!html.contains("https://idp.example/token"));
        assert!(!html.contains("s3cret"));
        assert!(html.contains("explorer"));
    }
}

use serde_json::Value;
use std::collections::BTreeMap;

/// Query parameters echoed back by the identity provider (code, state,
/// error, error_description, iss, ...). A BTreeMap keeps the rendered
/// order stable; duplicate keys collapse to the last value.
pub type CallbackParams = BTreeMap<String, String>;

/// Body of a completed token-exchange response. Providers are expected to
/// answer JSON, but anything unparseable is kept verbatim for display.
#[derive(Debug)]
pub enum ExchangeBody {
    Json(Value),
    Raw(String),
}

/// Outcome of a single token-exchange attempt. One attempt, no retries;
/// every variant is rendered inline on the callback page.
#[derive(Debug)]
pub enum ExchangeOutcome {
    /// The token endpoint answered. `ok` is whether the status was 2xx.
    Completed {
        ok: bool,
        status: u16,
        body: ExchangeBody,
    },
    /// The request never produced a response (connect, TLS, read error).
    Failed { message: String },
}

//! Blocking HTTP client for the nagios-api control interface.
//!
//! Uses blocking `ureq`, so there is no async runtime on the call path.
//! Every response body is decoded as the `{success, content}` envelope;
//! the HTTP status code is ignored whenever the body decodes, because the
//! envelope is the protocol's source of truth.

use std::time::Duration;

use serde_json::Value;

use crate::inventory::Inventory;
use crate::protocol::{content_text, ApiResponse, Params};

/// TCP connection timeout for API requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read timeout for API requests.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Verbs the server treats as writes even when no parameters are sent.
const WRITE_VERBS: &[&str] = &["cancel_downtime"];

// ── Error types ───────────────────────────────────────────────────

/// Client failures, with the exact diagnostic line as `Display`. Causes
/// that would clutter the one-line output go to the debug log instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed connecting to nagios-api server")]
    Unreachable,

    #[error("Failed parsing server response")]
    Decode,

    #[error("Failed: {0}")]
    Api(String),

    #[error("Invalid parameter: {0} (expected key=value)")]
    Param(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

// ── Client ────────────────────────────────────────────────────────

pub struct ApiClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Fetch the full host/service inventory. Called exactly once per
    /// run, before any subcommand logic.
    pub fn objects(&self) -> Result<Inventory> {
        let resp = self.call("objects", &[])?;
        if !resp.success {
            return Err(ClientError::Api(content_text(&resp.content)));
        }
        serde_json::from_value(resp.content).map_err(|e| {
            tracing::debug!(error = %e, "objects content has unexpected shape");
            ClientError::Decode
        })
    }

    /// Invoke an arbitrary verb from raw positional arguments.
    ///
    /// A purely numeric first argument becomes the object id in the URL
    /// path; every remaining argument must be `key=value`. The envelope
    /// is returned verbatim, the caller checks `success`.
    pub fn call(&self, verb: &str, args: &[String]) -> Result<ApiResponse> {
        let (id, params) = classify(args)?;
        self.send(verb, id, params)
    }

    /// Invoke a verb with parameters a handler assembled itself.
    pub fn request(&self, verb: &str, params: Params) -> Result<ApiResponse> {
        self.send(verb, None, params)
    }

    // ── Private helpers ───────────────────────────────────────────

    fn url(&self, verb: &str, id: Option<&str>) -> String {
        let mut url = format!("{}/{verb}/", self.endpoint);
        if let Some(id) = id {
            url.push_str(id);
        }
        url
    }

    fn send(&self, verb: &str, id: Option<&str>, params: Params) -> Result<ApiResponse> {
        let url = self.url(verb, id);
        let post = wants_post(verb, &params);
        tracing::debug!(url = %url, post, params = params.len(), "nagios-api request");

        let result = if post {
            self.agent.post(&url).send_json(Value::Object(params))
        } else {
            self.agent.get(&url).call()
        };
        let resp = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                tracing::debug!(status, url = %url, "error status, decoding body anyway");
                resp
            }
            Err(ureq::Error::Transport(t)) => {
                tracing::debug!(error = %t, url = %url, "transport failure");
                return Err(ClientError::Unreachable);
            }
        };
        decode(resp)
    }
}

// ── Request shape helpers ─────────────────────────────────────────

/// Split raw arguments into the optional leading object id and the
/// `key=value` parameter mapping.
fn classify(args: &[String]) -> Result<(Option<&str>, Params)> {
    let mut args = args;
    let mut id = None;
    if let Some(first) = args.first() {
        if is_object_id(first) {
            id = Some(first.as_str());
            args = &args[1..];
        }
    }

    let mut params = Params::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(ClientError::Param(arg.clone()));
        };
        params.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok((id, params))
}

fn is_object_id(arg: &str) -> bool {
    !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit())
}

fn wants_post(verb: &str, params: &Params) -> bool {
    !params.is_empty() || WRITE_VERBS.contains(&verb)
}

fn decode(resp: ureq::Response) -> Result<ApiResponse> {
    resp.into_json().map_err(|e| {
        tracing::debug!(error = %e, "response body is not a valid envelope");
        ClientError::Decode
    })
}

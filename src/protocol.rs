//! Wire types for the nagios-api response envelope.

use serde::Deserialize;

/// Parameter mapping sent as the JSON body of write calls. Values are
/// strings when they come from the command line and typed JSON when a
/// handler computes them (duration, services_too).
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Every nagios-api response is `{success, content}`. `content` is a
/// plain string on failure and an arbitrary JSON value on success.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Render response content for display: strings as-is, anything else
/// JSON-serialized with the server's key order intact.
pub fn content_text(content: &serde_json::Value) -> String {
    match content.as_str() {
        Some(s) => s.to_string(),
        None => content.to_string(),
    }
}

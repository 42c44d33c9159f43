use serde::{Deserialize, Serialize};

/// Uniform JSON envelope for status and error payloads.
/// Successful reads return the resource JSON directly; this shape carries
/// everything else (errors, delete confirmation, health).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub message: String,
    #[serde(default)]
    pub error: String,
}

impl ApiResponse {
    /// Success/status envelope with no error detail.
    pub fn message(msg: impl Into<String>) -> Self {
        Self { message: msg.into(), error: String::new() }
    }

    pub fn error(msg: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { message: msg.into(), error: detail.into() }
    }
}

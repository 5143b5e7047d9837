use serde::{Deserialize, Serialize};

/// The JSON envelope wrapped around every API response.
///
/// Successful responses carry `data`; error responses only carry `data`
/// when there is something structured to report (e.g. validation failures).
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn error(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            data,
            message: message.into(),
        }
    }
}

use crate::core::LedgerError;
use serde::Serialize;
use serde_json::Value;

/// Uniform response shape of the by-name dispatch surface.
///
/// Failures are reported through the `success` flag and `error` message,
/// never through panics. Read operations that find nothing still succeed
/// with a `null` value payload.
#[derive(Debug, Serialize)]
pub struct CallResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            value: None,
            error: None,
        }
    }

    pub fn ok_with(value: Value) -> Self {
        Self {
            success: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn err(err: &LedgerError) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Value payload, treating an absent payload as JSON `null`.
    pub fn value(&self) -> &Value {
        self.value.as_ref().unwrap_or(&Value::Null)
    }
}

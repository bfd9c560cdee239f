use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Uniform procedure result: `{ success, data, error? }`.
///
/// Failures never escape a procedure as errors; they arrive here with
/// `success: false`, an empty `data` list and the error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ProcedureResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failure(error: &CoreError) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl<T> From<Result<Vec<T>, CoreError>> for ProcedureResponse<T> {
    fn from(result: Result<Vec<T>, CoreError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(&e),
        }
    }
}

//! Error types for the node and its host transport.

use serde_json::{json, Value};

use jadlog_tracking::TrackingError;

/// Error codes reported to the host on the stdio transport.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const TRACKING_ERROR: i32 = -32850;
}

/// All errors that can occur in the node.
#[derive(thiserror::Error, Debug)]
pub enum NodeError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Tracking error: {0}")]
    Tracking(#[from] TrackingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NodeError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        match self {
            NodeError::ParseError(_) | NodeError::Json(_) => PARSE_ERROR,
            NodeError::InvalidParams(_) => INVALID_PARAMS,
            NodeError::Tracking(_) => TRACKING_ERROR,
            NodeError::Io(_) => INTERNAL_ERROR,
        }
    }

    /// The `{"error": {...}}` object written back to the host.
    pub fn to_error_object(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        })
    }
}

pub type NodeResult<T> = Result<T, NodeError>;

use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::item::ItemError;
use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct StructuredError {
    pub logs: String,
    pub messages: Vec<ErrorMessage>,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: &str, message: String) -> Self {
        Self {
            logs: get_log_file_path().to_string(),
            messages: vec![ErrorMessage {
                message,
                field: None,
                tip: None,
                code: code.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        if let Some(msg) = self.messages.first_mut() {
            msg.tip = Some(tip.to_string());
        }
        self
    }

    /// Build from a domain error: one message per field violation, or a single
    /// message carrying the error text.
    #[must_use]
    pub fn from_error<E: ToStructuredError + Display>(err: &E) -> Self {
        let (code, tip) = err.error_code_and_tip();
        let violations = err.field_violations();
        if violations.is_empty() {
            let se = Self::new(code, err.to_string());
            return match tip {
                Some(tip) => se.with_tip(tip),
                None => se,
            };
        }
        Self {
            logs: get_log_file_path().to_string(),
            messages: violations
                .iter()
                .map(|v| ErrorMessage {
                    message: v.reason.clone(),
                    field: Some(v.field.clone()),
                    tip: tip.map(str::to_string),
                    code: code.to_string(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            // Fallback: produce a minimal valid JSON manually
            r#"{"logs":"","messages":[{"message":"serialization error","code":"INTERNAL_ERROR"}]}"#.to_string()
        })
    }
}

/// An error response: HTTP status plus structured JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: StructuredError,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, body: StructuredError) -> Self {
        Self { status, body }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            error!(error = %err, "Internal error");
            let (code, _) = err.error_code_and_tip();
            return Self::new(status, StructuredError::new(code, "Internal error".to_string()));
        }
        Self::new(status, StructuredError::from_error(&err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;

pub mod macros;
pub mod middleware_handling;

use async_graphql::{ErrorExtensions, FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ConfigError(anyhow::Error),
    ServerError(anyhow::Error),
    // Outbound request could not be sent or completed
    NetworkError(String),
    // Remote answered with a non-success status
    UpstreamError { status: u16, message: String },
    // Remote body could not be decoded into the expected shape
    DecodeError(String),
}

impl AppError {
    pub fn upstream(status: u16, url: &str) -> Self {
        Self::UpstreamError {
            status,
            message: format!("Request to '{}' returned HTTP {}", url, status),
        }
    }

    /// Short machine readable code shared by HTTP and GraphQL error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ServerError(_) => "SERVER_ERROR",
            Self::NetworkError(_) => "NETWORK_ERROR",
            Self::UpstreamError { .. } => "UPSTREAM_ERROR",
            Self::DecodeError(_) => "DECODE_ERROR",
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::ServerError(error)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(e) => write!(f, "Configuration error: {}", e),
            Self::ServerError(e) => write!(f, "Server error: {}", e),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::UpstreamError { message, .. } => write!(f, "Upstream error: {}", message),
            Self::DecodeError(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, help_text) = match &self {
            Self::NetworkError(_) | Self::UpstreamError { .. } | Self::DecodeError(_) => (
                StatusCode::BAD_GATEWAY,
                "The Star Wars dataset could not be reached",
                Some("Please try again later."),
            ),
            Self::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "System configuration error",
                None,
            ),
            Self::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            ),
        };
        let error_code = self.code();

        let log_message = format!("[{}] {}: {}", error_code, status, self);
        if status.is_server_error() {
            tracing::error!(error_code = error_code, status_code = %status.as_u16(), %error_message, "{}", log_message);
        } else {
            tracing::warn!(error_code = error_code, status_code = %status.as_u16(), %error_message, "{}", log_message);
        }

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message: error_message.to_string(),
            code: error_code.to_string(),
            details: if status == StatusCode::INTERNAL_SERVER_ERROR {
                None // Don't expose internal error details to clients
            } else {
                Some(self.to_string())
            },
            help: help_text.map(String::from),
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Extension trait to wrap foreign errors with a specific variant
pub trait AppErrorExt<T> {
    fn config_err(self) -> AppResult<T>;
}

impl<T, E> AppErrorExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn config_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::ConfigError(e.into()))
    }
}

impl AppError {
    // Convert AppError to a GraphQL FieldError with appropriate extensions
    pub fn to_field_error(&self) -> FieldError {
        let code = self.code();
        let error = match self {
            Self::UpstreamError { status, .. } => {
                FieldError::new(self.to_string()).extend_with(|_, e| {
                    e.set("code", code);
                    e.set("status", *status);
                })
            }
            Self::NetworkError(_) | Self::DecodeError(_) => {
                FieldError::new(self.to_string()).extend_with(|_, e| {
                    e.set("code", code);
                    e.set("details", "The Star Wars dataset request failed");
                })
            }
            Self::ServerError(_) | Self::ConfigError(_) => {
                // Internal details stay in the logs
                FieldError::new("Internal server error").extend_with(|_, e| {
                    e.set("code", code);
                    e.set("details", "An internal server error occurred");
                })
            }
        };

        match self {
            Self::ServerError(_) | Self::ConfigError(_) => {
                tracing::error!(error = %self, "GraphQL resolver error");
            }
            Self::NetworkError(_) | Self::UpstreamError { .. } | Self::DecodeError(_) => {
                tracing::warn!(error = %self, "Remote dataset error");
            }
        }

        error
    }
}

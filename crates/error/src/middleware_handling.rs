use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info};

use crate::ErrorResponse;

/// Rewrites bare 413 and 5xx responses into the JSON `ErrorResponse` shape.
pub async fn error_handling_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let path = req.uri().path().to_owned();
    let method = req.method().clone();

    let response = next.run(req).await;

    let latency = start.elapsed();
    info!(
        "Request completed: {} {} - Status: {} - Time: {:?}",
        method,
        path,
        response.status(),
        latency
    );

    let status = response.status();

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error!("Request body too large: {}", status);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "The request body exceeds the maximum allowed size".to_string(),
            code: "PAYLOAD_TOO_LARGE".to_string(),
            details: Some("Please reduce the size of your request and try again".to_string()),
            help: None,
        };

        return (StatusCode::PAYLOAD_TOO_LARGE, Json(error_response)).into_response();
    }

    if status.is_server_error() {
        error!("Server error occurred: {}", status);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "An internal server error occurred".to_string(),
            code: "SERVER_ERROR".to_string(),
            details: None,
            help: Some(
                "Please try again later or contact support if the issue persists".to_string(),
            ),
        };

        return (status, Json(error_response)).into_response();
    }

    response
}

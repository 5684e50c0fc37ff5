//! Reverse proxy to the quiz service.
//!
//! Requests are forwarded verbatim: method, path, query, headers and body.
//! There is no retry, circuit breaking or load balancing here.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    response::{IntoResponse, Response},
};

use common::{AppError, AppResult};

use crate::state::GatewayState;

/// Largest request body the proxy will buffer (2 MiB).
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Forward a request to the quiz service.
pub async fn proxy_to_quiz_service(State(state): State<GatewayState>, request: Request) -> Response {
    match forward(&state, request).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn forward(state: &GatewayState, request: Request) -> AppResult<Response> {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let url = format!("{}{}", state.config.quiz_service_url, path_and_query);

    tracing::debug!("Proxying {} {}", request.method(), url);

    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::bad_request(format!("Failed to read request body: {}", e)))?;

    let mut upstream_request = state.client.request(parts.method, &url);
    for (name, value) in parts.headers.iter() {
        // The client sets host and content-length itself
        if name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        upstream_request = upstream_request.header(name, value);
    }

    let upstream = upstream_request
        .body(body_bytes)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Quiz service unreachable: {}", e);
            AppError::service_unavailable("quiz-service")
        })?;

    let status = upstream.status();
    let headers = upstream.headers().clone();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read upstream response: {}", e)))?;

    let mut response = Response::builder().status(status);
    for (name, value) in headers.iter() {
        if name == header::TRANSFER_ENCODING || name == header::CONNECTION {
            continue;
        }
        response = response.header(name, value);
    }

    response
        .body(Body::from(bytes))
        .map_err(|e| AppError::internal(format!("Failed to build response: {}", e)))
}

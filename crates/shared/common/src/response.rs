//! Uniform response envelopes.
//!
//! Every endpoint returns `{success, data, message, errorCode, timestamp}`,
//! list endpoints additionally carry `pageInfo`. The envelope maps its own
//! error code to an HTTP status when rendered; `Created` and `Accepted`
//! wrappers upgrade successful responses for POST and archive flows.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::pagination::PageInfo;

/// Single-resource response envelope (fields omitted when null).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error_code: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error_code: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error_code: Some(error_code.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        Self::error("NOT_FOUND", format!("Resource not found: {}", resource))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::error("INTERNAL_ERROR", message)
    }

    /// Convert a raised error into a failure envelope carrying its code.
    pub fn failure(err: &AppError) -> Self {
        Self::error(err.code(), err.user_message())
    }
}

impl ApiResponse<()> {
    pub fn success_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            error_code: None,
            timestamp: Utc::now(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error_code: None,
            timestamp: Utc::now(),
        }
    }

    pub fn deleted(resource: impl std::fmt::Display) -> Self {
        Self::message(format!("{} deleted successfully", resource))
    }
}

impl ApiResponse<u64> {
    pub fn count(count: u64) -> Self {
        Self::with_message(count, format!("Count: {}", count))
    }

    pub fn deleted_count(count: u64) -> Self {
        Self::with_message(count, format!("{} records deleted successfully", count))
    }
}

impl ApiResponse<bool> {
    pub fn exists(exists: bool) -> Self {
        Self::success(exists)
    }
}

/// List response envelope with optional page metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ListResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
            message: None,
            error_code: None,
            page_info: None,
            timestamp: Utc::now(),
        }
    }

    pub fn paged(data: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        Self {
            success: true,
            data,
            message: None,
            error_code: None,
            page_info: Some(PageInfo::of(page, size, total_elements)),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            message: Some(message.into()),
            error_code: Some(error_code.into()),
            page_info: None,
            timestamp: Utc::now(),
        }
    }

    /// Convert a raised error into a failure envelope carrying its code.
    pub fn failure(err: &AppError) -> Self {
        Self::error(err.code(), err.user_message())
    }
}

/// HTTP status for a failure envelope's error code.
///
/// Unknown codes fall back to 400, matching the response-advice table.
fn status_for_error_code(error_code: Option<&str>) -> StatusCode {
    match error_code {
        Some("NOT_FOUND") => StatusCode::NOT_FOUND,
        Some("UNAUTHORIZED") => StatusCode::UNAUTHORIZED,
        Some("FORBIDDEN") => StatusCode::FORBIDDEN,
        Some("CONFLICT") => StatusCode::CONFLICT,
        Some("INTERNAL_ERROR") | Some("DATABASE_ERROR") => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            status_for_error_code(self.error_code.as_deref())
        };
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            status_for_error_code(self.error_code.as_deref())
        };
        (status, Json(self)).into_response()
    }
}

/// Upgrades a successful response to 201 Created (POST endpoints).
/// Failure statuses pass through untouched.
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        if response.status() == StatusCode::OK {
            *response.status_mut() = StatusCode::CREATED;
        }
        response
    }
}

/// Upgrades a successful response to 202 Accepted (archive flow).
pub struct Accepted<T>(pub T);

impl<T: IntoResponse> IntoResponse for Accepted<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        if response.status() == StatusCode::OK {
            *response.status_mut() = StatusCode::ACCEPTED;
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_null_fields() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
        assert!(json.get("errorCode").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn failure_envelope_carries_error_code() {
        let response: ApiResponse<()> = ApiResponse::failure(&AppError::NotFound);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errorCode"], "NOT_FOUND");
    }

    #[test]
    fn paged_list_carries_page_info() {
        let response = ListResponse::paged(vec![1, 2], 0, 2, 5);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pageInfo"]["page"], 0);
        assert_eq!(json["pageInfo"]["totalElements"], 5);
        assert_eq!(json["pageInfo"]["totalPages"], 3);
    }

    #[test]
    fn error_code_drives_the_http_status() {
        let not_found: ApiResponse<()> = ApiResponse::error("NOT_FOUND", "missing");
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conflict: ApiResponse<()> = ApiResponse::error("CONFLICT", "duplicate");
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let unknown: ApiResponse<()> = ApiResponse::error("SOMETHING_ELSE", "eh");
        assert_eq!(unknown.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn created_upgrades_only_successes() {
        let ok = Created(ApiResponse::success(1));
        assert_eq!(ok.into_response().status(), StatusCode::CREATED);

        let failed: Created<ApiResponse<i32>> =
            Created(ApiResponse::error("NOT_FOUND", "missing"));
        assert_eq!(failed.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn accepted_upgrades_successes() {
        let ok = Accepted(ApiResponse::success(1));
        assert_eq!(ok.into_response().status(), StatusCode::ACCEPTED);
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response envelopes and the mapping from API errors to HTTP.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use job_board_api::ApiError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error};

const SUCCESS: &str = "success";
const ERROR: &str = "error";

/// Envelope of every successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Always `"success"`.
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    pub message: String,
}

/// What a route handler returns.
pub type ApiResponse<T> = Result<(StatusCode, Json<SuccessResponse<T>>), HttpError>;

fn respond<T>(status: StatusCode, message: &str, data: Option<T>) -> ApiResponse<T> {
    Ok((
        status,
        Json(SuccessResponse {
            status: String::from(SUCCESS),
            message: message.to_string(),
            data,
        }),
    ))
}

/// A 200 response carrying `data`.
#[allow(clippy::unnecessary_wraps)]
pub fn ok<T>(message: &str, data: T) -> ApiResponse<T> {
    respond(StatusCode::OK, message, Some(data))
}

/// A 201 response carrying `data`.
#[allow(clippy::unnecessary_wraps)]
pub fn created<T>(message: &str, data: T) -> ApiResponse<T> {
    respond(StatusCode::CREATED, message, Some(data))
}

/// A 200 response with only a message.
#[allow(clippy::unnecessary_wraps)]
pub fn ok_message(message: &str) -> ApiResponse<()> {
    respond(StatusCode::OK, message, None)
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The message shown to the client.
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            status: String::from(ERROR),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %err, "Request failed");
        } else {
            debug!(error = %err, status = status.as_u16(), "Request refused");
        }

        Self::new(status, err.client_message())
    }
}

/// Parses a path id. Anything that is not an integer names no resource.
///
/// # Errors
///
/// Returns a 404 for `resource_type` if `raw` is not an integer.
pub fn parse_id(raw: &str, resource_type: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::from(ApiError::not_found(resource_type)))
}

/// A JSON request body whose rejections use the error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "Malformed JSON body");
                Err(HttpError::bad_request(rejection.body_text()))
            }
        }
    }
}

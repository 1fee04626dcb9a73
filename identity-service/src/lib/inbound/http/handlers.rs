use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::errors::ErrorKind;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_session;
pub mod create_user;
pub mod get_current_user;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    InvalidParameters(Vec<ErrorKind>),
    NoData,
    BadRequest(String),
    NotFound,
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![ApiErrorData::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                    )],
                )
            }
            ApiError::InvalidParameters(kinds) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                kinds
                    .iter()
                    .map(|kind| {
                        ApiErrorData::new(StatusCode::UNPROCESSABLE_ENTITY, "Invalid parameters")
                            .with_detail(kind.as_str())
                    })
                    .collect(),
            ),
            ApiError::NoData => (
                StatusCode::UNPROCESSABLE_ENTITY,
                vec![ApiErrorData::new(StatusCode::UNPROCESSABLE_ENTITY, "No data")],
            ),
            ApiError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Unparseable request body");
                (
                    StatusCode::BAD_REQUEST,
                    vec![ApiErrorData::new(StatusCode::BAD_REQUEST, "Bad request")],
                )
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                vec![ApiErrorData::new(StatusCode::NOT_FOUND, "Not found")],
            ),
            ApiError::Unauthorized(msg) => {
                tracing::debug!(reason = %msg, "Request unauthorized");
                (
                    StatusCode::UNAUTHORIZED,
                    vec![ApiErrorData::new(StatusCode::UNAUTHORIZED, "Unauthorized")],
                )
            }
        };

        (status, Json(ApiErrorBody { errors })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(_) | UserError::InvalidCredentials => {
                ApiError::InvalidParameters(err.kinds())
            }
            UserError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            UserError::EmailNotFound(_)
            | UserError::NotFound(_)
            | UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Success envelope: `{"data": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    data: Vec<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self { data: vec![data] }
    }
}

/// Failure envelope: `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub status: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiErrorData {
    fn new(status: StatusCode, title: &str) -> Self {
        Self {
            status: status.as_u16().to_string(),
            title: title.to_string(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Outward representation of a user. The password hash is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            email: user.email.as_str().to_string(),
            token: user.token.clone(),
        }
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(uri = %uri, "No route");
    ApiError::NotFound
}

use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::payload::UserDocument;
use crate::inbound::http::router::AppState;

/// Register a new account. Responds `201` with the account and its first token.
pub async fn create_user(
    State(state): State<AppState>,
    UserDocument(body): UserDocument,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .identity_service
        .register_user(body.into_credentials())
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

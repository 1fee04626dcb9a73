use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::payload::UserDocument;
use crate::inbound::http::router::AppState;

pub async fn create_session(
    State(state): State<AppState>,
    UserDocument(body): UserDocument,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .identity_service
        .create_session(body.into_credentials())
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

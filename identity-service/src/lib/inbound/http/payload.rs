//! Request document extraction.
//!
//! Bodies are `{"data": [{"email": "...", "password": "..."}]}`. Only the
//! first element is used. The body is read as raw bytes and parsed as JSON
//! whatever the `Content-Type` says.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::FromRequest;
use axum::extract::Request;
use serde::Deserialize;

use super::handlers::ApiError;
use crate::domain::user::models::Credentials;

// Absent and `null` members read the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct RequestDocument {
    #[serde(default)]
    data: Option<Vec<Option<RawUser>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct RawUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// One element of the request `data` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub email: String,
    pub password: String,
}

impl From<RawUser> for UserPayload {
    fn from(raw: RawUser) -> Self {
        Self {
            email: raw.email.unwrap_or_default(),
            password: raw.password.unwrap_or_default(),
        }
    }
}

impl UserPayload {
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(&self.email, self.password)
    }
}

/// Extractor yielding the first user of the request document.
///
/// Rejects with `BadRequest` when the body is not a JSON document and with
/// `NoData` when the `data` collection is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDocument(pub UserPayload);

impl UserDocument {
    fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let document: RequestDocument =
            serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        document
            .data
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|raw| UserDocument(raw.unwrap_or_default().into()))
            .ok_or(ApiError::NoData)
    }
}

#[async_trait]
impl<S> FromRequest<S> for UserDocument
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Self::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_element_is_used() {
        let body = br#"{"data":[{"email":"foo@bar.com","password":"password"},{"email":"x@y.com"}]}"#;

        let UserDocument(payload) = UserDocument::parse(body).unwrap();

        assert_eq!(payload.email, "foo@bar.com");
        assert_eq!(payload.password, "password");
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        for body in [
            &br#"{"data":[{}]}"#[..],
            &br#"{"data":[{"email":null,"password":null}]}"#[..],
            &br#"{"data":[null]}"#[..],
        ] {
            let UserDocument(payload) = UserDocument::parse(body).unwrap();

            assert_eq!(payload, UserPayload::default());
        }
    }

    #[test]
    fn test_empty_or_missing_data_is_no_data() {
        for body in [
            &br#"{"data":[]}"#[..],
            &br#"{"data":null}"#[..],
            &br#"{"other_key":[{"email":"foo@bar.com"}]}"#[..],
            &br#"{}"#[..],
        ] {
            assert_eq!(UserDocument::parse(body).unwrap_err(), ApiError::NoData);
        }
    }

    #[test]
    fn test_unparseable_body_is_bad_request() {
        for body in [&b""[..], &b"not json"[..], &br#"{"data":"#[..]] {
            assert!(matches!(
                UserDocument::parse(body),
                Err(ApiError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn test_into_credentials_normalizes_email() {
        let payload = UserPayload {
            email: " FOO@bar.com".to_string(),
            password: "password".to_string(),
        };

        let credentials = payload.into_credentials();

        assert_eq!(credentials.email.as_str(), "foo@bar.com");
        assert_eq!(credentials.password, "password");
    }
}

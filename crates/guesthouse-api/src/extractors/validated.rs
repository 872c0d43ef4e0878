//! JSON body extractors with field validation
//!
//! Front desk requests carry structured bodies (check-ins, room definitions,
//! account changes). These extractors deserialize the body and run its
//! `validator` rules in one step, so handlers only ever see well-formed input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body that passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// JSON body that may be absent entirely
///
/// Used where an empty body means "no changes requested". A body that is
/// present still has to deserialize and validate.
#[derive(Debug, Clone)]
pub struct OptionalValidatedJson<T>(pub Option<T>);

fn body_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.to_string()),
        _ => ApiError::invalid_body("Invalid JSON body"),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for OptionalValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let has_body = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<usize>().ok())
            .is_some_and(|len| len > 0);

        if !has_body {
            return Ok(OptionalValidatedJson(None));
        }

        let ValidatedJson(value) = ValidatedJson::from_request(req, state).await?;
        Ok(OptionalValidatedJson(Some(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;
    use guesthouse_service::{CreateLocationRequest, UpdateUserRequest};

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len().to_string())
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_a_valid_body() {
        let req = json_request(r#"{"name":"Annex","code":"AX"}"#);

        let ValidatedJson(parsed) =
            ValidatedJson::<CreateLocationRequest>::from_request(req, &())
                .await
                .unwrap();

        assert_eq!(parsed.name, "Annex");
    }

    #[tokio::test]
    async fn rejects_a_body_failing_validation() {
        // Empty location name violates the length rule
        let req = json_request(r#"{"name":"","code":"AX"}"#);

        let err = ValidatedJson::<CreateLocationRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let req = json_request("{not json");

        let err = ValidatedJson::<CreateLocationRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn optional_extractor_passes_through_an_empty_body() {
        let req = Request::builder()
            .method("PATCH")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let OptionalValidatedJson(parsed) =
            OptionalValidatedJson::<UpdateUserRequest>::from_request(req, &())
                .await
                .unwrap();

        assert!(parsed.is_none());
    }
}

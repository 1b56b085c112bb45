//! Request body extraction
//!
//! Same as `axum::Json`, but a body that cannot be read as JSON is answered
//! with a 400 [`ApiError`] so clients always get the `{"error": ..}` shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use super::ApiError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{self, header, StatusCode};
    use axum::response::IntoResponse;

    use super::*;
    use crate::domain::NewItem;

    fn post(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/api/ideas");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).expect("request")
    }

    async fn error_body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json error body"))
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let req = post(Some("application/json"), r#"{"text":"Dark mode"}"#);
        let ApiJson(item) = ApiJson::<NewItem>::from_request(req, &())
            .await
            .unwrap_or_else(|_| panic!("valid body rejected"));
        assert_eq!(item.text, "Dark mode");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_with_error_body() {
        let req = post(Some("application/json"), "{not json");
        let Err(err) = ApiJson::<NewItem>::from_request(req, &()).await else {
            panic!("malformed body accepted");
        };
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let req = post(None, r#"{"text":"x"}"#);
        let Err(err) = ApiJson::<NewItem>::from_request(req, &()).await else {
            panic!("body without content type accepted");
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_400() {
        let req = post(Some("application/json"), r#"{"text":42}"#);
        let Err(err) = ApiJson::<NewItem>::from_request(req, &()).await else {
            panic!("wrong body shape accepted");
        };
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}

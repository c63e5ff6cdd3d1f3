//! HTTP response building module
//!
//! Builders for the few response shapes the service produces.

use super::ResponseBody;
use crate::error::Rejection;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ALLOW, CONTENT_LENGTH, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use hyper::{Response, StatusCode};

pub const CONTENT_TYPE_PNG: &str = "image/png";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Methods the single route answers
pub const ALLOWED_METHODS: &str = "GET, PUT";

type BuildResult = Result<Response<ResponseBody>, hyper::http::Error>;

/// Build 200 response with an explicit media type
pub fn build_ok_response(data: Bytes, content_type: &'static str) -> BuildResult {
    let content_length = data.len();
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(data))
}

/// Build plain-text error response for a rejection
///
/// The body is the rejection message followed by a newline.
pub fn build_rejection_response(rejection: Rejection) -> BuildResult {
    let status = rejection.status();
    let body = Bytes::from(format!("{rejection}\n"));

    let mut builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, CONTENT_TYPE_TEXT)
        .header(X_CONTENT_TYPE_OPTIONS, "nosniff")
        .header(CONTENT_LENGTH, body.len());
    if status == StatusCode::METHOD_NOT_ALLOWED {
        builder = builder.header(ALLOW, ALLOWED_METHODS);
    }

    builder.body(Full::new(body))
}

/// Bare response carrying only `status`, for when a builder fails
pub fn build_fallback_response(status: StatusCode) -> Response<ResponseBody> {
    let mut fallback = Response::new(Full::new(Bytes::new()));
    *fallback.status_mut() = status;
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(resp: Response<ResponseBody>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_png_response() {
        let resp = build_ok_response(Bytes::from_static(b"\x89PNG"), CONTENT_TYPE_PNG).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "image/png");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "4");
    }

    #[tokio::test]
    async fn test_rejection_response() {
        let resp = build_rejection_response(Rejection::OversizedInput).unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(resp.headers()[CONTENT_TYPE], CONTENT_TYPE_TEXT);
        assert!(resp.headers().get(ALLOW).is_none());
        assert_eq!(body_text(resp).await, "Request body too large\n");
    }

    #[tokio::test]
    async fn test_method_rejection_lists_allowed_methods() {
        let resp = build_rejection_response(Rejection::UnsupportedMethod).unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[ALLOW], "GET, PUT");
        assert_eq!(body_text(resp).await, "Method not supported\n");
    }
}

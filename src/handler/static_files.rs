//! Static document serving (GET)
//!
//! The path comes from configuration, never from the request, so there is no
//! traversal surface to guard.

use super::outcome::Outcome;
use crate::error::Rejection;
use crate::http::response::CONTENT_TYPE_HTML;
use hyper::body::Bytes;
use std::path::Path;
use tokio::fs;

/// Read the index document and serve it as HTML
pub async fn serve_index(index_file: &str) -> Outcome {
    match fs::read(index_file).await {
        Ok(content) => {
            let name = Path::new(index_file)
                .file_name()
                .map_or_else(|| index_file.into(), |n| n.to_string_lossy());
            Outcome::served(CONTENT_TYPE_HTML, Bytes::from(content), format!("served {name}"))
        }
        Err(e) => {
            Outcome::rejected_with(Rejection::from_static_io(&e), format!("{index_file}: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[tokio::test]
    async fn test_serves_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<h1>qrl</h1>").unwrap();

        let outcome = serve_index(path.to_str().unwrap()).await;
        assert_eq!(outcome.summary(), "served index.html");
        let Outcome::Served {
            content_type, body, ..
        } = outcome
        else {
            panic!("expected served outcome");
        };
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert_eq!(&body[..], b"<h1>qrl</h1>");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");

        let outcome = serve_index(path.to_str().unwrap()).await;
        assert_eq!(outcome.status(), StatusCode::NOT_FOUND);
        assert!(outcome.summary().starts_with("rejected: 404 page not found"));
    }

    #[tokio::test]
    async fn test_directory_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = serve_index(dir.path().to_str().unwrap()).await;
        assert_eq!(outcome.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

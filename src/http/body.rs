//! Size-limited request body reading
//!
//! The body is pulled frame by frame through [`http_body_util::Limited`], which
//! fails as soon as the running total passes the ceiling. Nothing past the limit
//! is ever buffered, and a failed read never yields a partial body.

use crate::error::Rejection;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_LENGTH;
use hyper::HeaderMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collect `body`, rejecting it once more than `limit` bytes have arrived
pub async fn read_bounded<B>(body: B, limit: usize) -> Result<Bytes, Rejection>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(Rejection::OversizedInput)
        }
        Err(_) => Err(Rejection::BodyReadFailed),
    }
}

/// Whether a `Content-Length` header already announces more than `limit` bytes
///
/// A missing or unparsable header is not a violation; the streaming read
/// enforces the ceiling either way.
pub fn declared_length_exceeds(headers: &HeaderMap, limit: usize) -> bool {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .is_some_and(|declared| declared > u64::try_from(limit).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Frame;
    use hyper::header::HeaderValue;
    use std::collections::VecDeque;
    use std::io;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};

    /// Body yielding pre-set chunks and counting how many were pulled
    struct ChunkedBody {
        chunks: VecDeque<Result<Bytes, io::Error>>,
        polled: Arc<AtomicUsize>,
    }

    impl ChunkedBody {
        fn new(chunks: Vec<Result<Bytes, io::Error>>) -> (Self, Arc<AtomicUsize>) {
            let polled = Arc::new(AtomicUsize::new(0));
            let body = Self {
                chunks: chunks.into(),
                polled: Arc::clone(&polled),
            };
            (body, polled)
        }
    }

    impl Body for ChunkedBody {
        type Data = Bytes;
        type Error = io::Error;

        fn poll_frame(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Bytes>, io::Error>>> {
            let next = self.chunks.pop_front();
            if next.is_some() {
                self.polled.fetch_add(1, Ordering::SeqCst);
            }
            Poll::Ready(next.map(|c| c.map(Frame::data)))
        }
    }

    #[tokio::test]
    async fn test_body_at_limit_is_accepted() {
        let body = Full::new(Bytes::from(vec![b'a'; 3000]));
        let bytes = read_bounded(body, 3000).await.unwrap();
        assert_eq!(bytes.len(), 3000);
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let body = Full::new(Bytes::from(vec![b'a'; 3001]));
        assert_eq!(
            read_bounded(body, 3000).await,
            Err(Rejection::OversizedInput)
        );
    }

    #[tokio::test]
    async fn test_read_stops_at_first_chunk_past_limit() {
        let (body, polled) = ChunkedBody::new(vec![
            Ok(Bytes::from(vec![b'a'; 2000])),
            Ok(Bytes::from(vec![b'b'; 2000])),
            Ok(Bytes::from(vec![b'c'; 2000])),
            Ok(Bytes::from(vec![b'd'; 2000])),
        ]);
        assert_eq!(
            read_bounded(body, 3000).await,
            Err(Rejection::OversizedInput)
        );
        assert_eq!(polled.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_transport_error_is_not_size_error() {
        let (body, _) = ChunkedBody::new(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(io::Error::from(io::ErrorKind::ConnectionReset)),
        ]);
        assert_eq!(
            read_bounded(body, 3000).await,
            Err(Rejection::BodyReadFailed)
        );
    }

    #[tokio::test]
    async fn test_multi_chunk_body_is_joined() {
        let (body, _) = ChunkedBody::new(vec![
            Ok(Bytes::from_static(b"Hello, ")),
            Ok(Bytes::from_static(b"world")),
        ]);
        let bytes = read_bounded(body, 3000).await.unwrap();
        assert_eq!(&bytes[..], b"Hello, world");
    }

    #[test]
    fn test_declared_length() {
        let mut headers = HeaderMap::new();
        assert!(!declared_length_exceeds(&headers, 3000));

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("3000"));
        assert!(!declared_length_exceeds(&headers, 3000));

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("3001"));
        assert!(declared_length_exceeds(&headers, 3000));

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("lots"));
        assert!(!declared_length_exceeds(&headers, 3000));
    }
}

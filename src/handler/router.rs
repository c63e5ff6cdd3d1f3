//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. The method alone picks the path:
//! GET serves the index document, PUT generates a QR code, anything else is
//! refused without touching the body. Exactly one access line is written per
//! request, whatever the outcome.

use super::outcome::Outcome;
use super::{static_files, write};
use crate::config::AppState;
use crate::error::Rejection;
use crate::http::ResponseBody;
use crate::logger::AccessLogEntry;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    remote_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<ResponseBody>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let start = Instant::now();
    let mut entry = access_entry(&req, remote_addr);

    let outcome = dispatch(req, &state).await;

    entry.status = outcome.status().as_u16();
    entry.outcome = outcome.summary();
    entry.request_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    if let Outcome::Served { body, .. } = &outcome {
        entry.body_bytes = body.len();
    }
    state.logger.access(&entry);

    Ok(outcome.into_response(&state.logger))
}

async fn dispatch<B>(req: Request<B>, state: &AppState) -> Outcome
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let method = req.method().clone();
    match method {
        Method::GET => static_files::serve_index(&state.config.qr.index_file).await,
        Method::PUT => {
            write::handle_write(req, state.config.qr.max_body_size, state.encoder.as_ref()).await
        }
        _ => Outcome::rejected(Rejection::UnsupportedMethod),
    }
}

fn access_entry<B>(req: &Request<B>, remote_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = format!("{:?}", req.version())
        .trim_start_matches("HTTP/")
        .to_string();
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}

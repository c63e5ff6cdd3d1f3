//! QR generation path (PUT)
//!
//! Checks run cheapest first and the first failure wins:
//! size gate, UTF-8 decode, trim/emptiness, control characters, encode.

use super::outcome::Outcome;
use super::sanitize::{sanitize, SanitizedPayload};
use crate::error::Rejection;
use crate::http::{self, response::CONTENT_TYPE_PNG};
use crate::qr::{ErrorCorrection, QrEncoder};
use hyper::body::{Body, Bytes};
use hyper::Request;

/// Error-correction level every QR code is generated with
pub const ERROR_CORRECTION: ErrorCorrection = ErrorCorrection::Medium;

/// Minimum width and height of generated images, in pixels
pub const PIXEL_SIZE: u32 = 256;

/// Turn a PUT request into a PNG or a rejection
pub async fn handle_write<B>(
    req: Request<B>,
    max_body_size: usize,
    encoder: &dyn QrEncoder,
) -> Outcome
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    // A declared oversize body is refused without reading a byte of it
    if http::declared_length_exceeds(req.headers(), max_body_size) {
        return Outcome::rejected_with(Rejection::OversizedInput, "declared Content-Length");
    }

    let raw = match http::read_bounded(req.into_body(), max_body_size).await {
        Ok(raw) => raw,
        Err(rejection) => return rejection.into(),
    };

    match sanitize(&raw) {
        Ok(payload) => render(&payload, encoder),
        Err(rejection) => rejection.into(),
    }
}

/// Encode a sanitized payload with the fixed parameters
pub fn render(payload: &SanitizedPayload, encoder: &dyn QrEncoder) -> Outcome {
    match encoder.encode(payload.as_str(), ERROR_CORRECTION, PIXEL_SIZE) {
        Ok(png) => {
            let summary = format!(
                "generated QR code ({} chars, {} bytes)",
                payload.as_str().chars().count(),
                png.len()
            );
            Outcome::served(CONTENT_TYPE_PNG, Bytes::from(png), summary)
        }
        Err(e) => Outcome::rejected_with(Rejection::EncoderFailure, e),
    }
}

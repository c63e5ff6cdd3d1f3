//! Request rejection taxonomy
//!
//! Every way a request can fail maps to exactly one status code and one stable,
//! human-readable message. Client tooling relies on the message text.

use hyper::StatusCode;
use std::io;

/// Reasons a request is answered with an error instead of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Body (declared or streamed) exceeds the size gate
    #[error("Request body too large")]
    OversizedInput,
    /// Transport error or client disconnect while reading the body
    #[error("Failed to read request body")]
    BodyReadFailed,
    /// Body is not valid UTF-8
    #[error("invalid UTF-8 input")]
    MalformedEncoding,
    /// Nothing left after trimming whitespace
    #[error("empty input not allowed")]
    EmptyOrWhitespaceInput,
    /// A control code point other than `\n`, `\r` or `\t`
    #[error("input contains invalid control characters")]
    ForbiddenControlCharacter,
    /// The encoder could not produce an image (usually capacity overflow)
    #[error("Failed to generate QR code")]
    EncoderFailure,
    #[error("Method not supported")]
    UnsupportedMethod,
    /// The index document could not be read
    #[error("{}", static_asset_message(.not_found))]
    StaticAssetUnavailable { not_found: bool },
}

impl Rejection {
    /// HTTP status this rejection is answered with
    pub const fn status(self) -> StatusCode {
        match self {
            Self::OversizedInput => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyReadFailed
            | Self::MalformedEncoding
            | Self::EmptyOrWhitespaceInput
            | Self::ForbiddenControlCharacter => StatusCode::BAD_REQUEST,
            Self::EncoderFailure => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
            Self::StaticAssetUnavailable { not_found: true } => StatusCode::NOT_FOUND,
            Self::StaticAssetUnavailable { not_found: false } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Classify a failed read of the static document
    pub fn from_static_io(err: &io::Error) -> Self {
        Self::StaticAssetUnavailable {
            not_found: err.kind() == io::ErrorKind::NotFound,
        }
    }
}

const fn static_asset_message(not_found: &bool) -> &'static str {
    if *not_found {
        "404 page not found"
    } else {
        "500 Internal Server Error"
    }
}

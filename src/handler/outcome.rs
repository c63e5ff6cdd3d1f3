//! Request outcomes
//!
//! Every request ends in exactly one of two shapes: content was served, or the
//! request was rejected with a status and message.

use crate::error::Rejection;
use crate::http::{self, ResponseBody};
use crate::logger::Logger;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

#[derive(Debug)]
pub enum Outcome {
    /// 200 with a body of the given media type
    Served {
        content_type: &'static str,
        body: Bytes,
        summary: String,
    },
    /// Error response; `detail` only goes to the log
    Rejected {
        rejection: Rejection,
        detail: Option<String>,
    },
}

impl Outcome {
    pub fn served(content_type: &'static str, body: Bytes, summary: impl Into<String>) -> Self {
        Self::Served {
            content_type,
            body,
            summary: summary.into(),
        }
    }

    pub const fn rejected(rejection: Rejection) -> Self {
        Self::Rejected {
            rejection,
            detail: None,
        }
    }

    pub fn rejected_with(rejection: Rejection, detail: impl std::fmt::Display) -> Self {
        Self::Rejected {
            rejection,
            detail: Some(detail.to_string()),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Served { .. } => StatusCode::OK,
            Self::Rejected { rejection, .. } => rejection.status(),
        }
    }

    /// One-line description for the access log
    pub fn summary(&self) -> String {
        match self {
            Self::Served { summary, .. } => summary.clone(),
            Self::Rejected {
                rejection,
                detail: Some(detail),
            } => format!("rejected: {rejection} ({detail})"),
            Self::Rejected {
                rejection,
                detail: None,
            } => format!("rejected: {rejection}"),
        }
    }

    /// Build the HTTP response; a builder failure is logged and answered with a
    /// bare response carrying the same status
    pub fn into_response(self, logger: &Logger) -> Response<ResponseBody> {
        let status = self.status();
        let built = match self {
            Self::Served {
                content_type, body, ..
            } => http::build_ok_response(body, content_type),
            Self::Rejected { rejection, .. } => http::build_rejection_response(rejection),
        };
        built.unwrap_or_else(|e| fallback_response(status, &e, logger))
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Self::rejected(rejection)
    }
}

fn fallback_response(
    status: StatusCode,
    error: &hyper::http::Error,
    logger: &Logger,
) -> Response<ResponseBody> {
    logger.error(&format!("Failed to build {} response: {error}", status.as_u16()));
    http::build_fallback_response(status)
}

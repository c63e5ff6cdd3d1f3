//! HTTP protocol layer module
//!
//! Body reading under a byte ceiling and response builders, decoupled from the
//! request pipeline that decides which response to send.

pub mod body;
pub mod response;

pub use body::{declared_length_exceeds, read_bounded};
pub use response::{build_fallback_response, build_ok_response, build_rejection_response};

/// Response body type used throughout the server
pub type ResponseBody = http_body_util::Full<hyper::body::Bytes>;

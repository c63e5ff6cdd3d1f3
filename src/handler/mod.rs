//! Request handler module
//!
//! Method dispatch for the single route and the two content paths behind it:
//! the static index document (GET) and QR generation (PUT).

pub mod outcome;
pub mod router;
pub mod sanitize;
pub mod static_files;
pub mod write;

// Re-export main entry point
pub use outcome::Outcome;
pub use router::handle_request;
pub use sanitize::{is_forbidden_control, sanitize, SanitizedPayload};

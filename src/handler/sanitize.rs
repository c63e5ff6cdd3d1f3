//! Payload sanitization
//!
//! Pure checks over the accepted body bytes, run in a fixed order so the first
//! failure decides the rejection: decode, trim and emptiness, control characters.

use crate::error::Rejection;

/// Text that passed every content check
///
/// Valid UTF-8, no leading or trailing whitespace, non-empty, and free of control
/// code points other than `\n`, `\r` and `\t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedPayload(String);

impl SanitizedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `c` is a control code point that may not appear in a payload
pub const fn is_forbidden_control(c: char) -> bool {
    let code = c as u32;
    (code < 0x20 || code == 0x7F) && !matches!(c, '\n' | '\r' | '\t')
}

/// Validate raw body bytes into a payload
///
/// Only the outer whitespace is trimmed. Embedded tabs and line breaks are kept.
pub fn sanitize(raw: &[u8]) -> Result<SanitizedPayload, Rejection> {
    let text = std::str::from_utf8(raw).map_err(|_| Rejection::MalformedEncoding)?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejection::EmptyOrWhitespaceInput);
    }

    if trimmed.chars().any(is_forbidden_control) {
        return Err(Rejection::ForbiddenControlCharacter);
    }

    Ok(SanitizedPayload(trimmed.to_owned()))
}

//! QR code encoder collaborator
//!
//! The request pipeline only depends on the [`QrEncoder`] trait. The default
//! implementation builds the symbol with `qrcode` and wraps it in a PNG container
//! with `image`.

mod png;

pub use png::PngEncoder;

/// Error-correction level requested from the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

impl ErrorCorrection {
    const fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::Low => qrcode::EcLevel::L,
            Self::Medium => qrcode::EcLevel::M,
            Self::Quartile => qrcode::EcLevel::Q,
            Self::High => qrcode::EcLevel::H,
        }
    }
}

/// Encoder failures
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Payload does not fit in the largest symbol at the chosen level
    #[error("data too long for a QR symbol at this error-correction level")]
    DataTooLong,
    #[error("failed to build QR symbol: {0}")]
    Symbol(qrcode::types::QrError),
    #[error("failed to write PNG: {0}")]
    Png(#[from] image::ImageError),
}

impl From<qrcode::types::QrError> for EncodeError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::Symbol(other),
        }
    }
}

/// Turns text into an encoded raster image
///
/// Implementations must be deterministic: identical arguments yield identical bytes.
pub trait QrEncoder: Send + Sync {
    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        pixel_size: u32,
    ) -> Result<Vec<u8>, EncodeError>;
}

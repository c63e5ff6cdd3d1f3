//! PNG rendering of QR symbols

use super::{EncodeError, ErrorCorrection, QrEncoder};
use image::{imageops, ImageBuffer, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Modules of quiet zone on each side of a standard symbol
const QUIET_ZONE: u32 = 4;

/// Grayscale PNG encoder with a quiet zone
///
/// The image is exactly `pixel_size` square, with the symbol scaled by the largest
/// whole module size that fits and centred on white. Only a symbol wider than
/// `pixel_size` at one pixel per module produces a larger image.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngEncoder;

impl QrEncoder for PngEncoder {
    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        pixel_size: u32,
    ) -> Result<Vec<u8>, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), level.to_ec_level())?;
        let modules = u32::try_from(code.width()).unwrap_or(u32::MAX) + 2 * QUIET_ZONE;
        let module_size = (pixel_size / modules).max(1);

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(module_size, module_size)
            .build();

        let image = if symbol.width() < pixel_size {
            let mut canvas = ImageBuffer::from_pixel(pixel_size, pixel_size, Luma([255u8]));
            let offset = i64::from((pixel_size - symbol.width()) / 2);
            imageops::overlay(&mut canvas, &symbol, offset, offset);
            canvas
        } else {
            symbol
        };

        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_encode_produces_png() {
        let png = PngEncoder
            .encode("hello world", ErrorCorrection::Medium, 256)
            .unwrap();
        assert!(png.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (256, 256));
    }

    #[test]
    fn test_short_and_long_payloads_are_exactly_256() {
        for text in ["a", "https://example.com/some/longer/path?x=1", "q".repeat(400).as_str()] {
            let png = PngEncoder.encode(text, ErrorCorrection::Medium, 256).unwrap();
            let decoded = image::load_from_memory(&png).unwrap().to_luma8();
            assert_eq!(decoded.dimensions(), (256, 256), "payload {text:?}");
            // Padding and quiet zone keep the corners white
            assert_eq!(decoded.get_pixel(0, 0)[0], 255);
            assert_eq!(decoded.get_pixel(255, 255)[0], 255);
        }
    }

    #[test]
    fn test_symbol_wider_than_target_is_not_cropped() {
        // 2000 bytes need a version 37 symbol: 165 modules plus quiet zone
        let text = "z".repeat(2000);
        let png = PngEncoder.encode(&text, ErrorCorrection::Medium, 100).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() > 100);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = PngEncoder
            .encode("same input", ErrorCorrection::Medium, 256)
            .unwrap();
        let b = PngEncoder
            .encode("same input", ErrorCorrection::Medium, 256)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_keeps_embedded_whitespace() {
        let a = PngEncoder
            .encode("Line1\nLine2", ErrorCorrection::Medium, 256)
            .unwrap();
        let b = PngEncoder
            .encode("Line1 Line2", ErrorCorrection::Medium, 256)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_capacity_overflow() {
        // Version 40-M holds 2331 bytes in byte mode
        let text = "\u{e9}".repeat(1400);
        let err = PngEncoder
            .encode(&text, ErrorCorrection::Medium, 256)
            .unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong));
    }
}

//! Session logo
//!
//! An operator-supplied image shown in the document header. The bytes
//! live in memory for the session only; nothing here touches the saved
//! orders.

use std::path::Path;

use pedido_doc::LogoNode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("image decoding failed: {0}")]
    Decode(#[from] image::ImageError),
}

pub type LogoResult<T> = Result<T, LogoError>;

/// Accepted logo formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFormat {
    Png,
    Jpeg,
    Svg,
}

impl LogoFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            LogoFormat::Png => "image/png",
            LogoFormat::Jpeg => "image/jpeg",
            LogoFormat::Svg => "image/svg+xml",
        }
    }
}

/// In-memory logo image. Raster formats are decoded once on load to
/// validate the payload and capture dimensions; SVG is passed through
/// untouched.
#[derive(Debug, Clone)]
pub struct LogoImage {
    bytes: Vec<u8>,
    format: LogoFormat,
    dimensions: Option<(u32, u32)>,
}

impl LogoImage {
    /// Load a logo from disk, guessing the format from the file name
    /// and validating against the payload.
    pub fn from_path(path: impl AsRef<Path>) -> LogoResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let hint = mime_guess::from_path(path).first_or_octet_stream();
        Self::from_bytes(bytes, hint.essence_str())
    }

    /// Build a logo from raw bytes plus the caller's MIME hint. The
    /// payload magic wins over the hint for raster formats.
    pub fn from_bytes(bytes: Vec<u8>, mime_hint: &str) -> LogoResult<Self> {
        let format = sniff_format(&bytes, mime_hint)
            .ok_or_else(|| LogoError::UnsupportedFormat(mime_hint.to_string()))?;

        let dimensions = match format {
            LogoFormat::Svg => None,
            LogoFormat::Png | LogoFormat::Jpeg => {
                let decoded = image::load_from_memory(&bytes)?;
                Some((decoded.width(), decoded.height()))
            }
        };

        Ok(Self {
            bytes,
            format,
            dimensions,
        })
    }

    pub fn format(&self) -> LogoFormat {
        self.format
    }

    /// Pixel dimensions for raster logos; `None` for SVG.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The render-tree node carrying this logo as a data URL.
    pub fn to_node(&self) -> LogoNode {
        LogoNode::new(self.format.mime(), &self.bytes)
    }
}

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

fn sniff_format(bytes: &[u8], mime_hint: &str) -> Option<LogoFormat> {
    if bytes.starts_with(&PNG_MAGIC) {
        return Some(LogoFormat::Png);
    }
    if bytes.starts_with(&JPEG_MAGIC) {
        return Some(LogoFormat::Jpeg);
    }
    if mime_hint == "image/svg+xml" || looks_like_svg(bytes) {
        return Some(LogoFormat::Svg);
    }
    match mime_hint {
        "image/png" => Some(LogoFormat::Png),
        "image/jpeg" => Some(LogoFormat::Jpeg),
        _ => None,
    }
}

/// SVG has no magic bytes; look for the opening tag near the start,
/// past any XML prolog or DOCTYPE.
fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    text.contains("<svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_png_round_trip_with_dimensions() {
        let logo = LogoImage::from_bytes(png_bytes(), "image/png").unwrap();

        assert_eq!(logo.format(), LogoFormat::Png);
        assert_eq!(logo.dimensions(), Some((2, 3)));
        assert!(logo.to_node().data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_svg_passes_through_without_decoding() {
        let bytes = b"<?xml version=\"1.0\"?><svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec();
        let logo = LogoImage::from_bytes(bytes, "application/octet-stream").unwrap();

        assert_eq!(logo.format(), LogoFormat::Svg);
        assert_eq!(logo.dimensions(), None);
        assert!(logo
            .to_node()
            .data_url
            .starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_corrupt_png_payload_is_a_decode_error() {
        // valid magic, truncated body
        let err = LogoImage::from_bytes(vec![0x89, b'P', b'N', b'G', 0x0D], "image/png").unwrap_err();
        assert!(matches!(err, LogoError::Decode(_)));
    }

    #[test]
    fn test_unknown_payload_is_unsupported() {
        let err = LogoImage::from_bytes(b"GIF89a....".to_vec(), "image/gif").unwrap_err();
        assert!(matches!(err, LogoError::UnsupportedFormat(_)));
    }
}

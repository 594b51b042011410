//! Renderable document tree
//!
//! The typed structure the preview shell walks to draw the page. Every
//! node carries display-ready text; nothing here re-derives field
//! values. Serialized as JSON across the shell boundary.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Embedded logo image, ready for an `<img src=...>` slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoNode {
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

impl LogoNode {
    /// Encode raw image bytes as a data URL.
    pub fn new(mime: &str, bytes: &[u8]) -> Self {
        Self {
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }
}

/// Page header: optional logo above the issuer identity and title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub logo: Option<LogoNode>,
    pub issuer: String,
    pub tagline: String,
    pub title: String,
}

/// Titled block of plain lines (Contratado, Contratante)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

/// One numbered product block
///
/// Lines arrive labeled ("Item 1: ...", "Estrutura: ...", ...). The
/// renderer draws a separator between consecutive entries, never after
/// the last one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductEntry {
    pub lines: Vec<String>,
}

/// The assembled purchase order page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    /// "Data: DD/MM/YYYY"
    pub date_line: String,
    pub contractor: Section,
    pub client: Section,
    pub products_title: String,
    pub products: Vec<ProductEntry>,
    /// Bordered emphasis lines: value + words, payment, bank data
    pub boxed_lines: Vec<String>,
    /// Delivery and warranty lines
    pub closing_lines: Vec<String>,
    pub footer_lines: Vec<String>,
}

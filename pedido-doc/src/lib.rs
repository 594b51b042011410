//! # pedido-doc
//!
//! Purchase order document assembly - rendering-ready output only.
//!
//! ## Scope
//!
//! This crate handles WHAT the finished document contains:
//! - Typed render tree consumed by the preview shell
//! - Plain-text flattening for the `.txt` export
//! - Fixed letterhead content (issuer, bank data, warranty, footer)
//!
//! Form behavior (HOW field values come to be) stays in application code:
//! - Input masks and derived fields → pedido-desk
//! - Persistence and export → pedido-desk
//!
//! ## Example
//!
//! ```ignore
//! use pedido_doc::DocumentAssembler;
//! use shared::OrderRecord;
//!
//! let record = OrderRecord::new();
//! let assembler = DocumentAssembler::default();
//! let doc = assembler.assemble(&record, None);
//! let txt = assembler.plain_text(&record);
//! ```

mod assembler;
mod builder;
mod document;
mod letterhead;

// Re-exports
pub use assembler::DocumentAssembler;
pub use builder::TextDocBuilder;
pub use document::{Document, Header, LogoNode, ProductEntry, Section};
pub use letterhead::{
    BANK_DETAILS_LINE, CONTRACTOR_LINES, DELIVERY_LABEL, DOC_TITLE, FOOTER_LINES, ISSUER_NAME,
    ISSUER_TAGLINE, WARRANTY_LINE,
};

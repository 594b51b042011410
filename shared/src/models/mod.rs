//! Data models
//!
//! Shared between the form session (pedido-desk) and the document
//! assembler (pedido-doc). All fields hold display-ready strings; the
//! formatting rules that produce them live in `pedido-desk::format`.

pub mod order;

// Re-exports
pub use order::*;

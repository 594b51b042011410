//! Pedido Desk - application core of the purchase-order form tool
//!
//! # Overview
//!
//! This crate is the engine behind the order form: everything the
//! visual shell does besides drawing widgets lives here.
//!
//! - **Formatting** (`format`): input masks, currency in words,
//!   payment plan descriptions, the derived-field refresh pass
//! - **Session** (`session`): draft lifecycle and edit orchestration
//! - **Storage** (`store`): saved orders in an embedded redb database
//! - **Export** (`export`): text export plus the PDF pipeline seams
//! - **Lookup** (`lookup`): ViaCEP postal code resolution
//! - **Logo** (`logo`): session-only letterhead image
//!
//! # Module structure
//!
//! ```text
//! pedido-desk/src/
//! ├── core/          # Configuration, logging, environment setup
//! ├── format/        # Masks, words, payment, derive
//! ├── session.rs     # FormSession
//! ├── store.rs       # OrderStore (redb)
//! ├── export.rs      # ExportCoordinator
//! ├── lookup.rs      # AddressLookup + ViaCepClient
//! └── logo.rs        # LogoImage
//! ```

pub mod core;
pub mod export;
pub mod format;
pub mod logo;
pub mod lookup;
pub mod session;
pub mod store;

// Re-export public types
pub use core::{Config, setup_environment};
pub use export::{
    ExportCoordinator, ExportError, ExportResult, ExportState, PageRasterizer, PagePlacement,
    PdfWriter, RasterImage,
};
pub use format::{FieldKind, MoneyInput};
pub use logo::{LogoError, LogoFormat, LogoImage, LogoResult};
pub use lookup::{AddressLookup, LookupError, LookupResult, ViaCepClient};
pub use session::{FormSession, ProductField};
pub use store::{OrderStore, StoreError, StoreResult};

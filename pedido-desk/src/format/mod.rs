//! Order data formatting engine
//!
//! The pure, deterministic rules that turn raw keystrokes into
//! normalized display values:
//!
//! - **fields**: input masks (CPF, phone, CEP, dates, money)
//! - **words**: currency amounts written out in pt-BR
//! - **payment**: computed payment plan descriptions
//! - **derive**: the recompute-derived-fields pass run after each edit
//!
//! Everything here is synchronous and side-effect free; the session
//! applies these rules, the record stores their output.

pub mod derive;
pub mod fields;
pub mod payment;
pub mod words;

pub use fields::{FieldKind, MoneyInput};

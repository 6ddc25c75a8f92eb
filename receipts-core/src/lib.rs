//! Core of the receipt points service.
//!
//! This crate owns the two pieces with real design content:
//! - the scoring engine ([`score`]), a pure function from receipt fields to
//!   an integer point total, and
//! - the deduplicating receipt store ([`store`]), which maps generated
//!   identifiers to scores and rejects resubmission of identical content
//!   via a canonical content digest ([`canon`]).
//!
//! HTTP routing, wire decoding and field validation live in the API crate;
//! this crate only ever sees fully parsed [`Receipt`] values.

pub mod canon;
pub mod error;
pub mod score;
pub mod store;
pub mod types;

pub use error::{ReceiptError, ReceiptResult};
pub use types::{Item, Receipt, ReceiptDigest};

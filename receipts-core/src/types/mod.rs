//! Domain types for the receipt points service.

mod common;
mod receipt;

pub use common::ReceiptDigest;
pub use receipt::{Item, Receipt, DATE_FORMAT, TIME_FORMAT};

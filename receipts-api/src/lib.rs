//! Receipt points REST API.
//!
//! Thin HTTP plumbing around `receipts-core`: decode the wire JSON,
//! validate field presence and formats, invoke the scoring engine and the
//! store, map outcomes to responses.
//!
//! ## Endpoints
//! - POST /receipts/process - Score a receipt, store it, return its id
//! - GET /receipts/:id/points - Points awarded to a stored receipt
//! - GET /health - Service health

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod validate;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;

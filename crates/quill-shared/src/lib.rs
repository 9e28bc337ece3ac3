//! # Quill Shared
//!
//! Types shared between the API server and its clients: request/response
//! DTOs, the validation schemas attached to them, and the standard
//! response envelopes.

pub mod dto;
pub mod response;
pub mod validation;

pub use response::{ApiResponse, ErrorResponse, PageMeta};
pub use validation::{FieldViolation, FirstViolation};

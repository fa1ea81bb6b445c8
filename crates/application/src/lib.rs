//! Application layer - Weather tool orchestration
//!
//! Exposes the callable tool surface the agent shell registers with the
//! language model, plus the pure analysis and formatting helpers behind it.
//! Transport lives in the integration crate; validation rules live in
//! `domain`.

pub mod error;
pub mod services;

pub use error::ToolError;
pub use services::*;

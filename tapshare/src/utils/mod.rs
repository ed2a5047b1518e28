// tapshare-rs/tapshare/src/utils/mod.rs
//! Utilities for tapshare: small, reusable helpers used across the crate.

pub mod text;

// Re-export the common helpers at the `utils` module level so callers can
// use `crate::utils::decode_text(...)` directly.
pub use text::*;

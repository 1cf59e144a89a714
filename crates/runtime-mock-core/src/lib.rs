//! Ambient building blocks shared by the mock runtime services.
//!
//! Tracing setup and the JSON error response convention live here so the
//! service crate only carries its own behavior.

pub mod error;
pub mod tracing;

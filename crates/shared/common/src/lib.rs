//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified application error handling
//! - The hashing capability consumed by use cases
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod providers;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use providers::HashProvider;
pub use telemetry::init_tracing;

#[cfg(any(test, feature = "test-utils"))]
pub use providers::MockHashProvider;

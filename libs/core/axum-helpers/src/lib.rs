//! # Axum Helpers
//!
//! Shared utilities for the workspace's Axum applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses ([`AppError`], [`ErrorResponse`])
//! - **[`extractors`]**: Custom extractors ([`IdPath`], [`ValidatedJson`])
//! - **[`health`]**: Liveness probe router
//! - **[`server`]**: Server startup and graceful shutdown

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use health::health_router;
pub use server::{create_app, shutdown_signal};

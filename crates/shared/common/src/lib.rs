//! Common utilities shared by the console and HTTP front ends.
//!
//! This crate provides:
//! - Unified error handling with user-facing messages for every error kind
//! - The text-to-words conversion both front ends call
//! - Configuration structures

pub mod config;
pub mod conversion;
pub mod error;

pub use config::*;
pub use conversion::{convert, Conversion};
pub use error::{AppError, AppResult, ErrorResponse};

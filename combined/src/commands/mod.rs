//! Commands module - CLI command implementations.

pub mod convert;
pub mod serve;

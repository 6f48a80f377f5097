//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: rejected store operations
//! - [`string`]: display helpers

pub mod error;
pub mod string;

//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] - one row of a question file
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod question;

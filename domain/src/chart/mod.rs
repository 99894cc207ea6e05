//! Chart model for assessment results.

pub mod radar;

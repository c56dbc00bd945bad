//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: target output language of a study aid
//! - [`model::ModelId`]: provider model identifier and selection preferences
//! - [`error::DomainError`]: caller input validation errors

pub mod error;
pub mod language;
pub mod model;

//! Application-level configuration.
//!
//! - [`InvocationParams`]: content window and [`RetryPolicy`] for model calls

pub mod invocation_params;

pub use invocation_params::{InvocationParams, RetryPolicy};

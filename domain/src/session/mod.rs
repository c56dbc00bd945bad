//! LLM invocation domain.
//!
//! - [`response::ResponseMode`]: structured JSON or plain text output
//! - [`response::InvocationResult`]: raw model output of one invocation

pub mod response;

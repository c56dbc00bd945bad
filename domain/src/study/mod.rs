//! Study aid domain.
//!
//! - [`entities`]: summaries, quiz questions, chat turns, study sessions, flashcards
//! - [`parsing`]: validation of raw model output into those values

pub mod entities;
pub mod parsing;

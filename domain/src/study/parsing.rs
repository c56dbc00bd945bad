//! Model output parsing for study aids.
//!
//! These functions turn raw provider text into validated study aid values.
//! They are pure domain logic: no I/O and no retries, only schema checks.
//!
//! # Functions
//!
//! | Function | Shape | Accepted wrapper key |
//! |----------|-------|----------------------|
//! | [`parse_summary`] | JSON object | none |
//! | [`parse_quiz`] | JSON array of questions | `questions` |
//! | [`parse_study_plan`] | JSON array of sessions | `plan` |
//! | [`parse_flashcards`] | JSON array of cards | `flashcards` |
//! | [`parse_chat_reply`] | plain text | none |
//!
//! Any missing field, wrong type, unknown enum value or broken invariant is a
//! [`ParseError`]. Nothing is ever returned half-filled.

use super::entities::{Flashcard, QuizQuestion, StudySession, Summary};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Model output that could not be turned into the expected study aid.
///
/// This is a different failure class from transport/provider errors: the
/// call succeeded but its payload is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("AI returned unparseable output: invalid JSON ({0})")]
    InvalidJson(String),

    #[error("AI returned unparseable output: expected {shape}, {reason}")]
    ShapeMismatch { shape: &'static str, reason: String },

    #[error("AI returned unparseable output: empty response")]
    Empty,
}

impl ParseError {
    fn mismatch(shape: &'static str, reason: impl Into<String>) -> Self {
        ParseError::ShapeMismatch {
            shape,
            reason: reason.into(),
        }
    }
}

/// Parse an analysis response into a [`Summary`].
///
/// # Examples
///
/// ```
/// use study_domain::study::parsing::parse_summary;
///
/// let summary = parse_summary(
///     r#"{"summary":"x","key_concepts":["a"],"difficulty":"Beginner","estimated_study_time":"1 hour"}"#,
/// ).unwrap();
/// assert_eq!(summary.key_concepts, vec!["a".to_string()]);
///
/// assert!(parse_summary(r#"{"summary":"x"}"#).is_err());
/// ```
pub fn parse_summary(raw: &str) -> Result<Summary, ParseError> {
    const SHAPE: &str = "summary object";

    let value = parse_json(raw)?;
    let summary: Summary = from_value(value, SHAPE)?;

    require_text(&summary.summary, SHAPE, "summary")?;
    require_text(&summary.estimated_study_time, SHAPE, "estimated_study_time")?;
    if summary.key_concepts.is_empty() {
        return Err(ParseError::mismatch(SHAPE, "key_concepts is empty"));
    }
    for concept in &summary.key_concepts {
        require_text(concept, SHAPE, "key_concepts[]")?;
    }

    Ok(summary)
}

/// Parse a quiz response into its questions.
///
/// Checks that ids are unique, that true/false questions carry exactly two
/// options, and that every `correct_answer` is one of the question's options.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, ParseError> {
    const SHAPE: &str = "quiz question list";

    let questions: Vec<QuizQuestion> = parse_list(raw, SHAPE, "questions")?;

    let mut seen = HashSet::new();
    for q in &questions {
        if !seen.insert(q.id) {
            return Err(ParseError::mismatch(
                SHAPE,
                format!("duplicate question id {}", q.id),
            ));
        }

        require_text(&q.question, SHAPE, "question")?;
        require_text(&q.explanation, SHAPE, "explanation")?;
        require_text(&q.correct_answer, SHAPE, "correct_answer")?;

        match q.kind.required_options() {
            Some(n) if q.options.len() != n => {
                return Err(ParseError::mismatch(
                    SHAPE,
                    format!(
                        "question {} must have exactly {} options, got {}",
                        q.id,
                        n,
                        q.options.len()
                    ),
                ));
            }
            None if q.options.len() < 2 => {
                return Err(ParseError::mismatch(
                    SHAPE,
                    format!("question {} needs at least 2 options", q.id),
                ));
            }
            _ => {}
        }

        if !q.options.iter().any(|o| o.trim() == q.correct_answer.trim()) {
            return Err(ParseError::mismatch(
                SHAPE,
                format!("question {} correct_answer is not one of its options", q.id),
            ));
        }
    }

    Ok(questions)
}

/// Parse a study plan response into its sessions.
///
/// Topic coverage and chronology are prompt obligations of the model and
/// are not verified here.
pub fn parse_study_plan(raw: &str) -> Result<Vec<StudySession>, ParseError> {
    const SHAPE: &str = "study session list";

    let sessions: Vec<StudySession> = parse_list(raw, SHAPE, "plan")?;
    for s in &sessions {
        require_text(&s.date, SHAPE, "date")?;
        require_text(&s.topic, SHAPE, "topic")?;
        require_text(&s.activity, SHAPE, "activity")?;
        require_text(&s.duration, SHAPE, "duration")?;
        require_text(&s.description, SHAPE, "description")?;
    }
    Ok(sessions)
}

/// Parse a flashcard response into its cards.
pub fn parse_flashcards(raw: &str) -> Result<Vec<Flashcard>, ParseError> {
    const SHAPE: &str = "flashcard list";

    let cards: Vec<Flashcard> = parse_list(raw, SHAPE, "flashcards")?;
    for card in &cards {
        require_text(&card.front, SHAPE, "front")?;
        require_text(&card.back, SHAPE, "back")?;
    }
    Ok(cards)
}

/// Validate a plain-text chat reply. Only emptiness is checked.
pub fn parse_chat_reply(raw: &str) -> Result<String, ParseError> {
    let reply = raw.trim();
    if reply.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(reply.to_string())
}

/// Strip a surrounding markdown code fence (```json ... ```), if any.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

fn parse_json(raw: &str) -> Result<Value, ParseError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

fn from_value<T: DeserializeOwned>(value: Value, shape: &'static str) -> Result<T, ParseError> {
    serde_json::from_value(value).map_err(|e| ParseError::mismatch(shape, e.to_string()))
}

/// Parse a non-empty list that may be a bare array or wrapped as
/// `{"<key>": [...]}`.
fn parse_list<T: DeserializeOwned>(
    raw: &str,
    shape: &'static str,
    wrapper_key: &str,
) -> Result<Vec<T>, ParseError> {
    let value = match parse_json(raw)? {
        Value::Object(mut map) => map.remove(wrapper_key).ok_or_else(|| {
            ParseError::mismatch(shape, format!("object without a '{}' array", wrapper_key))
        })?,
        other => other,
    };

    if !value.is_array() {
        return Err(ParseError::mismatch(shape, "not a JSON array"));
    }

    let items: Vec<T> = from_value(value, shape)?;
    if items.is_empty() {
        return Err(ParseError::mismatch(shape, "empty list"));
    }
    Ok(items)
}

fn require_text(value: &str, shape: &'static str, field: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        Err(ParseError::mismatch(shape, format!("'{}' is empty", field)))
    } else {
        Ok(())
    }
}

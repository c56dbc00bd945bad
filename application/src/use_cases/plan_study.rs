//! Plan Study use case.
//!
//! Builds a dated study schedule up to an exam. Covering every topic and
//! keeping sessions chronological are instructions to the model; the parser
//! only checks the session shape.

use super::shared::{TaskError, TaskRunner};
use chrono::NaiveDate;
use study_domain::{DomainError, Language, ResponseMode, StudySession, parse_study_plan};

/// Input for the [`PlanStudyUseCase`].
#[derive(Debug, Clone)]
pub struct PlanStudyInput {
    pub topics: Vec<String>,
    /// Exam date as `YYYY-MM-DD`
    pub exam_date: String,
    pub hours_per_day: f64,
    pub language: Language,
    /// Overrides the local date, mainly for tests
    pub today: Option<NaiveDate>,
}

impl PlanStudyInput {
    pub fn new(topics: Vec<String>, exam_date: impl Into<String>, hours_per_day: f64) -> Self {
        Self {
            topics,
            exam_date: exam_date.into(),
            hours_per_day,
            language: Language::default(),
            today: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

#[derive(Clone)]
pub struct PlanStudyUseCase {
    runner: TaskRunner,
}

impl PlanStudyUseCase {
    pub fn new(runner: TaskRunner) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, input: PlanStudyInput) -> Result<Vec<StudySession>, TaskError> {
        let topics: Vec<String> = input
            .topics
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if topics.is_empty() {
            return Err(DomainError::EmptyField("topics").into());
        }

        let exam_date = NaiveDate::parse_from_str(input.exam_date.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(input.exam_date.clone()))?;

        if !input.hours_per_day.is_finite() || input.hours_per_day <= 0.0 {
            return Err(DomainError::InvalidHours(input.hours_per_day).into());
        }

        let today = input
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let spec = self.runner.prompts().study_plan(
            &topics,
            exam_date,
            input.hours_per_day,
            today,
            &input.language,
        );
        self.runner
            .run(spec, ResponseMode::Structured, parse_study_plan)
            .await
    }
}

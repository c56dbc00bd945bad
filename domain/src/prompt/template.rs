//! Task instruction templates for the study aid prompts

use crate::study::entities::ChatTurn;
use chrono::NaiveDate;

/// Templates for the instruction part of each task prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instructions for content analysis
    pub fn analyze_instructions() -> &'static str {
        r#"Analyze the course content below as a professor preparing a lecture.
Return ONLY a JSON object with exactly these fields:
- "summary": a clear, engaging summary of the content (at most 200 words).
- "key_concepts": a list of strings, the most important concepts a student must master.
- "difficulty": exactly one of "Beginner", "Intermediate" or "Advanced" (keep these English values).
- "estimated_study_time": a short estimate of the time needed to study it, e.g. "2 hours".
No markdown, no commentary outside the JSON."#
    }

    /// Instructions for quiz generation
    pub fn quiz_instructions(num_questions: usize) -> String {
        format!(
            r#"Create a quiz of exactly {n} questions that checks real understanding of the text below.
Mix "multiple_choice" and "true_false" questions.
Return ONLY a JSON array of {n} objects, each with:
- "id": a unique integer, starting at 1.
- "type": either "multiple_choice" or "true_false".
- "question": the question text.
- "options": a list of strings. A "multiple_choice" question has 4 options. A "true_false" question has exactly 2 options: the words for True and False in the response language.
- "correct_answer": the correct option, copied exactly from "options".
- "explanation": a short explanation of why this answer is correct.
No markdown, no commentary outside the JSON."#,
            n = num_questions
        )
    }

    /// Instructions for flashcard generation
    pub fn flashcard_instructions(num_cards: usize) -> String {
        format!(
            r#"Create exactly {n} flashcards for active recall from the text below.
Each flashcard has a short question or term on the front and a precise answer on the back.
Return ONLY a JSON array of {n} objects, each with:
- "front": the question or term.
- "back": the answer or definition.
No markdown, no commentary outside the JSON."#,
            n = num_cards
        )
    }

    /// Instructions for document chat
    pub fn chat_instructions() -> &'static str {
        r#"A student is asking you about the course material below.
Answer their new message using the material first. If the material does not cover the question, say so briefly, then give your best general explanation.
Take the conversation so far into account. Reply in plain conversational text, not JSON."#
    }

    /// Course material, prior turns in order, then the new message
    pub fn chat_payload(context: &str, history: &[ChatTurn], message: &str) -> String {
        let mut payload = format!("\n\nCourse material:\n{}\n", context);

        if !history.is_empty() {
            payload.push_str("\nConversation so far:\n");
            for turn in history {
                payload.push_str(&format!("{}: {}\n", turn.role.label(), turn.content));
            }
        }

        payload.push_str(&format!("\nStudent's new message:\n{}", message));
        payload
    }

    /// Instructions for a day-by-day study plan
    pub fn study_plan_instructions(
        topics: &[String],
        exam_date: NaiveDate,
        hours_per_day: f64,
        today: NaiveDate,
    ) -> String {
        let mut prompt = format!(
            "Build a day-by-day study plan for a student whose exam is on {exam}. Today is {today}.\n\
The student can study at most {hours} hours per day.\n\nTopics to cover:\n",
            exam = exam_date.format("%Y-%m-%d"),
            today = today.format("%Y-%m-%d"),
            hours = hours_per_day,
        );

        for topic in topics {
            prompt.push_str(&format!("- {}\n", topic));
        }

        prompt.push_str(&format!(
            r#"
Rules:
- Every topic above appears in at least one session.
- Sessions are in chronological order, dated from {today} up to the day before {exam}.
- The sessions of one day add up to at most {hours} hours.
- Finish with revision sessions close to the exam.
Return ONLY a JSON array of objects, each with:
- "date": the session date as YYYY-MM-DD.
- "topic": one of the topics above.
- "activity": what kind of work, e.g. reading, exercises, revision, mock exam.
- "duration": the session length, e.g. "45 min".
- "description": what exactly to do in the session.
No markdown, no commentary outside the JSON."#,
            today = today.format("%Y-%m-%d"),
            exam = exam_date.format("%Y-%m-%d"),
            hours = hours_per_day,
        ));

        prompt
    }
}

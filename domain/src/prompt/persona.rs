//! Persona clause and language directive

use crate::core::language::{Language, Persona};

const ENGLISH_PERSONA: &str = "You are an engaging professor, passionate about your subject. \
You explain things the way a great teacher does in front of a curious class: warmly, \
concretely, with vivid examples, never like a robot reciting a manual.";

const FRENCH_PERSONA: &str = "Tu es un professeur passionné et captivant. \
Tu expliques comme un excellent enseignant devant une classe curieuse : avec chaleur, \
avec des exemples concrets et vivants, jamais comme un robot qui récite un manuel.";

/// Persona clause for the given language.
///
/// Languages without their own wording get the English persona.
pub fn persona_clause(language: &Language) -> &'static str {
    match language.persona() {
        Persona::French => FRENCH_PERSONA,
        Persona::English => ENGLISH_PERSONA,
    }
}

/// Explicit output-language directive, independent of the persona language.
pub fn language_directive(language: &Language) -> String {
    match language.common_name() {
        Some(name) => format!(
            "Respond strictly in {} (language code: {}), whatever the language of the source material.",
            name,
            language.code()
        ),
        None => format!(
            "Respond strictly in the language with code \"{}\", whatever the language of the source material.",
            language.code()
        ),
    }
}

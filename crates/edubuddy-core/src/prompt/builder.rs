//! Prompt assembly for a single completion request.
//!
//! The system prompt is the base mentor prompt plus the persona
//! specialization. The user prompt carries a bounded window of recent
//! conversation, the latest question, an optional action instruction, and a
//! closing line anchoring the persona.
//!
//! Layout of the user prompt:
//! ```text
//! Previous conversation:
//! User: ...
//!
//! AI Mentor: ...
//!
//! User's latest question: {message}
//!
//! Special instruction: {action instruction, when present}
//!
//! Respond as the AI Mentor with the {persona} specialization:
//! ```

use edubuddy_types::chat::Turn;
use edubuddy_types::llm::MessageRole;
use edubuddy_types::persona::Persona;

use crate::prompt::catalog;

/// Number of most recent messages included in the conversation window.
const HISTORY_WINDOW: usize = 5;

/// Assembles system and user prompts from the persona catalog and history.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the system prompt for a persona: base mentor prompt plus the
    /// persona specialization.
    pub fn system_prompt(persona: Persona) -> String {
        format!(
            "{}\n\n{}",
            catalog::BASE_MENTOR_PROMPT.trim_end(),
            catalog::persona_prompt(persona).trim_end()
        )
    }

    /// Build the user prompt from history and the latest message.
    ///
    /// `turns` is the full conversation history including the just-recorded
    /// user message; only the last [`HISTORY_WINDOW`] entries are formatted,
    /// and the history section is omitted entirely for a first exchange
    /// (one message or fewer).
    pub fn user_prompt(
        persona: Persona,
        turns: &[Turn],
        message: &str,
        action_instruction: Option<&str>,
    ) -> String {
        let mut prompt = String::new();

        if turns.len() > 1 {
            let window_start = turns.len().saturating_sub(HISTORY_WINDOW);
            prompt.push_str("Previous conversation:\n");
            for turn in &turns[window_start..] {
                match turn.role {
                    MessageRole::User => {
                        prompt.push_str(&format!("User: {}\n\n", turn.content));
                    }
                    _ => {
                        prompt.push_str(&format!("AI Mentor: {}\n\n", turn.content));
                    }
                }
            }
            prompt.push('\n');
        }

        prompt.push_str(&format!("User's latest question: {message}\n\n"));

        if let Some(instruction) = action_instruction {
            prompt.push_str(&format!("Special instruction: {instruction}\n\n"));
        }

        prompt.push_str(&format!(
            "Respond as the AI Mentor with the {persona} specialization:"
        ));

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: MessageRole, content: &str) -> Turn {
        Turn::now(role, content)
    }

    #[test]
    fn test_system_prompt_contains_base_and_specialization() {
        let prompt = PromptBuilder::system_prompt(Persona::Code);
        assert!(prompt.contains("AI mentor specialized in quality education"));
        assert!(prompt.contains("programming mentor"));
    }

    #[test]
    fn test_first_exchange_has_no_history_section() {
        let turns = vec![turn(MessageRole::User, "What is a borrow checker?")];
        let prompt = PromptBuilder::user_prompt(
            Persona::Code,
            &turns,
            "What is a borrow checker?",
            None,
        );
        assert!(!prompt.contains("Previous conversation:"));
        assert!(prompt.contains("User's latest question: What is a borrow checker?"));
        assert!(prompt.contains("Respond as the AI Mentor with the code specialization:"));
    }

    #[test]
    fn test_history_section_present_after_first_exchange() {
        let turns = vec![
            turn(MessageRole::User, "What is recursion?"),
            turn(MessageRole::Assistant, "Recursion is when..."),
            turn(MessageRole::User, "Show me an example"),
        ];
        let prompt =
            PromptBuilder::user_prompt(Persona::General, &turns, "Show me an example", None);
        assert!(prompt.contains("Previous conversation:"));
        assert!(prompt.contains("User: What is recursion?"));
        assert!(prompt.contains("AI Mentor: Recursion is when..."));
    }

    #[test]
    fn test_window_keeps_only_last_five_messages() {
        let mut turns = Vec::new();
        for i in 0..8 {
            turns.push(turn(MessageRole::User, &format!("question {i}")));
        }
        let prompt = PromptBuilder::user_prompt(Persona::Stem, &turns, "question 7", None);
        assert!(!prompt.contains("question 2"));
        assert!(prompt.contains("question 3"));
        assert!(prompt.contains("question 7"));
    }

    #[test]
    fn test_action_instruction_included() {
        let turns = vec![turn(MessageRole::User, "fn main() {}")];
        let instruction = catalog::action_instruction(Persona::Code, "debug").unwrap();
        let prompt =
            PromptBuilder::user_prompt(Persona::Code, &turns, "fn main() {}", Some(instruction));
        assert!(prompt.contains("Special instruction:"));
        assert!(prompt.contains("errors, bugs, and logical issues"));
    }

    #[test]
    fn test_no_special_instruction_without_action() {
        let turns = vec![turn(MessageRole::User, "hello")];
        let prompt = PromptBuilder::user_prompt(Persona::Business, &turns, "hello", None);
        assert!(!prompt.contains("Special instruction:"));
    }

    #[test]
    fn test_persona_name_in_closing_line() {
        for persona in Persona::ALL {
            let turns = vec![turn(MessageRole::User, "hi")];
            let prompt = PromptBuilder::user_prompt(persona, &turns, "hi", None);
            assert!(prompt.ends_with(&format!(
                "Respond as the AI Mentor with the {persona} specialization:"
            )));
        }
    }
}

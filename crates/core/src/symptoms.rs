//! The two-step symptom capture flow.
//!
//! A symptom is collected as two sequential free-text prompts: a category,
//! then a detail. The prompts themselves are behind the [`SymptomPrompter`]
//! trait so that the flow can be driven by a terminal, a scripted test
//! harness, or any other front-end.
//!
//! ## Cancellation policy
//!
//! If either prompt is dismissed or answers with empty text, the whole
//! operation aborts and nothing is appended. The detail prompt is never
//! shown once the category prompt has been abandoned. A capture therefore
//! either yields a complete [`SymptomEntry`] or has no effect at all.

use egp_types::PromptText;

/// Prompt message shown when asking for the symptom category.
pub const CATEGORY_PROMPT: &str = "Enter Symptom Category:";

/// Prompt message shown when asking for the symptom details.
pub const DETAIL_PROMPT: &str = "Enter Symptom Details:";

/// A single captured symptom: a category and its free-text detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomEntry {
    category: PromptText,
    detail: PromptText,
}

impl SymptomEntry {
    pub fn new(category: PromptText, detail: PromptText) -> Self {
        Self { category, detail }
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// Formats the entry as it is stored in the profile's symptom list.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for SymptomEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.detail)
    }
}

/// Source of free-text answers for the capture flow.
///
/// `None` means the prompt was dismissed. An empty or whitespace-only
/// answer is treated the same way by the flow.
pub trait SymptomPrompter {
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Runs the two-step capture flow against `prompter`.
///
/// Returns `Some(entry)` only when both prompts produced non-empty answers;
/// otherwise returns `None` with no side effects.
pub fn capture_symptom(prompter: &mut dyn SymptomPrompter) -> Option<SymptomEntry> {
    let category = PromptText::new(prompter.prompt(CATEGORY_PROMPT)?).ok()?;
    let detail = PromptText::new(prompter.prompt(DETAIL_PROMPT)?).ok()?;
    Some(SymptomEntry::new(category, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Deterministic prompter for driving the flow from tests.
    struct ScriptedPrompter {
        answers: VecDeque<Option<String>>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|a| a.map(str::to_owned))
                    .collect(),
                asked: Vec::new(),
            }
        }
    }

    impl SymptomPrompter for ScriptedPrompter {
        fn prompt(&mut self, message: &str) -> Option<String> {
            self.asked.push(message.to_owned());
            self.answers.pop_front().flatten()
        }
    }

    #[test]
    fn test_both_answers_yield_an_entry() {
        let mut prompter = ScriptedPrompter::new(&[Some("Head"), Some("recurring migraine")]);
        let entry = capture_symptom(&mut prompter).unwrap();
        assert_eq!(entry.category(), "Head");
        assert_eq!(entry.detail(), "recurring migraine");
        assert_eq!(entry.to_line(), "Head: recurring migraine");
        assert_eq!(prompter.asked, vec![CATEGORY_PROMPT, DETAIL_PROMPT]);
    }

    #[test]
    fn test_dismissed_category_aborts_before_detail_prompt() {
        let mut prompter = ScriptedPrompter::new(&[None, Some("never asked")]);
        assert!(capture_symptom(&mut prompter).is_none());
        assert_eq!(prompter.asked, vec![CATEGORY_PROMPT]);
    }

    #[test]
    fn test_empty_category_aborts_before_detail_prompt() {
        let mut prompter = ScriptedPrompter::new(&[Some("   "), Some("never asked")]);
        assert!(capture_symptom(&mut prompter).is_none());
        assert_eq!(prompter.asked, vec![CATEGORY_PROMPT]);
    }

    #[test]
    fn test_dismissed_or_empty_detail_aborts() {
        let mut prompter = ScriptedPrompter::new(&[Some("Head"), None]);
        assert!(capture_symptom(&mut prompter).is_none());

        let mut prompter = ScriptedPrompter::new(&[Some("Head"), Some("")]);
        assert!(capture_symptom(&mut prompter).is_none());
    }

    #[test]
    fn test_answers_are_trimmed_in_the_formatted_line() {
        let mut prompter = ScriptedPrompter::new(&[Some("  Head "), Some(" ache  ")]);
        let entry = capture_symptom(&mut prompter).unwrap();
        assert_eq!(entry.to_line(), "Head: ache");
    }
}

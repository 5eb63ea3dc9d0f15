//! # Explanation Selector
//!
//! Maps `(branch, subject, question)` to an HTML explanation.
//!
//! # Behavior
//!
//! 1. The question is trimmed; a lowercase copy is used for matching while
//!    the trimmed original is echoed back.
//! 2. If the branch and subject resolve in the catalog, the subject's rule
//!    table is scanned top to bottom. The first rule with any trigger keyword
//!    contained in the question wins; otherwise the subject fallback applies.
//! 3. Unknown branches or subjects resolve to the generic template.
//!
//! Selection never fails and has no side effects. Identical inputs always
//! produce byte-identical output.

mod render;

pub use render::render;

use serde::Serialize;

use crate::catalog::{catalog, Template, GENERIC_TEMPLATE};

/// Which part of the rule table produced the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// A specific rule of the subject table, by position
    Rule { index: usize },
    /// The subject's default rule
    SubjectFallback,
    /// Branch or subject unknown
    Generic,
}

impl Selection {
    /// Short label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Selection::Rule { .. } => "rule",
            Selection::SubjectFallback => "subject_fallback",
            Selection::Generic => "generic",
        }
    }

    /// True if a specific rule matched
    pub fn is_specific(&self) -> bool {
        matches!(self, Selection::Rule { .. })
    }
}

/// A selected, not yet rendered, explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub branch: String,
    pub subject: String,
    /// Trimmed question in its original casing
    pub question: String,
    pub selection: Selection,
    pub template: Template,
}

/// Select the template for a question without rendering it
pub fn select(branch: &str, subject: &str, question: &str) -> Explanation {
    let question = question.trim();
    let lowered = question.to_lowercase();

    let (selection, template) = match catalog().subject(branch, subject) {
        Some(entry) => match entry.first_match(&lowered) {
            Some(index) => (
                Selection::Rule { index },
                entry.template(&entry.rules[index].content),
            ),
            None => (Selection::SubjectFallback, entry.fallback_template()),
        },
        None => (Selection::Generic, GENERIC_TEMPLATE),
    };

    Explanation {
        branch: branch.to_string(),
        subject: subject.to_string(),
        question: question.to_string(),
        selection,
        template,
    }
}

/// Select and render an explanation as an HTML fragment
pub fn explain(branch: &str, subject: &str, question: &str) -> String {
    render(&select(branch, subject, question))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CS: &str = "Computer Science";

    #[test]
    fn test_first_matching_rule_wins() {
        let explanation = select(CS, "Algorithms", "merge sort vs divide and conquer");
        // "merge" appears in both the sorting and divide-and-conquer rules
        assert_eq!(explanation.selection, Selection::Rule { index: 0 });
        assert!(explanation.template.keywords.contains(&"time complexity"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let explanation = select(CS, "Computer Networks", "What is DNS?");
        assert_eq!(explanation.selection, Selection::Rule { index: 2 });
        assert_eq!(explanation.question, "What is DNS?");
    }

    #[test]
    fn test_question_is_trimmed() {
        let explanation = select(CS, "Data Structures", "   heap  \n");
        assert_eq!(explanation.question, "heap");
        assert_eq!(explanation.selection, Selection::Rule { index: 5 });
    }

    #[test]
    fn test_subject_fallback() {
        let explanation = select(CS, "Algorithms", "When to use greedy algorithms?");
        assert_eq!(explanation.selection, Selection::SubjectFallback);
        assert!(explanation.template.examples[0].starts_with("Greedy algorithms"));
    }

    #[test]
    fn test_unknown_branch_is_generic() {
        let explanation = select("X", "Y", "stack");
        assert_eq!(explanation.selection, Selection::Generic);
        assert_eq!(explanation.template, GENERIC_TEMPLATE);
    }

    #[test]
    fn test_known_subject_under_unknown_branch_is_generic() {
        let explanation = select("Mechanical", "Data Structures", "stack");
        assert_eq!(explanation.selection, Selection::Generic);
    }

    #[test]
    fn test_selection_labels() {
        assert_eq!(Selection::Rule { index: 3 }.label(), "rule");
        assert_eq!(Selection::SubjectFallback.label(), "subject_fallback");
        assert_eq!(Selection::Generic.label(), "generic");
        assert!(Selection::Rule { index: 0 }.is_specific());
        assert!(!Selection::Generic.is_specific());
    }

    #[test]
    fn test_selection_serializes_tagged() {
        let json = serde_json::to_value(Selection::Rule { index: 2 }).unwrap();
        assert_eq!(json["kind"], "rule");
        assert_eq!(json["index"], 2);

        let json = serde_json::to_value(Selection::SubjectFallback).unwrap();
        assert_eq!(json["kind"], "subject_fallback");
    }
}

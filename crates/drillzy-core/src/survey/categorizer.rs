//! Deterministic survey scoring.
//!
//! Counts option-to-category hits across the submitted answers and picks
//! the archetype with the highest tally.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::SurveyError;
use crate::survey::{default_questions, SurveyAnswer, SurveyQuestion};

/// Result of categorizing a completed survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAssignment {
    /// The winning archetype.
    pub category: Category,
    /// Short human-readable justification.
    pub reasoning: String,
}

/// Every categorizer implementation scores a completed survey into exactly
/// one of the four archetypes. Persisting the result onto a profile is the
/// caller's responsibility.
pub trait Categorizer {
    /// Score the survey.
    ///
    /// # Errors
    /// Returns [`SurveyError::EmptySurvey`] for an empty answer list.
    fn categorize(&self, answers: &[SurveyAnswer]) -> Result<CategoryAssignment, SurveyError>;
}

/// The default tally-and-max categorizer.
///
/// For each answer, the option with matching answer text under the question
/// with matching prompt text contributes one point to its mapped category.
/// Answers that match no known option are silently ignored. Ties resolve to
/// the first category in [`Category::ALL`] order.
#[derive(Debug, Clone)]
pub struct TallyCategorizer {
    questions: Vec<SurveyQuestion>,
}

impl TallyCategorizer {
    /// Create a categorizer over the built-in question set.
    pub fn new() -> Self {
        Self {
            questions: default_questions(),
        }
    }

    /// Create a categorizer over a custom question set.
    pub fn with_questions(questions: Vec<SurveyQuestion>) -> Self {
        Self { questions }
    }

    /// Per-category hit counts, in [`Category::ALL`] order.
    pub fn tally(&self, answers: &[SurveyAnswer]) -> [u32; 4] {
        let mut counts = [0u32; 4];
        for answer in answers {
            let matched = self
                .questions
                .iter()
                .find(|q| q.text == answer.question)
                .and_then(|q| q.options.iter().find(|o| o.text == answer.answer));
            if let Some(option) = matched {
                let idx = Category::ALL
                    .iter()
                    .position(|c| *c == option.category)
                    .unwrap_or(0);
                counts[idx] += 1;
            }
        }
        counts
    }
}

impl Default for TallyCategorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Categorizer for TallyCategorizer {
    fn categorize(&self, answers: &[SurveyAnswer]) -> Result<CategoryAssignment, SurveyError> {
        if answers.is_empty() {
            return Err(SurveyError::EmptySurvey);
        }

        let counts = self.tally(answers);

        let mut winner = Category::ALL[0];
        let mut best = counts[0];
        for (idx, cat) in Category::ALL.iter().enumerate().skip(1) {
            if counts[idx] > best {
                best = counts[idx];
                winner = *cat;
            }
        }

        let reasoning = if best == 0 {
            format!(
                "None of your answers matched a known option, so you start as a {}. \
                 Retake the survey when you're ready to commit.",
                winner.display_name()
            )
        } else {
            format!(
                "{} of your {} answers pointed straight at the {} archetype. \
                 The survey sees you. There is no escaping it now.",
                best,
                answers.len(),
                winner.display_name()
            )
        };

        Ok(CategoryAssignment {
            category: winner,
            reasoning,
        })
    }
}

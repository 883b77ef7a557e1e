//! Intake survey: fixed question set and answer validation.
//!
//! The survey is five questions, each with four options, and every option
//! maps statically to exactly one [`Category`]. The question set is
//! load-time configuration, not runtime data.

mod categorizer;
mod generative;

pub use categorizer::{Categorizer, CategoryAssignment, TallyCategorizer};
pub use generative::GenerativeCategorizer;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::SurveyError;

/// One answer option within a survey question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Display text shown to the user.
    pub text: String,
    /// The archetype this option counts toward.
    pub category: Category,
}

/// A survey question with its fixed options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyQuestion {
    /// Stable question id (1-based position).
    pub id: u32,
    /// Prompt text.
    pub text: String,
    /// Fixed answer options, each mapped to one category.
    pub options: Vec<AnswerOption>,
}

/// A (question text, chosen answer text) pair from a completed survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyAnswer {
    pub question: String,
    pub answer: String,
}

fn option(text: &str, category: Category) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        category,
    }
}

/// The fixed five-question intake survey.
pub fn default_questions() -> Vec<SurveyQuestion> {
    vec![
        SurveyQuestion {
            id: 1,
            text: "When you face a challenge, what's your first instinct?".to_string(),
            options: vec![
                option("Analyze it from all angles", Category::Thinker),
                option("Start building a solution", Category::Builder),
                option("Brainstorm a wild idea", Category::Creator),
                option("Ask others for their input", Category::Connector),
            ],
        },
        SurveyQuestion {
            id: 2,
            text: "A friend is launching a project. How do you help?".to_string(),
            options: vec![
                option("Help them build the website", Category::Builder),
                option("Design a cool logo for them", Category::Creator),
                option("Connect them with potential users", Category::Connector),
                option("Create a strategic plan", Category::Thinker),
            ],
        },
        SurveyQuestion {
            id: 3,
            text: "You have a free Saturday. What do you do?".to_string(),
            options: vec![
                option("Create a piece of art or music", Category::Creator),
                option("Go to a networking event", Category::Connector),
                option("Read a book on a complex topic", Category::Thinker),
                option("Work on a DIY project at home", Category::Builder),
            ],
        },
        SurveyQuestion {
            id: 4,
            text: "What kind of compliment makes you feel most proud?".to_string(),
            options: vec![
                option("\"You bring people together so well!\"", Category::Connector),
                option("\"Your work is so practical and solid!\"", Category::Builder),
                option("\"That is such an original perspective!\"", Category::Creator),
                option("\"You understand things so deeply!\"", Category::Thinker),
            ],
        },
        SurveyQuestion {
            id: 5,
            text: "Pick a tool you couldn't live without.".to_string(),
            options: vec![
                option("A well-organized database", Category::Thinker),
                option("A blank canvas", Category::Creator),
                option("A hammer and nails", Category::Builder),
                option("A contact list", Category::Connector),
            ],
        },
    ]
}

/// Strict completeness check for callers that want to fail fast instead of
/// relying on the tally's ignore-unmatched policy.
///
/// Requires exactly one answer per question, in question order, with answer
/// text matching one of the question's options.
///
/// # Errors
/// Returns the first mismatch found.
pub fn validate_answers(
    questions: &[SurveyQuestion],
    answers: &[SurveyAnswer],
) -> Result<(), SurveyError> {
    if answers.is_empty() {
        return Err(SurveyError::EmptySurvey);
    }
    if answers.len() != questions.len() {
        return Err(SurveyError::IncompleteSurvey {
            expected: questions.len(),
            got: answers.len(),
        });
    }
    for (question, answer) in questions.iter().zip(answers) {
        if question.text != answer.question {
            return Err(SurveyError::UnknownQuestion(answer.question.clone()));
        }
        if !question.options.iter().any(|o| o.text == answer.answer) {
            return Err(SurveyError::UnknownOption {
                question: answer.question.clone(),
                answer: answer.answer.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_maps_to_one_category() {
        let questions = default_questions();
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert_eq!(q.options.len(), 4, "question {} should have 4 options", q.id);
            // Each question covers all four archetypes exactly once.
            for cat in Category::ALL {
                let hits = q.options.iter().filter(|o| o.category == cat).count();
                assert_eq!(hits, 1, "question {} maps {} options to {cat}", q.id, hits);
            }
        }
    }

    #[test]
    fn validate_accepts_complete_survey() {
        let questions = default_questions();
        let answers: Vec<SurveyAnswer> = questions
            .iter()
            .map(|q| SurveyAnswer {
                question: q.text.clone(),
                answer: q.options[0].text.clone(),
            })
            .collect();
        assert!(validate_answers(&questions, &answers).is_ok());
    }

    #[test]
    fn validate_rejects_empty_survey() {
        let questions = default_questions();
        assert!(matches!(
            validate_answers(&questions, &[]),
            Err(SurveyError::EmptySurvey)
        ));
    }

    #[test]
    fn validate_rejects_wrong_count() {
        let questions = default_questions();
        let answers = vec![SurveyAnswer {
            question: questions[0].text.clone(),
            answer: questions[0].options[0].text.clone(),
        }];
        assert!(matches!(
            validate_answers(&questions, &answers),
            Err(SurveyError::IncompleteSurvey { expected: 5, got: 1 })
        ));
    }

    #[test]
    fn validate_rejects_unknown_option() {
        let questions = default_questions();
        let mut answers: Vec<SurveyAnswer> = questions
            .iter()
            .map(|q| SurveyAnswer {
                question: q.text.clone(),
                answer: q.options[0].text.clone(),
            })
            .collect();
        answers[2].answer = "Sleep all day".to_string();
        assert!(matches!(
            validate_answers(&questions, &answers),
            Err(SurveyError::UnknownOption { .. })
        ));
    }
}

//! Intake survey commands.

use clap::Subcommand;
use drillzy_core::survey::{
    default_questions, validate_answers, Categorizer, GenerativeCategorizer, SurveyAnswer,
    TallyCategorizer,
};
use drillzy_core::{Config, Database};

use super::current_profile;

#[derive(Subcommand)]
pub enum SurveyAction {
    /// Print the survey questions and options
    Questions,
    /// Submit answers and assign an archetype to the active profile
    Submit {
        /// Chosen option number (1-4) for each question, in question order
        #[arg(long = "answer", required = true)]
        answers: Vec<usize>,
    },
}

pub fn run(action: SurveyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SurveyAction::Questions => {
            let questions = default_questions();
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        SurveyAction::Submit { answers } => {
            let db = Database::open()?;
            let profile = current_profile(&db)?;
            let questions = default_questions();

            if answers.len() != questions.len() {
                return Err(format!(
                    "expected {} answers, got {}",
                    questions.len(),
                    answers.len()
                )
                .into());
            }

            let mut survey_answers = Vec::with_capacity(questions.len());
            for (question, choice) in questions.iter().zip(&answers) {
                let option = choice
                    .checked_sub(1)
                    .and_then(|idx| question.options.get(idx))
                    .ok_or_else(|| {
                        format!(
                            "question {} has options 1-{}, got {}",
                            question.id,
                            question.options.len(),
                            choice
                        )
                    })?;
                survey_answers.push(SurveyAnswer {
                    question: question.text.clone(),
                    answer: option.text.clone(),
                });
            }
            validate_answers(&questions, &survey_answers)?;

            let config = Config::load()?;
            let assignment = if config.categorizer.generative_enabled {
                GenerativeCategorizer::from_config(&config.categorizer)
                    .categorize(&survey_answers)?
            } else {
                TallyCategorizer::new().categorize(&survey_answers)?
            };

            db.set_profile_category(&profile.id, assignment.category)?;
            println!("{}", serde_json::to_string_pretty(&assignment)?);
        }
    }
    Ok(())
}

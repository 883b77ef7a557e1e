//! Optional text-generation categorizer.
//!
//! Delegates scoring to an external text-generation HTTP API that is asked
//! to return the same four-label set. Any failure -- disabled config,
//! transport error, unparseable body, or a label outside the archetype set --
//! degrades to the deterministic tally rule, so the core contract never
//! depends on the network.

use reqwest::Client;
use serde_json::json;

use crate::category::Category;
use crate::error::SurveyError;
use crate::storage::CategorizerConfig;
use crate::survey::{Categorizer, CategoryAssignment, SurveyAnswer, TallyCategorizer};

/// Categorizer variant backed by a hosted text-generation API.
pub struct GenerativeCategorizer {
    endpoint: String,
    api_key: String,
    model: String,
    fallback: TallyCategorizer,
}

impl GenerativeCategorizer {
    /// Build from configuration. The caller should check
    /// [`CategorizerConfig::generative_enabled`] before preferring this
    /// variant over the tally rule.
    pub fn from_config(config: &CategorizerConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            fallback: TallyCategorizer::new(),
        }
    }

    fn prompt(answers: &[SurveyAnswer]) -> String {
        let mut prompt = String::from(
            "You are a career coach bot that assigns users one of four skill \
             archetypes based on a short survey:\n\
             - thinker: analytical, strategic, enjoys understanding complex systems\n\
             - builder: enjoys creating tangible things and seeing concrete results\n\
             - creator: artistic, imaginative, enjoys expressing new ideas\n\
             - connector: social, empathetic, enjoys building relationships\n\n\
             Reply with JSON of the form \
             {\"category\": \"<label>\", \"reasoning\": \"<one sentence>\"} \
             where <label> is exactly one of: thinker, builder, creator, connector. \
             The reasoning should be brief, menacing yet encouraging.\n\n\
             Survey answers:\n",
        );
        for answer in answers {
            prompt.push_str(&format!(
                "- Question: \"{}\"\n  Answer: \"{}\"\n",
                answer.question, answer.answer
            ));
        }
        prompt
    }

    async fn request(&self, answers: &[SurveyAnswer]) -> Result<CategoryAssignment, SurveyError> {
        let client = Client::new();
        let resp = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "prompt": Self::prompt(answers),
            }))
            .send()
            .await
            .map_err(|e| SurveyError::BackendRequest(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SurveyError::BackendRequest(format!(
                "HTTP {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SurveyError::BackendResponse(e.to_string()))?;
        Self::parse_assignment(&body)
    }

    /// Extract a `CategoryAssignment` from a backend response, rejecting any
    /// label outside the four-archetype set.
    fn parse_assignment(body: &serde_json::Value) -> Result<CategoryAssignment, SurveyError> {
        let label = body
            .get("category")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SurveyError::BackendResponse("missing 'category' field".to_string()))?;
        let category = Category::parse(label).ok_or_else(|| {
            SurveyError::BackendResponse(format!("'{label}' is not a known archetype"))
        })?;
        let reasoning = body
            .get("reasoning")
            .and_then(|v| v.as_str())
            .unwrap_or("The survey has spoken.")
            .to_string();
        Ok(CategoryAssignment {
            category,
            reasoning,
        })
    }

    fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.model.is_empty()
    }
}

impl Categorizer for GenerativeCategorizer {
    fn categorize(&self, answers: &[SurveyAnswer]) -> Result<CategoryAssignment, SurveyError> {
        if answers.is_empty() {
            return Err(SurveyError::EmptySurvey);
        }
        if !self.is_configured() {
            return self.fallback.categorize(answers);
        }

        let outcome = tokio::runtime::Runtime::new()
            .map_err(|e| SurveyError::BackendRequest(e.to_string()))
            .and_then(|rt| rt.block_on(self.request(answers)));

        match outcome {
            Ok(assignment) => Ok(assignment),
            // The backend is optional; the tally rule is always available.
            Err(SurveyError::BackendRequest(_)) | Err(SurveyError::BackendResponse(_)) => {
                self.fallback.categorize(answers)
            }
            Err(other) => Err(other),
        }
    }
}

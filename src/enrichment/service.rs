// ABOUTME: EnrichmentService implementation wrapping the LLM provider
// ABOUTME: Bounded by a configurable timeout; every failure path yields a fallback payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::warn;

use solstice_core::errors::{AppError, AppResult};
use solstice_core::geo::GeoPosition;
use solstice_core::models::{
    CosmicPerspective, Diet, EarthChanges, EnvironmentalImpact, FunFact, LifeMetrics, NearbySite,
    UserProfile,
};

use crate::llm::{prompts, ChatMessage, ChatRequest, GroundingMode, LlmProvider};

/// Fallback summary when the world-changes producer fails
const WORLD_CHANGES_FALLBACK: &str =
    "Could not retrieve information about world changes. The AI model may be temporarily unavailable.";

/// Fallback carbon-footprint fact when the impact producer fails
const CARBON_FOOTPRINT_FALLBACK: &str = "Could not calculate carbon footprint.";

/// Fallback water-consumption fact when the impact producer fails
const WATER_CONSUMPTION_FALLBACK: &str = "Could not calculate water consumption.";

/// Fallback narrative when the cosmic-perspective producer fails
const COSMIC_FALLBACK: &str =
    "Could not retrieve your cosmic perspective. The universe is vast, and so is your potential.";

/// Title of the synthetic site returned when the maps lookup finds nothing
const NO_SITES_TITLE: &str = "No Specific Sites Found";

/// Title of the synthetic site returned when the nearby producer fails
const NEARBY_ERROR_TITLE: &str = "Error";

/// Description of the synthetic site returned when the nearby producer fails
const NEARBY_ERROR_DESCRIPTION: &str = "Could not retrieve information about nearby sites.";

/// Narrative enrichment client
///
/// Holds the provider behind a trait object so tests can substitute a
/// scripted fake. Every producer call is bounded by the configured timeout;
/// a timeout is treated exactly like a provider failure.
pub struct EnrichmentService {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
    model: Option<String>,
}

impl EnrichmentService {
    /// Create a service over a provider
    #[must_use]
    pub const fn new(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            model: None,
        }
    }

    /// Override the model passed to the provider
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn request(&self, prompt: String) -> ChatRequest {
        let mut request = ChatRequest::prompt(prompt);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        request
    }

    /// Run a producer future under the configured timeout
    async fn bounded<T, F>(&self, producer: &'static str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(AppError::external_service(
                "gemini",
                format!("{producer} timed out after {:?}", self.timeout),
            )),
        }
    }

    /// Summary of world changes since the birth year, with citations
    ///
    /// Grounded against web search. Falls back to a fixed apology summary
    /// with no citations.
    pub async fn earth_changes(&self, birth_year: i32) -> EarthChanges {
        let request = self.request(prompts::world_changes(birth_year));
        let result = self
            .bounded("earth_changes", async {
                self.provider
                    .complete_grounded(&request, GroundingMode::Search)
                    .await
            })
            .await;

        match result {
            Ok(response) => EarthChanges {
                summary: response.text,
                sources: response.sources,
            },
            Err(error) => {
                warn!(%error, "earth changes producer failed, using fallback");
                EarthChanges {
                    summary: WORLD_CHANGES_FALLBACK.to_owned(),
                    sources: Vec::new(),
                }
            }
        }
    }

    /// Environmental-impact fact pair for country, age, and diet
    ///
    /// Schema-constrained JSON output. Falls back to the fixed fact pair.
    pub async fn environmental_impact(
        &self,
        country: &str,
        age_years: f64,
        diet: Diet,
    ) -> EnvironmentalImpact {
        let request = self.request(prompts::environmental_impact(country, age_years, diet));
        let schema = prompts::environmental_impact_schema();
        let result = self
            .bounded("environmental_impact", async {
                let raw = self.provider.complete_json(&request, &schema).await?;
                serde_json::from_str::<EnvironmentalImpact>(&raw).map_err(AppError::from)
            })
            .await;

        result.unwrap_or_else(|error| {
            warn!(%error, "environmental impact producer failed, using fallback");
            EnvironmentalImpact {
                carbon_footprint: CARBON_FOOTPRINT_FALLBACK.to_owned(),
                water_consumption: WATER_CONSUMPTION_FALLBACK.to_owned(),
            }
        })
    }

    /// Cosmic-perspective reflection for a birthdate
    ///
    /// Plain text generation. Falls back to the fixed reflection.
    pub async fn cosmic_perspective(&self, birthdate: NaiveDate) -> CosmicPerspective {
        let request = self.request(prompts::cosmic_perspective(birthdate));
        let result = self
            .bounded("cosmic_perspective", async {
                self.provider.complete(&request).await
            })
            .await;

        match result {
            Ok(response) => CosmicPerspective {
                text: response.content,
            },
            Err(error) => {
                warn!(%error, "cosmic perspective producer failed, using fallback");
                CosmicPerspective {
                    text: COSMIC_FALLBACK.to_owned(),
                }
            }
        }
    }

    /// Quirky personalized statistics for age and country
    ///
    /// Schema-constrained JSON output. Falls back to an empty list.
    pub async fn fun_facts(&self, age_years: f64, country: &str) -> Vec<FunFact> {
        let request = self.request(prompts::fun_facts(age_years, country));
        let schema = prompts::fun_facts_schema();
        let result = self
            .bounded("fun_facts", async {
                let raw = self.provider.complete_json(&request, &schema).await?;
                serde_json::from_str::<Vec<FunFact>>(&raw).map_err(AppError::from)
            })
            .await;

        result.unwrap_or_else(|error| {
            warn!(%error, "fun facts producer failed, using fallback");
            Vec::new()
        })
    }

    /// Nearby environmental sites for a position
    ///
    /// Grounded against maps. When the lookup succeeds but yields no place
    /// chunks, the narrative text itself is returned as a single synthetic
    /// site. Falls back to a single error site on failure.
    pub async fn nearby_sites(&self, position: GeoPosition) -> Vec<NearbySite> {
        let request = self.request(prompts::nearby_sites());
        let result = self
            .bounded("nearby_sites", async {
                self.provider
                    .complete_grounded(&request, GroundingMode::Maps(position))
                    .await
            })
            .await;

        match result {
            Ok(response) => {
                let sites: Vec<NearbySite> = response
                    .sources
                    .into_iter()
                    .filter_map(|source| source.maps)
                    .map(|place| NearbySite {
                        description: format!(
                            "Learn more about {} and plan your visit.",
                            place.title
                        ),
                        title: place.title,
                        uri: place.uri,
                    })
                    .collect();

                if sites.is_empty() {
                    return vec![NearbySite {
                        title: NO_SITES_TITLE.to_owned(),
                        description: response.text,
                        uri: "#".to_owned(),
                    }];
                }

                sites
            }
            Err(error) => {
                warn!(%error, "nearby sites producer failed, using fallback");
                vec![NearbySite {
                    title: NEARBY_ERROR_TITLE.to_owned(),
                    description: NEARBY_ERROR_DESCRIPTION.to_owned(),
                    uri: "#".to_owned(),
                }]
            }
        }
    }

    /// Single chat completion primed with the user's report context
    ///
    /// Unlike the producers, chat surfaces provider failures to the caller;
    /// the conversational surface shows its own error state.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the completion fails or times out.
    pub async fn chat(
        &self,
        profile: &UserProfile,
        metrics: &LifeMetrics,
        history: Vec<ChatMessage>,
        message: String,
    ) -> AppResult<String> {
        let mut messages = vec![ChatMessage::system(prompts::chat_system(profile, metrics))];
        messages.extend(history);
        messages.push(ChatMessage::user(message));

        let mut request = ChatRequest::new(messages);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        let response = self
            .bounded("chat", async { self.provider.complete(&request).await })
            .await?;
        Ok(response.content)
    }
}

impl std::fmt::Debug for EnrichmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentService")
            .field("provider", &self.provider.name())
            .field("timeout", &self.timeout)
            .field("model", &self.model)
            .finish()
    }
}

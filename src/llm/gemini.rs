// ABOUTME: Google Gemini LLM provider implementation over the Generative Language API
// ABOUTME: Supports text, JSON-schema constrained, and grounded generation modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio: <https://makersuite.google.com/app/apikey>
//!
//! ## Supported Models
//!
//! - `gemini-2.5-flash` (default): latest fast model
//! - `gemini-2.0-flash-exp`: experimental fast model
//! - `gemini-1.5-pro`: advanced reasoning capabilities
//! - `gemini-1.5-flash`: balanced performance and cost

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use solstice_core::errors::{AppError, ErrorCode};
use solstice_core::models::{GroundingLink, GroundingSource};

use super::{
    ChatMessage, ChatRequest, ChatResponse, GroundedResponse, GroundingMode, LlmCapabilities,
    LlmProvider, MessageRole, TokenUsage,
};

/// Environment variable for the Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Available Gemini models
const AVAILABLE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash-exp",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
];

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<GeminiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// A single content part; only text parts are used here
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Built-in tool selection (search or maps grounding)
#[derive(Debug, Serialize)]
struct GeminiTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    google_search: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    google_maps: Option<serde_json::Value>,
}

impl GeminiTool {
    fn search() -> Self {
        Self {
            google_search: Some(serde_json::json!({})),
            google_maps: None,
        }
    }

    fn maps() -> Self {
        Self {
            google_search: None,
            google_maps: Some(serde_json::json!({})),
        }
    }
}

/// Tool configuration carrying the retrieval position for maps grounding
#[derive(Debug, Serialize)]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata attached to a candidate
#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    grounding_chunks: Option<Vec<RawGroundingChunk>>,
}

/// One raw grounding chunk (web or maps)
#[derive(Debug, Deserialize)]
struct RawGroundingChunk {
    web: Option<RawGroundingLink>,
    maps: Option<RawGroundingLink>,
}

/// Raw link data inside a grounding chunk
#[derive(Debug, Deserialize)]
struct RawGroundingLink {
    uri: Option<String>,
    title: Option<String>,
}

impl RawGroundingLink {
    fn into_link(self) -> Option<GroundingLink> {
        match (self.uri, self.title) {
            (Some(uri), Some(title)) => Some(GroundingLink { uri, title }),
            _ => None,
        }
    }
}

/// Usage metadata from a Gemini response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error payload from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;
        Ok(Self::new(api_key))
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:{method}?key={}",
            self.api_key
        )
    }

    /// Split the request messages into Gemini contents and a system instruction
    fn build_contents(request: &ChatRequest) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut system_instruction = None;
        let mut contents = Vec::with_capacity(request.messages.len());

        for message in &request.messages {
            match message.role {
                MessageRole::System => {
                    system_instruction = Some(Self::text_content(None, message));
                }
                MessageRole::User => contents.push(Self::text_content(Some("user"), message)),
                MessageRole::Assistant => {
                    contents.push(Self::text_content(Some("model"), message));
                }
            }
        }

        (contents, system_instruction)
    }

    fn text_content(role: Option<&str>, message: &ChatMessage) -> GeminiContent {
        GeminiContent {
            role: role.map(str::to_owned),
            parts: vec![ContentPart {
                text: Some(message.content.clone()),
            }],
        }
    }

    fn generation_config(request: &ChatRequest) -> Option<GenerationConfig> {
        if request.temperature.is_none() && request.max_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
            response_mime_type: None,
            response_schema: None,
        })
    }

    /// POST a request body and decode the Gemini response envelope
    async fn send(&self, url: &str, body: &GeminiRequest) -> Result<GeminiResponse, AppError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::external_service("gemini", format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service("gemini", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::serialization(format!("Failed to parse Gemini response: {e}"))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(AppError::external_service("gemini", api_error.message));
        }

        Ok(gemini_response)
    }

    /// Map a non-success HTTP status to an `AppError`
    fn map_api_error(status: u16, body: &str) -> AppError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            429 => AppError::rate_limited("gemini"),
            401 | 403 => AppError::new(
                ErrorCode::ExternalServiceError,
                format!("Gemini authentication failed: {message}"),
            ),
            500..=599 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("Gemini service error: {message}"),
            ),
            _ => AppError::external_service("gemini", message),
        }
    }

    /// Extract the concatenated text of the first candidate
    fn extract_text(response: &GeminiResponse) -> Result<String, AppError> {
        let text = response
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::external_service(
                "gemini",
                "Response contained no text candidates",
            ));
        }

        Ok(text)
    }

    fn extract_usage(response: &GeminiResponse) -> Option<TokenUsage> {
        response.usage_metadata.as_ref().map(|usage| TokenUsage {
            prompt_tokens: usage.prompt.unwrap_or(0),
            completion_tokens: usage.candidates.unwrap_or(0),
            total_tokens: usage.total.unwrap_or(0),
        })
    }

    fn extract_finish_reason(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.finish_reason.clone())
    }

    fn extract_sources(response: &mut GeminiResponse) -> Vec<GroundingSource> {
        response
            .candidates
            .as_mut()
            .and_then(|candidates| candidates.first_mut())
            .and_then(|candidate| candidate.grounding_metadata.take())
            .and_then(|metadata| metadata.grounding_chunks)
            .map(|chunks| {
                chunks
                    .into_iter()
                    .map(|chunk| GroundingSource {
                        web: chunk.web.and_then(RawGroundingLink::into_link),
                        maps: chunk.maps.and_then(RawGroundingLink::into_link),
                    })
                    .filter(|source| source.web.is_some() || source.maps.is_some())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::full_featured()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let (contents, system_instruction) = Self::build_contents(request);
        let body = GeminiRequest {
            contents,
            system_instruction,
            generation_config: Self::generation_config(request),
            tools: None,
            tool_config: None,
        };

        debug!("Sending text completion to Gemini API");
        let response = self.send(&url, &body).await?;

        Ok(ChatResponse {
            content: Self::extract_text(&response)?,
            model: model.to_owned(),
            usage: Self::extract_usage(&response),
            finish_reason: Self::extract_finish_reason(&response),
        })
    }

    #[instrument(skip(self, request, schema), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete_json(
        &self,
        request: &ChatRequest,
        schema: &serde_json::Value,
    ) -> Result<String, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let (contents, system_instruction) = Self::build_contents(request);
        let body = GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: Some("application/json".to_owned()),
                response_schema: Some(schema.clone()),
            }),
            tools: None,
            tool_config: None,
        };

        debug!("Sending JSON-schema completion to Gemini API");
        let response = self.send(&url, &body).await?;
        Self::extract_text(&response)
    }

    #[instrument(skip(self, request, mode), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete_grounded(
        &self,
        request: &ChatRequest,
        mode: GroundingMode,
    ) -> Result<GroundedResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let (tools, tool_config) = match mode {
            GroundingMode::Search => (vec![GeminiTool::search()], None),
            GroundingMode::Maps(position) => (
                vec![GeminiTool::maps()],
                Some(ToolConfig {
                    retrieval_config: RetrievalConfig {
                        lat_lng: LatLng {
                            latitude: position.latitude,
                            longitude: position.longitude,
                        },
                    },
                }),
            ),
        };

        let (contents, system_instruction) = Self::build_contents(request);
        let body = GeminiRequest {
            contents,
            system_instruction,
            generation_config: Self::generation_config(request),
            tools: Some(tools),
            tool_config,
        };

        debug!("Sending grounded completion to Gemini API");
        let mut response = self.send(&url, &body).await?;

        Ok(GroundedResponse {
            text: Self::extract_text(&response)?,
            sources: Self::extract_sources(&mut response),
            model: model.to_owned(),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        let url = format!("{API_BASE_URL}/models?key={}", self.api_key);
        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::external_service("gemini", format!("Health check failed: {e}"))
        })?;
        Ok(response.status().is_success())
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

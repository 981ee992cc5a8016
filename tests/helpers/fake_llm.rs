// ABOUTME: Scripted fake LLM provider standing in for Gemini in tests
// ABOUTME: Succeed, fail, and delay modes with configurable grounding chunks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use solstice_core::errors::AppError;
use solstice_core::models::{GroundingLink, GroundingSource};
use solstice_life_server::llm::{
    ChatRequest, ChatResponse, GroundedResponse, GroundingMode, LlmCapabilities, LlmProvider,
};

/// What every call on the fake should do
#[derive(Debug, Clone)]
pub enum FakeMode {
    /// Resolve immediately with canned payloads
    Succeed,
    /// Fail immediately with an external-service error
    Fail,
    /// Sleep before resolving; combined with a short enrichment timeout this
    /// exercises the timeout-to-fallback path
    Delay(Duration),
}

/// Scripted provider for tests; no network access
pub struct FakeLlmProvider {
    mode: FakeMode,
    grounding: Vec<GroundingSource>,
    calls: AtomicUsize,
}

impl FakeLlmProvider {
    /// A fake that always succeeds, with no grounding chunks
    pub fn succeeding() -> Self {
        Self {
            mode: FakeMode::Succeed,
            grounding: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A fake that always fails
    pub fn failing() -> Self {
        Self {
            mode: FakeMode::Fail,
            grounding: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A fake that sleeps before succeeding
    pub fn delayed(delay: Duration) -> Self {
        Self {
            mode: FakeMode::Delay(delay),
            grounding: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Attach grounding chunks returned by grounded calls
    pub fn with_grounding(mut self, grounding: Vec<GroundingSource>) -> Self {
        self.grounding = grounding;
        self
    }

    /// A web grounding chunk
    pub fn web_source(title: &str, uri: &str) -> GroundingSource {
        GroundingSource {
            web: Some(GroundingLink {
                uri: uri.to_owned(),
                title: title.to_owned(),
            }),
            maps: None,
        }
    }

    /// A maps grounding chunk
    pub fn maps_source(title: &str, uri: &str) -> GroundingSource {
        GroundingSource {
            web: None,
            maps: Some(GroundingLink {
                uri: uri.to_owned(),
                title: title.to_owned(),
            }),
        }
    }

    /// Number of calls made across all modes
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn gate(&self) -> Result<usize, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.mode {
            FakeMode::Succeed => Ok(call),
            FakeMode::Fail => Err(AppError::external_service("fake", "scripted failure")),
            FakeMode::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(call)
            }
        }
    }
}

#[async_trait]
impl LlmProvider for FakeLlmProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn display_name(&self) -> &'static str {
        "Fake Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::full_featured()
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["fake-model"]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let call = self.gate().await?;
        Ok(ChatResponse {
            content: format!("fake reply {call}"),
            model: "fake-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn complete_json(
        &self,
        _request: &ChatRequest,
        schema: &serde_json::Value,
    ) -> Result<String, AppError> {
        let call = self.gate().await?;

        // Shape the canned payload after the requested schema so producer
        // parsing succeeds without per-test wiring.
        let payload = if schema.get("type").and_then(|t| t.as_str()) == Some("ARRAY") {
            json!([
                {
                    "label": "Skin Shed",
                    "value": format!("fact value {call}"),
                    "icon": "water",
                },
                {
                    "label": "Blink Time",
                    "value": "about 1.2 years spent blinking",
                    "icon": "clock",
                },
            ])
        } else {
            json!({
                "carbonFootprint": format!("about {call}00 tonnes of CO2e"),
                "waterConsumption": "about 30 million liters",
            })
        };

        Ok(payload.to_string())
    }

    async fn complete_grounded(
        &self,
        _request: &ChatRequest,
        _mode: GroundingMode,
    ) -> Result<GroundedResponse, AppError> {
        let call = self.gate().await?;
        Ok(GroundedResponse {
            text: format!("grounded text {call}"),
            sources: self.grounding.clone(),
            model: "fake-model".to_owned(),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

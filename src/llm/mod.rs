// ABOUTME: LLM provider abstraction layer for pluggable AI model integration
// ABOUTME: Defines the contract for text, JSON-schema, and grounded generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # LLM Provider Service Provider Interface
//!
//! The contract narrative enrichment producers program against. A provider
//! supports three generation modes:
//!
//! - **text**: plain chat completion ([`LlmProvider::complete`])
//! - **json**: schema-constrained structured output
//!   ([`LlmProvider::complete_json`])
//! - **grounded**: completion with search or maps grounding, returning
//!   citation chunks alongside the text ([`LlmProvider::complete_grounded`])
//!
//! Providers surface hard failures as [`AppError`]; converting failures into
//! user-facing fallback payloads is the enrichment layer's job, not the
//! provider's.

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use solstice_core::errors::AppError;
use solstice_core::geo::GeoPosition;
use solstice_core::models::GroundingSource;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    ///
    /// Indicates which generation modes a provider supports. Producers check
    /// these before requesting a mode the provider would reject.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports system messages
        const SYSTEM_MESSAGES = 0b0000_0001;
        /// Provider supports JSON-schema constrained output
        const JSON_MODE = 0b0000_0010;
        /// Provider supports web-search grounding with citations
        const SEARCH_GROUNDING = 0b0000_0100;
        /// Provider supports maps grounding with location retrieval
        const MAPS_GROUNDING = 0b0000_1000;
    }
}

impl LlmCapabilities {
    /// Capabilities of a basic text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::SYSTEM_MESSAGES
    }

    /// Capabilities of a full-featured provider
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::SYSTEM_MESSAGES
            .union(Self::JSON_MODE)
            .union(Self::SEARCH_GROUNDING)
            .union(Self::MAPS_GROUNDING)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if search grounding is supported
    #[must_use]
    pub const fn supports_search_grounding(&self) -> bool {
        self.contains(Self::SEARCH_GROUNDING)
    }

    /// Check if maps grounding is supported
    #[must_use]
    pub const fn supports_maps_grounding(&self) -> bool {
        self.contains(Self::MAPS_GROUNDING)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// String representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create a request with a single user prompt
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::user(text)])
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Grounding mode for a grounded generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundingMode {
    /// Ground against web search results
    Search,
    /// Ground against maps places near a position
    Maps(GeoPosition),
}

/// Response from a grounded generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedResponse {
    /// Generated text
    pub text: String,
    /// Citation chunks backing the text
    pub sources: Vec<GroundingSource>,
    /// Model used for generation
    pub model: String,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for the three generation modes
///
/// Implement this trait to add a new provider. The enrichment layer holds the
/// provider behind `Arc<dyn LlmProvider>` so tests can substitute a scripted
/// fake.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model used when the request does not specify one
    fn default_model(&self) -> &str;

    /// Available models for this provider
    fn available_models(&self) -> &'static [&'static str];

    /// Perform a plain chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;

    /// Perform a schema-constrained completion, returning the raw JSON text
    ///
    /// `schema` is a JSON Schema object in the provider's dialect. The caller
    /// parses the returned text into its typed payload.
    async fn complete_json(
        &self,
        request: &ChatRequest,
        schema: &serde_json::Value,
    ) -> Result<String, AppError>;

    /// Perform a grounded completion, returning text plus citations
    async fn complete_grounded(
        &self,
        request: &ChatRequest,
        mode: GroundingMode,
    ) -> Result<GroundedResponse, AppError>;

    /// Check that the provider is reachable and the API key is valid
    async fn health_check(&self) -> Result<bool, AppError>;
}

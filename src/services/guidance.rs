// ABOUTME: AI guidance business logic behind the /api/ai/guidance endpoint
// ABOUTME: Validates the request, builds the typed prompt and relays the LLM completion text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::constants::llm::{MAX_TOKENS, SERVICE_NAME, TEMPERATURE};
use crate::errors::{AppError, AppResult};
use crate::llm::{build_prompt, ChatMessage, ChatRequest, LlmProvider, PromptKind};

/// Body of a guidance request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuidanceRequest {
    /// Nutrition facts or profile data, depending on `type`
    #[serde(default)]
    pub nutrition: Option<Value>,
    /// Goals and targets
    #[serde(default, rename = "userGoals")]
    pub user_goals: Option<Value>,
    /// Template name, `guidance` when absent
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Body of a successful guidance response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceResponse {
    /// Trimmed completion text, passed through unparsed
    pub message: String,
    /// Template that produced it
    #[serde(rename = "type")]
    pub kind: String,
}

/// A validated request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrompt {
    /// Selected template
    pub kind: PromptKind,
    /// Rendered prompt text
    pub prompt: String,
}

impl GuidanceRequest {
    /// Validate the request and render its prompt
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `nutrition` or `userGoals` is missing or
    /// null, or if `type` names no known template
    pub fn prepare(&self) -> AppResult<PreparedPrompt> {
        let (Some(nutrition), Some(user_goals)) = (&self.nutrition, &self.user_goals) else {
            return Err(AppError::invalid_input(
                "Nutrition data and user goals are required",
            ));
        };

        let kind = self
            .kind
            .as_deref()
            .map_or(Ok(PromptKind::default()), |name| name.parse::<PromptKind>())?;

        Ok(PreparedPrompt {
            kind,
            prompt: build_prompt(kind, nutrition, user_goals),
        })
    }
}

/// Generate guidance text for a request
///
/// # Errors
///
/// - `InvalidInput` from [`GuidanceRequest::prepare`], before any outbound call
/// - `ConfigMissing` when no LLM provider is configured
/// - `ExternalServiceError` when the provider fails or returns blank text
#[instrument(skip_all, fields(prompt_type = tracing::field::Empty))]
pub async fn generate_guidance(
    provider: Option<&dyn LlmProvider>,
    request: &GuidanceRequest,
) -> AppResult<GuidanceResponse> {
    let prepared = request.prepare()?;
    tracing::Span::current().record("prompt_type", prepared.kind.as_str());

    let provider = provider.ok_or_else(|| AppError::config_missing(SERVICE_NAME))?;

    let chat_request = ChatRequest::new(vec![ChatMessage::user(prepared.prompt)])
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

    let response = provider.complete(&chat_request).await?;
    let message = response.content.trim();
    if message.is_empty() {
        return Err(AppError::external_service(
            SERVICE_NAME,
            "API returned no completion text",
        ));
    }

    info!(
        provider = provider.name(),
        model = %response.model,
        prompt_tokens = response.usage.as_ref().map_or(0, |usage| usage.prompt_tokens),
        completion_tokens = response.usage.as_ref().map_or(0, |usage| usage.completion_tokens),
        total_tokens = response.usage.as_ref().map_or(0, |usage| usage.total_tokens),
        expects_json = prepared.kind.expects_json(),
        "Guidance generated"
    );

    Ok(GuidanceResponse {
        message: message.to_owned(),
        kind: prepared.kind.as_str().to_owned(),
    })
}

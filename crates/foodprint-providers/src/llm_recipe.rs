// ABOUTME: Recipe data lookup backed by any OpenAI-compatible chat completions endpoint
// ABOUTME: Asks for a JSON ingredient-to-grams object and extracts it from the reply text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! # LLM Recipe Lookup
//!
//! Works with `OpenAI`, Ollama (`http://localhost:11434/v1`), vLLM, and other
//! servers exposing `/chat/completions`. The reply is expected to contain a
//! single JSON object such as `{"chicken": 200, "onion": 50}`; surrounding
//! prose and Markdown code fences are tolerated.

use crate::http_client::{join_url, shared_client, status_error, transport_error};
use async_trait::async_trait;
use foodprint_core::constants::units::GRAMS_PER_KG;
use foodprint_core::errors::{AppError, AppResult};
use foodprint_core::models::IngredientQuantityMap;
use foodprint_intelligence::spi::RecipeDataLookup;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

const SERVICE: &str = "RecipeLLM";

const SYSTEM_PROMPT: &str = "You estimate recipes for restaurant dishes. \
Reply with one JSON object only, mapping each raw ingredient name to its weight in grams \
for a single standard restaurant serving. Use plain ingredient names and numeric gram values.";

/// Connection settings for the recipe model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmRecipeConfig {
    /// API base URL including the version segment, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Bearer token; local servers usually need none
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Recipe lookup asking a chat model for ingredient weights
#[derive(Debug, Clone)]
pub struct LlmRecipeLookup {
    client: Client,
    config: LlmRecipeConfig,
}

impl LlmRecipeLookup {
    /// Create a lookup for the configured endpoint
    #[must_use]
    pub fn new(config: LlmRecipeConfig) -> Self {
        Self {
            client: shared_client().clone(),
            config,
        }
    }

    /// Ingredient map from a model reply, `None` when nothing usable remains.
    ///
    /// Values may be numbers or numeric strings with an optional `g` suffix;
    /// negative, non-finite, and non-numeric values are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` when the reply holds no JSON object.
    pub fn parse_ingredients(reply: &str) -> AppResult<Option<IngredientQuantityMap>> {
        let json = extract_json_object(reply).ok_or_else(|| {
            AppError::external_service(SERVICE, "reply did not contain a JSON object")
        })?;
        let Value::Object(entries) = serde_json::from_str::<Value>(json)? else {
            return Err(AppError::external_service(SERVICE, "reply JSON is not an object"));
        };

        let mut ingredients = IngredientQuantityMap::new();
        for (name, value) in entries {
            let name = name.trim();
            match grams_from(&value) {
                Some(grams) if !name.is_empty() => {
                    ingredients.insert(name.to_owned(), grams);
                }
                _ => debug!(ingredient = name, ?value, "Dropping unusable ingredient entry"),
            }
        }
        Ok((!ingredients.is_empty()).then_some(ingredients))
    }
}

/// Slice from the first `{` to the last `}`, skipping fences and prose
fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

fn grams_from(value: &Value) -> Option<f64> {
    let grams = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => grams_from_text(s)?,
        _ => return None,
    };
    (grams.is_finite() && grams >= 0.0).then_some(grams)
}

/// `"120"`, `"120g"`, `"1.5 kg"`, `"500 mg"`; any other unit is rejected
fn grams_from_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);
    let amount: f64 = number.parse().ok()?;
    let scale = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "g" | "gm" | "gms" | "gram" | "grams" => 1.0,
        "kg" | "kgs" | "kilogram" | "kilograms" => GRAMS_PER_KG,
        "mg" | "milligram" | "milligrams" => 1.0 / 1_000.0,
        _ => return None,
    };
    Some(amount * scale)
}

#[async_trait]
impl RecipeDataLookup for LlmRecipeLookup {
    #[instrument(skip(self), fields(service = SERVICE, model = %self.config.model))]
    async fn lookup(&self, dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Dish: {dish_name}"),
                },
            ],
            temperature: 0.0,
        };

        let mut http_request = self
            .client
            .post(join_url(&self.config.base_url, "chat/completions"))
            .header(CONTENT_TYPE, "application/json")
            .json(&request);
        if let Some(api_key) = &self.config.api_key {
            http_request = http_request.header(AUTHORIZATION, format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;
        if !status.is_success() {
            return Err(status_error(SERVICE, status, &body));
        }

        let chat: ChatResponse = serde_json::from_str(&body)?;
        let Some(content) = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        else {
            warn!("Recipe model returned no content");
            return Ok(None);
        };
        Self::parse_ingredients(&content)
    }
}

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::SuggesterConfig;
use crate::error::BoardError;
use crate::model::Recipe;
use crate::suggest::{build_user_prompt, parse_recipe_list, RecipeSuggester, RECIPE_ASSISTANT_PROMPT};

pub struct OpenAISuggester {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAISuggester {
    /// Create a new OpenAI suggester from configuration
    pub fn new(config: &SuggesterConfig) -> Result<Self, BoardError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                BoardError::Suggestion("OPENAI_API_KEY not found in config or environment".into())
            })?;

        Ok(OpenAISuggester {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAISuggester {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

#[async_trait]
impl RecipeSuggester for OpenAISuggester {
    fn name(&self) -> &str {
        "openai"
    }

    async fn suggest(&self, ingredients: &[String]) -> Result<Vec<Recipe>, BoardError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": RECIPE_ASSISTANT_PROMPT},
                    {"role": "user", "content": build_user_prompt(ingredients)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                BoardError::Suggestion("Failed to extract content from response".into())
            })?;

        parse_recipe_list(content)
    }
}

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::BoardError;
use crate::model::{HistoryEntry, Recipe, RecipesRequest, RecipesResponse};

/// The two calls the board makes against a recipe backend
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `POST /get_recipes`
    async fn get_recipes(
        &self,
        request: &RecipesRequest,
    ) -> Result<RecipesResponse<Recipe>, BoardError>;

    /// `GET /recipe_history`
    async fn recipe_history(&self) -> Result<RecipesResponse<HistoryEntry>, BoardError>;
}

/// Talks to a remote backend over HTTP
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpRecipeApi {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration; no timeout is applied unless one is configured
    pub fn from_config(config: &ServerConfig) -> Result<Self, BoardError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(HttpRecipeApi {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // Error statuses still carry a JSON body, so the status code is not checked.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BoardError> {
        let status = response.status();
        let body = response.text().await?;
        debug!("{} {}", status, body);
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn get_recipes(
        &self,
        request: &RecipesRequest,
    ) -> Result<RecipesResponse<Recipe>, BoardError> {
        let response = self
            .client
            .post(format!("{}/get_recipes", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn recipe_history(&self) -> Result<RecipesResponse<HistoryEntry>, BoardError> {
        let response = self
            .client
            .get(format!("{}/recipe_history", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }
}

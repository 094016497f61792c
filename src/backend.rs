use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::api::RecipeApi;
use crate::error::BoardError;
use crate::model::{HistoryEntry, Recipe, RecipesRequest, RecipesResponse};
use crate::suggest::RecipeSuggester;

/// How many generated recipes the history call returns
pub const HISTORY_LIMIT: usize = 10;

/// Serves the board's two calls in-process, keeping recent suggestions in memory
pub struct LocalBackend {
    suggester: Box<dyn RecipeSuggester>,
    history: Mutex<VecDeque<HistoryEntry>>,
}

impl LocalBackend {
    pub fn new(suggester: Box<dyn RecipeSuggester>) -> Self {
        LocalBackend {
            suggester,
            history: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl RecipeApi for LocalBackend {
    async fn get_recipes(
        &self,
        request: &RecipesRequest,
    ) -> Result<RecipesResponse<Recipe>, BoardError> {
        if request.ingredients.is_empty() {
            return Ok(RecipesResponse::error(BoardError::NoIngredients.to_string()));
        }

        let recipes = match self.suggester.suggest(&request.ingredients).await {
            Ok(recipes) => recipes,
            Err(e) => return Ok(RecipesResponse::error(e.to_string())),
        };
        info!(
            "{} suggested {} recipes",
            self.suggester.name(),
            recipes.len()
        );

        let created_at = Utc::now();
        let mut history = self.history.lock().await;
        for recipe in &recipes {
            history.push_front(HistoryEntry {
                recipe: recipe.clone(),
                created_at: Some(created_at.into()),
            });
        }
        history.truncate(HISTORY_LIMIT);

        Ok(RecipesResponse::ok(recipes))
    }

    async fn recipe_history(&self) -> Result<RecipesResponse<HistoryEntry>, BoardError> {
        let history = self.history.lock().await;
        Ok(RecipesResponse::ok(history.iter().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::FallbackSuggester;

    fn request(ingredients: &[&str]) -> RecipesRequest {
        RecipesRequest {
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_ingredients_rejected() {
        let backend = LocalBackend::new(Box::new(FallbackSuggester::templates_only()));
        let response = backend.get_recipes(&request(&[])).await.unwrap();
        assert_eq!(response.error.as_deref(), Some("No ingredients provided"));

        let history = backend.recipe_history().await.unwrap();
        assert_eq!(history.recipes.map(|r| r.len()), Some(0));
    }

    #[tokio::test]
    async fn test_history_newest_first_and_capped() {
        let backend = LocalBackend::new(Box::new(FallbackSuggester::templates_only()));
        for ingredient in ["apple", "bean", "carrot", "date"] {
            backend.get_recipes(&request(&[ingredient])).await.unwrap();
        }

        let history = backend
            .recipe_history()
            .await
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].recipe.name, "Oven-Roasted date Medley");
        assert_eq!(history[2].recipe.name, "Delicious date Bowl");
        // Only the last recipe of the oldest batch survives the cap
        assert_eq!(history[9].recipe.name, "Oven-Roasted apple Medley");
        assert!(history.iter().all(|e| e.recipe.name != "Delicious apple Bowl"));
        assert!(history.iter().all(|e| e.created_at.is_some()));
    }
}

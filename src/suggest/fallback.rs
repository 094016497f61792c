use async_trait::async_trait;
use log::{info, warn};

use crate::error::BoardError;
use crate::model::Recipe;
use crate::suggest::{RecipeSuggester, TemplateSuggester};

/// Asks the primary suggester and falls back to the template recipes on any failure
pub struct FallbackSuggester {
    primary: Option<Box<dyn RecipeSuggester>>,
}

impl FallbackSuggester {
    pub fn new(primary: Box<dyn RecipeSuggester>) -> Self {
        FallbackSuggester {
            primary: Some(primary),
        }
    }

    /// A suggester with no model behind it; always answers with templates
    pub fn templates_only() -> Self {
        FallbackSuggester { primary: None }
    }
}

#[async_trait]
impl RecipeSuggester for FallbackSuggester {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn suggest(&self, ingredients: &[String]) -> Result<Vec<Recipe>, BoardError> {
        if let Some(primary) = &self.primary {
            match primary.suggest(ingredients).await {
                Ok(recipes) => {
                    info!("Got {} recipes from {}", recipes.len(), primary.name());
                    return Ok(recipes);
                }
                Err(e) => {
                    warn!("Suggester {} failed: {}", primary.name(), e);
                }
            }
        }
        TemplateSuggester.suggest(ingredients).await
    }
}

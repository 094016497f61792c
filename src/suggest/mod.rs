mod fallback;
mod open_ai;
mod prompt;
mod template;

pub use fallback::FallbackSuggester;
pub use open_ai::OpenAISuggester;
pub use prompt::{build_user_prompt, parse_recipe_list, RECIPE_ASSISTANT_PROMPT};
pub use template::TemplateSuggester;

use async_trait::async_trait;

use crate::error::BoardError;
use crate::model::Recipe;

/// Unified trait for anything that can come up with recipes for a set of ingredients
#[async_trait]
pub trait RecipeSuggester: Send + Sync {
    /// Get the suggester name (e.g., "openai", "template")
    fn name(&self) -> &str;

    /// Suggest recipes that use the given ingredients
    async fn suggest(&self, ingredients: &[String]) -> Result<Vec<Recipe>, BoardError>;
}

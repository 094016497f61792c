use serde::Deserialize;

use crate::error::BoardError;
use crate::model::{lenient_text, Recipe};

/// The system prompt sent with every suggestion request.
pub const RECIPE_ASSISTANT_PROMPT: &str =
    "You are a helpful recipe assistant. Provide responses in valid JSON format.";

/// Build the user prompt asking for three recipes that use `ingredients`.
pub fn build_user_prompt(ingredients: &[String]) -> String {
    format!(
        "Suggest 3 simple recipes using these ingredients: {}.
For each recipe, provide:
1. A creative name
2. A brief description (1-2 sentences)
3. Preparation time (e.g., \"20 minutes\")
4. Difficulty level (Easy, Medium, or Hard)

Format the response as a JSON array with objects containing:
name, description, prep_time, difficulty",
        ingredients.join(", ")
    )
}

// Every field is required; an incomplete suggestion fails the whole reply.
#[derive(Deserialize)]
struct SuggestedRecipe {
    #[serde(deserialize_with = "lenient_text")]
    name: String,
    #[serde(deserialize_with = "lenient_text")]
    description: String,
    #[serde(deserialize_with = "lenient_text")]
    prep_time: String,
    #[serde(deserialize_with = "lenient_text")]
    difficulty: String,
}

impl From<SuggestedRecipe> for Recipe {
    fn from(value: SuggestedRecipe) -> Self {
        Recipe {
            name: value.name,
            description: value.description,
            prep_time: value.prep_time,
            difficulty: value.difficulty,
        }
    }
}

/// Parse the model's reply into recipes.
///
/// Models sometimes wrap the array in a markdown code fence; that is stripped first.
pub fn parse_recipe_list(content: &str) -> Result<Vec<Recipe>, BoardError> {
    let mut body = content.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // Drop the info string (e.g. "json") on the opening fence line
        body = rest.split_once('\n').map_or("", |(_, tail)| tail);
        body = body.trim_end().strip_suffix("```").unwrap_or(body).trim();
    }
    let suggested: Vec<SuggestedRecipe> = serde_json::from_str(body)
        .map_err(|e| BoardError::Suggestion(format!("Unusable recipe list: {}", e)))?;
    Ok(suggested.into_iter().map(Recipe::from).collect())
}

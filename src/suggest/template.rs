use async_trait::async_trait;

use crate::error::BoardError;
use crate::model::Recipe;
use crate::suggest::RecipeSuggester;

/// Fills three fixed recipe templates with the given ingredients
pub struct TemplateSuggester;

impl TemplateSuggester {
    pub fn recipes(ingredients: &[String]) -> Vec<Recipe> {
        let first = ingredients.first().map(String::as_str);
        let all = ingredients.join(", ");
        let first_two = ingredients
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            Recipe {
                name: format!("Delicious {} Bowl", first.unwrap_or("Ingredient")),
                description: format!(
                    "A flavorful dish combining {} with fresh herbs and spices.",
                    all
                ),
                prep_time: "20 minutes".to_string(),
                difficulty: "Easy".to_string(),
            },
            Recipe {
                name: format!("{} & Veggie Stir Fry", first.unwrap_or("Ingredient")),
                description: format!(
                    "An Asian-inspired stir fry featuring {} with fresh vegetables.",
                    first_two
                ),
                prep_time: "25 minutes".to_string(),
                difficulty: "Medium".to_string(),
            },
            Recipe {
                name: format!("Oven-Roasted {} Medley", first.unwrap_or("Ingredients")),
                description: format!(
                    "Oven-roasted {} with garlic and herbs. Simple yet delicious!",
                    all
                ),
                prep_time: "35 minutes".to_string(),
                difficulty: "Easy".to_string(),
            },
        ]
    }
}

#[async_trait]
impl RecipeSuggester for TemplateSuggester {
    fn name(&self) -> &str {
        "template"
    }

    async fn suggest(&self, ingredients: &[String]) -> Result<Vec<Recipe>, BoardError> {
        Ok(Self::recipes(ingredients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_use_ingredients() {
        let ingredients = vec![
            "tofu".to_string(),
            "broccoli".to_string(),
            "rice".to_string(),
        ];
        let recipes = TemplateSuggester::recipes(&ingredients);
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0].name, "Delicious tofu Bowl");
        assert!(recipes[0].description.contains("tofu, broccoli, rice"));
        assert_eq!(recipes[1].name, "tofu & Veggie Stir Fry");
        assert!(recipes[1].description.contains("featuring tofu, broccoli with"));
        assert_eq!(recipes[1].difficulty, "Medium");
        assert_eq!(recipes[2].prep_time, "35 minutes");
    }

    #[test]
    fn test_templates_without_ingredients() {
        let recipes = TemplateSuggester::recipes(&[]);
        assert_eq!(recipes[0].name, "Delicious Ingredient Bowl");
        assert_eq!(recipes[2].name, "Oven-Roasted Ingredients Medley");
    }
}

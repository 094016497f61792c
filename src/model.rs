use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::date::Timestamp;
use crate::error::BoardError;

/// A recipe suggestion as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub prep_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub difficulty: String,
}

/// Accept a string, a number or a bool and keep its text. `null` reads as empty.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {}",
            other
        ))),
    }
}

/// A previously generated recipe together with the time it was created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `POST /get_recipes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipesRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Body of both backend responses: either `{"recipes": [...]}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipesResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> RecipesResponse<T> {
    pub fn ok(recipes: Vec<T>) -> Self {
        Self {
            recipes: Some(recipes),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            recipes: None,
            error: Some(message.into()),
        }
    }

    /// Split the response into the recipe list or the error it carries.
    ///
    /// An empty `error` string counts as no error. A body with neither field is malformed.
    pub fn into_result(self) -> Result<Vec<T>, BoardError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Err(BoardError::Backend(message));
        }
        self.recipes.ok_or_else(|| {
            BoardError::Decode(<serde_json::Error as serde::de::Error>::missing_field(
                "recipes",
            ))
        })
    }
}

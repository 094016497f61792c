pub mod api;
pub mod backend;
pub mod board;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod render;
pub mod suggest;

use log::{info, warn};
use std::sync::Arc;

pub use api::{HttpRecipeApi, RecipeApi};
pub use backend::LocalBackend;
pub use board::{AlertLog, ContainerState, ModalClick, Notifier, Page, RecipeBoard};
pub use config::BoardConfig;
pub use error::BoardError;
pub use model::{HistoryEntry, Recipe, RecipesRequest, RecipesResponse};

use crate::suggest::{FallbackSuggester, OpenAISuggester};

/// Build the API handle for a board: the configured remote server, or an in-process
/// backend when `local` is set.
pub fn api_from_config(config: &BoardConfig, local: bool) -> Result<Arc<dyn RecipeApi>, BoardError> {
    if !local {
        info!("Using recipe server at {}", config.server.base_url);
        return Ok(Arc::new(HttpRecipeApi::from_config(&config.server)?));
    }

    let suggester = match OpenAISuggester::new(&config.suggester) {
        Ok(openai) => FallbackSuggester::new(Box::new(openai)),
        Err(e) => {
            warn!("{}; answering with template recipes", e);
            FallbackSuggester::templates_only()
        }
    };
    info!("Using in-process recipe backend");
    Ok(Arc::new(LocalBackend::new(Box::new(suggester))))
}

use log::{debug, error, info};
use std::sync::{Arc, Mutex};

use crate::api::RecipeApi;
use crate::error::BoardError;
use crate::model::{HistoryEntry, Recipe, RecipesRequest, RecipesResponse};
use crate::render;

pub const EMPTY_INGREDIENTS_ALERT: &str = "Please add at least one ingredient";
pub const RECIPES_FAILED_ALERT: &str = "Failed to get recipes. Please try again later.";
pub const HISTORY_FAILED_ALERT: &str = "Failed to load recipe history.";

/// Receives user-facing alerts
pub trait Notifier: Send {
    fn alert(&mut self, message: &str);
}

/// Notifier that keeps every alert; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct AlertLog(Arc<Mutex<Vec<String>>>);

impl AlertLog {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Notifier for AlertLog {
    fn alert(&mut self, message: &str) {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

/// What the recipes container currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerState {
    #[default]
    Idle,
    Loading,
    Results,
    NoResults,
}

/// Where a click on the history modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Content,
}

/// Rendered view of the board. Each HTML field is replaced wholesale on render.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub input: String,
    pub input_focused: bool,
    pub ingredients_list: String,
    pub recipes_container: String,
    pub container: ContainerState,
    pub history_list: String,
    pub modal_visible: bool,
}

impl Page {
    pub fn modal_html(&self) -> String {
        render::modal(&self.history_list, self.modal_visible)
    }
}

/// An in-flight `POST /get_recipes`, detached from the board that started it
pub struct PendingRecipes {
    api: Arc<dyn RecipeApi>,
    request: RecipesRequest,
}

impl PendingRecipes {
    pub fn request(&self) -> &RecipesRequest {
        &self.request
    }

    pub async fn send(self) -> Result<RecipesResponse<Recipe>, BoardError> {
        self.api.get_recipes(&self.request).await
    }
}

/// An in-flight `GET /recipe_history`
pub struct PendingHistory {
    api: Arc<dyn RecipeApi>,
}

impl PendingHistory {
    pub async fn send(self) -> Result<RecipesResponse<HistoryEntry>, BoardError> {
        self.api.recipe_history().await
    }
}

/// The ingredient board: owns the ingredient set and the page rendered from it
pub struct RecipeBoard {
    ingredients: Vec<String>,
    page: Page,
    api: Arc<dyn RecipeApi>,
    notifier: Box<dyn Notifier>,
}

impl RecipeBoard {
    pub fn new(api: Arc<dyn RecipeApi>, notifier: Box<dyn Notifier>) -> Self {
        RecipeBoard {
            ingredients: Vec::new(),
            page: Page::default(),
            api,
            notifier,
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Replace the contents of the ingredient input field
    pub fn type_input(&mut self, text: impl Into<String>) {
        self.page.input = text.into();
    }

    /// Add whatever is in the input field
    pub fn submit_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.page.input);
        let added = self.add_ingredient(&text);
        if !added {
            self.page.input = text;
        }
        added
    }

    /// Key press in the input field; only Enter submits
    pub fn submit_key(&mut self, key: &str) -> bool {
        key == "Enter" && self.submit_input()
    }

    /// Add an ingredient after trimming it.
    ///
    /// Returns false without touching anything when the trimmed text is empty or
    /// already present. On success the input field is cleared and focused.
    pub fn add_ingredient(&mut self, text: &str) -> bool {
        let ingredient = text.trim();
        if ingredient.is_empty() || self.ingredients.iter().any(|i| i == ingredient) {
            return false;
        }
        self.ingredients.push(ingredient.to_string());
        self.render_ingredients();
        self.page.input.clear();
        self.page.input_focused = true;
        true
    }

    pub fn remove_ingredient(&mut self, name: &str) {
        self.ingredients.retain(|i| i != name);
        self.render_ingredients();
    }

    pub fn clear_all(&mut self) {
        self.ingredients.clear();
        self.render_ingredients();
    }

    pub fn render_ingredients(&mut self) {
        self.page.ingredients_list = render::ingredient_tags(&self.ingredients);
    }

    /// Validate the ingredient set and show the loading card.
    ///
    /// Returns `None` after alerting when there is nothing to look up.
    pub fn begin_recipe_lookup(&mut self) -> Option<PendingRecipes> {
        if self.ingredients.is_empty() {
            self.notifier.alert(EMPTY_INGREDIENTS_ALERT);
            return None;
        }
        self.page.recipes_container = render::loading_card();
        self.page.container = ContainerState::Loading;
        info!("Looking up recipes for {} ingredients", self.ingredients.len());
        Some(PendingRecipes {
            api: Arc::clone(&self.api),
            request: RecipesRequest {
                ingredients: self.ingredients.clone(),
            },
        })
    }

    /// Apply the outcome of a recipe lookup. A backend error leaves the container as is.
    pub fn finish_recipe_lookup(&mut self, outcome: Result<RecipesResponse<Recipe>, BoardError>) {
        match outcome.and_then(RecipesResponse::into_result) {
            Ok(recipes) => {
                debug!("Rendering {} recipes", recipes.len());
                self.page.recipes_container = render::recipe_cards(&recipes);
                self.page.container = if recipes.is_empty() {
                    ContainerState::NoResults
                } else {
                    ContainerState::Results
                };
            }
            Err(BoardError::Backend(message)) => {
                self.notifier.alert(&format!("Error: {}", message));
            }
            Err(e) => {
                error!("Error: {}", e);
                self.notifier.alert(RECIPES_FAILED_ALERT);
            }
        }
    }

    pub async fn get_recipes(&mut self) {
        if let Some(pending) = self.begin_recipe_lookup() {
            let outcome = pending.send().await;
            self.finish_recipe_lookup(outcome);
        }
    }

    pub fn begin_history_lookup(&self) -> PendingHistory {
        PendingHistory {
            api: Arc::clone(&self.api),
        }
    }

    /// Apply the outcome of a history lookup and open the modal on success
    pub fn finish_history_lookup(
        &mut self,
        outcome: Result<RecipesResponse<HistoryEntry>, BoardError>,
    ) {
        match outcome.and_then(RecipesResponse::into_result) {
            Ok(entries) => {
                self.page.history_list = render::history_list(&entries);
                self.page.modal_visible = true;
            }
            Err(BoardError::Backend(message)) => {
                self.notifier.alert(&format!("Error: {}", message));
            }
            Err(e) => {
                error!("Error: {}", e);
                self.notifier.alert(HISTORY_FAILED_ALERT);
            }
        }
    }

    pub async fn view_recipe_history(&mut self) {
        let outcome = self.begin_history_lookup().send().await;
        self.finish_history_lookup(outcome);
    }

    pub fn close_modal(&mut self) {
        self.page.modal_visible = false;
    }

    pub fn click_modal(&mut self, target: ModalClick) {
        if target == ModalClick::Backdrop {
            self.close_modal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingApi {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecipeApi for CountingApi {
        async fn get_recipes(
            &self,
            _request: &RecipesRequest,
        ) -> Result<RecipesResponse<Recipe>, BoardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RecipesResponse::ok(Vec::new()))
        }

        async fn recipe_history(&self) -> Result<RecipesResponse<HistoryEntry>, BoardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RecipesResponse::ok(Vec::new()))
        }
    }

    fn board() -> (RecipeBoard, Arc<CountingApi>, AlertLog) {
        let api = Arc::new(CountingApi::default());
        let alerts = AlertLog::default();
        let board = RecipeBoard::new(api.clone(), Box::new(alerts.clone()));
        (board, api, alerts)
    }

    #[test]
    fn test_add_trims_edges_only() {
        let (mut board, _, _) = board();
        assert!(board.add_ingredient("  egg "));
        assert!(board.add_ingredient(" brown  sugar\t"));
        assert_eq!(board.ingredients(), ["egg", "brown  sugar"]);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let (mut board, _, _) = board();
        assert!(board.add_ingredient("egg"));
        assert!(!board.add_ingredient(" egg "));
        assert!(board.add_ingredient("Egg"));
        assert_eq!(board.ingredients(), ["egg", "Egg"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut board, _, _) = board();
        board.type_input("   ");
        assert!(!board.submit_input());
        assert!(board.ingredients().is_empty());
        assert_eq!(board.page().input, "   ");
        assert!(!board.page().input_focused);
    }

    #[test]
    fn test_submit_clears_and_focuses_input() {
        let (mut board, _, _) = board();
        board.type_input("flour");
        assert!(!board.submit_key("a"));
        assert_eq!(board.page().input, "flour");
        assert!(board.submit_key("Enter"));
        assert!(board.page().input.is_empty());
        assert!(board.page().input_focused);
        assert!(board.page().ingredients_list.contains(r#"data-ingredient="flour""#));
    }

    #[test]
    fn test_remove_missing_is_unchanged() {
        let (mut board, _, _) = board();
        board.add_ingredient("egg");
        let before = board.page().ingredients_list.clone();
        board.remove_ingredient("milk");
        assert_eq!(board.ingredients(), ["egg"]);
        assert_eq!(board.page().ingredients_list, before);
    }

    #[test]
    fn test_render_replaces_list() {
        let (mut board, _, _) = board();
        board.add_ingredient("egg");
        board.add_ingredient("flour");
        board.remove_ingredient("egg");
        assert_eq!(board.page().ingredients_list.matches("ingredient-tag").count(), 1);
        board.clear_all();
        assert!(board.page().ingredients_list.is_empty());
        board.clear_all();
        assert!(board.page().ingredients_list.is_empty());
    }

    #[tokio::test]
    async fn test_empty_lookup_alerts_without_request() {
        let (mut board, api, alerts) = board();
        board.get_recipes().await;
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
        assert_eq!(alerts.messages(), [EMPTY_INGREDIENTS_ALERT]);
        assert_eq!(board.page().container, ContainerState::Idle);
        assert!(board.page().recipes_container.is_empty());
    }

    #[test]
    fn test_begin_lookup_shows_loading() {
        let (mut board, _, _) = board();
        board.add_ingredient("egg");
        let pending = board.begin_recipe_lookup().unwrap();
        assert_eq!(pending.request().ingredients, ["egg"]);
        assert_eq!(board.page().container, ContainerState::Loading);
        assert!(board.page().recipes_container.contains("Finding recipes..."));
    }

    #[test]
    fn test_backend_error_keeps_loading() {
        let (mut board, _, alerts) = board();
        board.add_ingredient("egg");
        let _pending = board.begin_recipe_lookup();
        board.finish_recipe_lookup(Ok(RecipesResponse::error("User not authenticated")));
        assert_eq!(alerts.messages(), ["Error: User not authenticated"]);
        assert_eq!(board.page().container, ContainerState::Loading);
        assert!(board.page().recipes_container.contains("Finding recipes..."));
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let (mut board, _, alerts) = board();
        board.add_ingredient("egg");
        let _pending = board.begin_recipe_lookup();
        let malformed = serde_json::from_str::<RecipesResponse<Recipe>>("not json")
            .map_err(BoardError::from);
        board.finish_recipe_lookup(malformed);
        assert_eq!(alerts.messages(), [RECIPES_FAILED_ALERT]);
    }

    #[test]
    fn test_modal_clicks() {
        let (mut board, _, _) = board();
        board.finish_history_lookup(Ok(RecipesResponse::ok(Vec::new())));
        assert!(board.page().modal_visible);
        assert!(board.page().history_list.contains("No recipe history found."));
        board.click_modal(ModalClick::Content);
        assert!(board.page().modal_visible);
        board.click_modal(ModalClick::Backdrop);
        assert!(!board.page().modal_visible);
    }

    #[test]
    fn test_close_button_hides_modal() {
        let (mut board, _, _) = board();
        board.finish_history_lookup(Ok(RecipesResponse::ok(Vec::new())));
        assert!(board.page().modal_visible);
        board.close_modal();
        assert!(!board.page().modal_visible);
        assert!(board.page().modal_html().contains("display: none"));
        board.close_modal();
        assert!(!board.page().modal_visible);
    }

    #[test]
    fn test_history_error_leaves_modal_closed() {
        let (mut board, _, alerts) = board();
        board.finish_history_lookup(Ok(RecipesResponse::error("User not authenticated")));
        assert!(!board.page().modal_visible);
        assert_eq!(alerts.messages(), ["Error: User not authenticated"]);
    }
}

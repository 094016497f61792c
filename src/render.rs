//! HTML projections of board state.
//!
//! Every function here is a pure function of its input; callers replace the target
//! fragment wholesale with the returned markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::date::format_history_date;
use crate::model::{HistoryEntry, Recipe};

pub const NO_HISTORY_MESSAGE: &str = "No recipe history found.";

/// One removable tag per ingredient, in insertion order.
pub fn ingredient_tags(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|ingredient| {
            format!(
                r#"<div class="ingredient-tag">{}<span class="remove-btn" data-ingredient="{}">×</span></div>"#,
                encode_text(ingredient),
                encode_double_quoted_attribute(ingredient)
            )
        })
        .collect()
}

fn card(icon: &str, title: &str, body: &str, meta: &str, badge: &str) -> String {
    format!(
        r#"<div class="recipe-card"><div class="recipe-image"><i class="fas {}"></i></div><div class="recipe-content"><h3>{}</h3><p>{}</p><div class="recipe-meta"><span>{}</span><span class="tech-badge">{}</span></div></div></div>"#,
        icon, title, body, meta, badge
    )
}

pub fn loading_card() -> String {
    card(
        "fa-spinner fa-spin",
        "Finding recipes...",
        "Our AI is analyzing your ingredients and finding the best recipes for you.",
        "Please wait",
        "AI Processing",
    )
}

pub fn no_recipes_card() -> String {
    card(
        "fa-exclamation-circle",
        "No recipes found",
        "We couldn't find any recipes with those ingredients. Try adding more ingredients.",
        "Try again",
        "No results",
    )
}

pub fn recipe_card(recipe: &Recipe) -> String {
    card(
        "fa-utensils",
        &encode_text(&recipe.name),
        &encode_text(&recipe.description),
        &format!("Ready in: {}", encode_text(&recipe.prep_time)),
        &encode_text(&recipe.difficulty),
    )
}

/// Contents of the recipes container for a successful lookup.
pub fn recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return no_recipes_card();
    }
    recipes.iter().map(recipe_card).collect()
}

pub fn history_item(entry: &HistoryEntry) -> String {
    let recipe = &entry.recipe;
    format!(
        r#"<div class="history-item"><h3>{}</h3><p>{}</p><div class="history-meta"><span>{} • {}</span><span>{}</span></div></div>"#,
        encode_text(&recipe.name),
        encode_text(&recipe.description),
        encode_text(&recipe.prep_time),
        encode_text(&recipe.difficulty),
        format_history_date(entry.created_at.as_ref())
    )
}

pub fn history_list(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("<p>{}</p>", NO_HISTORY_MESSAGE);
    }
    entries.iter().map(history_item).collect()
}

/// The history modal wrapping an already rendered history list.
pub fn modal(history_list: &str, visible: bool) -> String {
    format!(
        r#"<div class="modal" style="display: {}"><div class="modal-content"><div class="modal-header"><h2>Recipe History</h2><button class="close-modal">&times;</button></div><div class="history-list" id="history-list">{}</div></div></div>"#,
        if visible { "flex" } else { "none" },
        history_list
    )
}

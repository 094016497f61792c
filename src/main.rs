use log::debug;
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_board::{api_from_config, BoardConfig, ModalClick, Notifier, RecipeBoard};

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

const HELP: &str = "commands: add <ingredient> | remove <ingredient> | clear | recipes | history | close | backdrop | show | quit";

fn show(board: &RecipeBoard) {
    let page = board.page();
    println!("ingredients: {}", page.ingredients_list);
    println!("recipes ({:?}): {}", page.container, page.recipes_container);
    if page.modal_visible {
        println!("history: {}", page.modal_html());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let local = env::args().skip(1).any(|arg| arg == "--local");
    let config = BoardConfig::load()?;
    let api = api_from_config(&config, local)?;
    let mut board = RecipeBoard::new(api, Box::new(StderrNotifier));

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let (command, argument) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));
        debug!("command {:?} argument {:?}", command, argument);

        match command {
            "add" => {
                board.type_input(argument);
                board.submit_key("Enter");
            }
            "remove" => board.remove_ingredient(argument.trim()),
            "clear" => board.clear_all(),
            "recipes" => board.get_recipes().await,
            "history" => board.view_recipe_history().await,
            "close" => board.close_modal(),
            "backdrop" => board.click_modal(ModalClick::Backdrop),
            "show" => {}
            "quit" | "exit" => break,
            "" => continue,
            _ => {
                eprintln!("{}", HELP);
                continue;
            }
        }
        show(&board);
    }

    Ok(())
}

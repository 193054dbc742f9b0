//! Terminal demo for the menu manager core.
//!
//! Wires the state machine to the in-memory store and a terminal
//! confirmation prompt, and renders the view projection as plain text. All
//! logic lives in the library; this binary is glue.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::info;

use menu_manager_frontend::api::ConfirmDelete;
use menu_manager_frontend::view::{project, FormMode, MenuView, EMPTY_STATE_MESSAGE};
use menu_manager_frontend::{MemoryStore, MenuApp};
use shared::MenuItem;

/// Delete confirmation backed by a terminal prompt.
struct TerminalConfirm;

impl ConfirmDelete for TerminalConfirm {
    fn confirm(&self, item_name: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete \"{}\"?", item_name))
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

fn seed_store() -> MemoryStore {
    MemoryStore::with_items(vec![
        MenuItem {
            id: 1,
            name: "Fried Rice".to_string(),
            description: Some("House special with chicken and egg".to_string()),
            price: 25000.0,
            image_url: None,
        },
        MenuItem {
            id: 2,
            name: "Iced Tea".to_string(),
            description: None,
            price: 8000.0,
            image_url: None,
        },
    ])
}

fn render(view: &MenuView) {
    println!();
    println!("=== Menu ===");
    if view.show_loading {
        println!("(working...)");
    }
    if let Some(error) = &view.error_banner {
        println!("Error: {}", error);
    }
    if view.show_empty {
        println!("{}", EMPTY_STATE_MESSAGE);
    }
    for row in &view.rows {
        println!("#{} {} - {}", row.id, row.name, row.price_label);
        match &row.image_url {
            Some(url) => println!("    {} [{}]", row.description, url),
            None => println!("    {}", row.description),
        }
    }
    if let Some(notice) = &view.form.notice {
        println!("! {}", notice);
    }
    if view.form.mode == FormMode::Edit {
        println!("(editing: submit overwrites the selected item)");
    }
}

/// Prompt for each form field, seeded with the draft's current values.
fn fill_form(app: &mut MenuApp<MemoryStore>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let form = &mut app.state.form;
    form.name = Input::with_theme(&theme)
        .with_prompt("Name")
        .with_initial_text(form.name.clone())
        .allow_empty(true)
        .interact_text()?;
    form.price = Input::with_theme(&theme)
        .with_prompt("Price")
        .with_initial_text(form.price.clone())
        .allow_empty(true)
        .interact_text()?;
    form.description = Input::with_theme(&theme)
        .with_prompt("Description")
        .with_initial_text(form.description.clone())
        .allow_empty(true)
        .interact_text()?;
    form.image_url = Input::with_theme(&theme)
        .with_prompt("Image URL")
        .with_initial_text(form.image_url.clone())
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn prompt_id() -> Result<i64> {
    let id = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Item id")
        .interact_text()?;
    Ok(id)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("starting menu manager demo");

    let mut app = MenuApp::new(seed_store());
    app.load().await;
    let prompt = TerminalConfirm;

    loop {
        render(&project(&app.state));

        let actions = ["Add item", "Edit item", "Delete item", "Reload", "Quit"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                app.reset_form();
                fill_form(&mut app)?;
                app.submit().await;
            }
            1 => {
                let id = prompt_id()?;
                match app.state.items.iter().find(|item| item.id == id).cloned() {
                    Some(item) => {
                        app.begin_edit(&item);
                        fill_form(&mut app)?;
                        app.submit().await;
                    }
                    None => println!("No item with id {}", id),
                }
            }
            2 => {
                let id = prompt_id()?;
                app.request_remove(id, &prompt).await;
            }
            3 => app.load().await,
            _ => break,
        }
    }

    info!("exiting");
    Ok(())
}

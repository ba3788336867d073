use clap::Parser;

use calorie_tracker_rs::app::{AddOutcome, App};
use calorie_tracker_rs::cli::{Cli, Command};
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::interface::{
    draw_page, prompt_action, prompt_form, prompt_row, prompt_yes_no, MenuChoice, Page, View,
};
use calorie_tracker_rs::logging;
use calorie_tracker_rs::state::{FileStore, ItemStorage};

type TerminalApp = App<FileStore, Page>;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let storage = ItemStorage::new(FileStore::open(&cli.file));
    let mut app = App::new(storage, Page::new())?;
    app.init(&cli.name);

    match cli.command.unwrap_or_default() {
        Command::Run => cmd_run(&mut app),
        Command::List => {
            draw_page(app.view());
            Ok(())
        }
        Command::Add { name, calories } => cmd_add(&mut app, name, calories),
        Command::Clear { yes } => cmd_clear(&mut app, yes),
    }
}

/// Interactive loop: one action per iteration, each run to completion.
fn cmd_run(app: &mut TerminalApp) -> Result<()> {
    loop {
        draw_page(app.view());

        let page = app.view();
        let choice = prompt_action(&page.controls, !page.rows.is_empty())?;

        match choice {
            MenuChoice::Add => {
                let input = prompt_form(&app.view().read_form_input())?;
                app.view_mut().fill_form(input.name, input.calories);
                report_add(app.add()?);
            }
            MenuChoice::Edit => {
                if let Some(key) = prompt_row(&app.view().rows)? {
                    app.edit_select(&key)?;
                }
            }
            MenuChoice::Update => {
                let input = prompt_form(&app.view().read_form_input())?;
                app.view_mut().fill_form(input.name, input.calories);
                app.update()?;
            }
            MenuChoice::Delete => app.delete()?,
            MenuChoice::Back => app.back()?,
            MenuChoice::Clear => {
                if prompt_yes_no("Remove every item?", false)? {
                    app.clear_all()?;
                }
            }
            MenuChoice::Quit => return Ok(()),
        }
    }
}

/// Add one item without entering the interactive loop.
fn cmd_add(app: &mut TerminalApp, name: String, calories: String) -> Result<()> {
    app.view_mut().fill_form(name, calories);
    report_add(app.add()?);
    draw_page(app.view());
    Ok(())
}

fn cmd_clear(app: &mut TerminalApp, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Remove every item?", false)? {
        return Ok(());
    }
    app.clear_all()?;
    println!("All items cleared.");
    Ok(())
}

fn report_add(outcome: AddOutcome) {
    match outcome {
        AddOutcome::Added(item) => println!("Added {} ({} calories).", item.name, item.calories),
        AddOutcome::MissingField => println!("Both a meal name and calories are required."),
        AddOutcome::NameTaken(name) => println!("'{}' is already in the list.", name),
    }
}

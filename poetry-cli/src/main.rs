mod cli;
mod commands;
mod logger;
mod menu;
mod output;
mod prompts;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use poetry_core::{Poem, PoemCollection};

use crate::cli::{Cli, Command};
use crate::commands::{add_poem, delete_poem, generate_report, load_collection};
use crate::output::print_poems;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logger::init_cli_logger(cli.verbose);
    debug!(file = ?cli.file, "using collection file");

    match &cli.command {
        None | Some(Command::Menu) => {
            // The menu starts empty; the user loads the file explicitly
            let mut collection = PoemCollection::new();
            menu::run_menu(&mut collection, &cli.file)?;
        }
        Some(Command::List) => {
            let collection = load_collection(&cli.file)?;
            list_poems(&collection)?;
        }
        Some(Command::Search { term }) => {
            let collection = load_collection(&cli.file)?;
            let results = collection.search_poems(term);
            if results.is_empty() {
                println!("{}", "No poems found.".yellow());
            } else {
                print_poems(&results)?;
            }
        }
        Some(Command::Add {
            title,
            author,
            year,
            text,
            theme,
        }) => {
            let poem = Poem::new(
                title.as_str(),
                author.as_str(),
                *year,
                text.as_str(),
                theme.as_str(),
            );
            add_poem(&cli.file, poem)?;
            println!("{}", "Poem added.".green());
        }
        Some(Command::Delete { title }) => {
            if delete_poem(&cli.file, title)? {
                println!("{}", "Poem deleted.".green());
            } else {
                println!("{} No poem titled '{}'.", "!".yellow(), title);
            }
        }
        Some(Command::Report {
            kind,
            value,
            save,
            output,
        }) => {
            generate_report(&cli.file, *kind, value.as_deref(), *save, output.as_deref())?;
        }
    }

    Ok(())
}

fn list_poems(collection: &PoemCollection) -> Result<()> {
    if collection.is_empty() {
        println!("{}", "No poems found.".yellow());
        return Ok(());
    }

    let all: Vec<&Poem> = collection.poems().iter().collect();
    print_poems(&all)
}

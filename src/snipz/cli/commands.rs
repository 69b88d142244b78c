use super::render::{render_message, render_names};
use super::setup::{Cli, Commands};
use clap::Parser;
use snipz::api::{CmdResult, SnipzApi};
use snipz::config::SnipzPaths;
use snipz::error::Result;
use snipz::store::fs_backend::FsBackend;
use std::io::{IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::setup_logging();

    let paths = SnipzPaths::from_home()?;
    tracing::debug!(file = %paths.snippets_file.display(), "using snippet file");
    let mut api = SnipzApi::open(&paths)?;

    match cli.command {
        Commands::List => handle_list(&api),
        Commands::Add { name } => handle_add(&mut api, &name),
        Commands::Show { name } => handle_show(&api, &name),
        Commands::Delete { name } => handle_delete(&mut api, &name),
    }
}

fn handle_list(api: &SnipzApi<FsBackend>) -> Result<()> {
    let result = api.list()?;
    if !result.listed_names.is_empty() {
        println!("{}", render_names(&result.listed_names));
    }
    print_messages(&result);
    Ok(())
}

fn handle_add(api: &mut SnipzApi<FsBackend>, name: &str) -> Result<()> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!("Paste your snippet. End input with an empty line:");
        std::io::stdout().flush()?;
    }
    let result = api.add(name, stdin.lock())?;
    print_messages(&result);
    Ok(())
}

fn handle_show(api: &SnipzApi<FsBackend>, name: &str) -> Result<()> {
    let result = api.show(name)?;
    if let Some(body) = &result.snippet {
        println!("{}", body);
    }
    print_messages(&result);
    Ok(())
}

fn handle_delete(api: &mut SnipzApi<FsBackend>, name: &str) -> Result<()> {
    let result = api.delete(name)?;
    print_messages(&result);
    Ok(())
}

fn print_messages(result: &CmdResult) {
    for message in &result.messages {
        println!("{}", render_message(message));
    }
}

//! deck-shortcuts - manage and launch personal application shortcuts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_shortcuts_lib::{Diagnostics, Registry, Settings, Shortcut, read_shortcuts};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deck-shortcuts")]
#[command(about = "Personal launcher shortcut registry")]
struct Args {
    /// Settings file (defaults to ~/.deck-shortcuts/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shortcut file, overriding the settings
    #[arg(long)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print every stored shortcut
    List {
        /// Print the raw JSON array
        #[arg(long)]
        json: bool,
    },
    /// Add one shortcut
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        path: String,
        #[arg(long)]
        icon: Option<String>,
        /// Explicit id (a new one is generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// Merge shortcuts from a JSON array file
    Import { file: PathBuf },
    /// Launch a stored shortcut by id
    Launch { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default(),
    };
    if let Some(store) = args.store {
        settings.shortcuts_path = store;
    }
    if args.debug {
        settings.log.level = "debug".into();
    }

    let diagnostics = Diagnostics::init(&settings.log).context("failed to set up logging")?;
    let result = run(args.command, &settings, diagnostics.clone());
    diagnostics.shutdown().context("failed to flush log file")?;
    result
}

fn run(command: Cmd, settings: &Settings, diagnostics: Diagnostics) -> Result<()> {
    let registry = Registry::open(settings, diagnostics.clone());

    match command {
        Cmd::List { json } => {
            let shortcuts = registry.get_shortcuts();
            if json {
                println!("{}", serde_json::to_string_pretty(&shortcuts)?);
            } else {
                for s in &shortcuts {
                    println!("{}\t{}\t{}", s.id, s.name, s.path);
                }
            }
        }
        Cmd::Add {
            name,
            path,
            icon,
            id,
        } => {
            let mut shortcut = Shortcut::new(name, path, icon);
            if let Some(id) = id {
                shortcut.id = id;
            }
            let id = shortcut.id.clone();
            if registry.store().add(shortcut)? {
                println!("{id}");
            } else {
                println!("{id} already exists, kept the stored entry");
            }
        }
        Cmd::Import { file } => {
            let incoming = diagnostics
                .scope(|| read_shortcuts(&file))
                .with_context(|| format!("cannot import {}", file.display()))?;
            let before = registry.get_shortcuts().len();
            let merged = registry.set_shortcuts(incoming)?;
            println!("added {} shortcuts", merged.len() - before);
        }
        Cmd::Launch { id } => {
            let receipt = registry.launch_shortcut(&id)?;
            println!("started pid {}", receipt.pid);
        }
    }
    Ok(())
}

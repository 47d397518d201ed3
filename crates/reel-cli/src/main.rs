//! reel CLI
//!
//! Command-line interface for reel - a flat-file playlist manager.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use reel_core::{Config, StorageError, Store};

mod commands;
mod editor;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "reel - manage a playlist of titles and URLs and export it")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging to stderr (or the configured log file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use this playlist file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the playlist file if it does not exist
    Init,
    /// Add an entry
    Add {
        /// Entry title
        title: String,
        /// Media URL
        url: String,
    },
    /// List all entries
    #[command(alias = "ls")]
    List,
    /// Edit an entry
    Edit {
        /// Entry ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// New title (prompted if omitted)
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// New URL (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Replace the playlist with a JSON list of entries
    Import {
        /// JSON file to import ('-' for stdin)
        #[arg(conflicts_with = "edit")]
        file: Option<PathBuf>,
        /// Compose the payload in $EDITOR, starting from the current playlist
        #[arg(short, long)]
        edit: bool,
    },
    /// Export the playlist (json, m3u, m3u8, csv, sql)
    Export {
        /// Format selector
        format: String,
        /// Write to this file or directory instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List supported export formats
    Formats,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_file, locale, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let result = run(cli, &output);

    if let Err(e) = &result {
        if let Some(hint) = e
            .downcast_ref::<StorageError>()
            .and_then(StorageError::recovery_suggestion)
        {
            eprintln!("hint: {}", hint);
        }
    }

    result
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), output);
    }

    let mut config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    logging::init(&config, cli.verbose);

    let store = Store::open(&config)
        .with_context(|| format!("Failed to open playlist at {:?}", config.data_file))?;

    match cli.command {
        Commands::Init => commands::init::init(&store, output),
        Commands::Add { title, url } => commands::entry::add(&store, title, url, output),
        Commands::List => commands::entry::list(&store, output),
        Commands::Edit { id, title, url } => commands::entry::edit(&store, id, title, url, output),
        Commands::Delete { id, yes } => commands::entry::delete(&store, id, yes, output),
        Commands::Import { file, edit } => commands::transfer::import(&store, file, edit, output),
        Commands::Export { format, output: destination } => {
            commands::transfer::export(&store, &format, destination, output)
        }
        Commands::Formats => commands::transfer::formats(output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

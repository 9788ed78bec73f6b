mod commands;
mod config;
mod store;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::AddArgs;
use crate::store::{Database, UserStore};
use crate::ui::{Level, OutputFormat};

/// Manage a local list of user records
#[derive(Parser, Debug)]
#[command(name = "userlist", author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit machine-readable JSON events instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Database file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the user table
    List {
        /// Hide records whose enabled flag is off
        #[arg(long)]
        hide_disabled: bool,
    },

    /// Create a new user record
    Add(AddArgs),

    /// Delete user records by id
    Remove {
        /// Ids of the records to delete
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    ui::set_debug_mode(cli.debug);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, true);

    if let Err(e) = run(&cli) {
        ui::emit(Level::Error, "userlist.error", &format!("Error: {e:#}"), None);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let db = match &cli.database {
        Some(path) => Database::open(path)?,
        None => Database::new()?,
    };
    let store = UserStore::new(db);

    ui::debug(&format!(
        "database: {}",
        cli.database
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "default".to_string())
    ));

    match &cli.command {
        Commands::List { hide_disabled } => commands::list_users(&store, *hide_disabled),
        Commands::Add(args) => commands::add_user(&store, args),
        Commands::Remove { ids, yes } => commands::remove_users(&store, ids, *yes),
    }
}

//! # Stockroom Command-Line Library
//!
//! Core library for the `stockroom` binary. Parses the command line, opens
//! the product store and dispatches to one command handler.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing & dispatch)
//! ├── config.rs       ◄─── Database path and log filter
//! ├── commands/
//! │   ├── mod.rs      ◄─── Outcome type
//! │   └── product.rs  ◄─── add, list, search, update, remove, export
//! ├── view.rs         ◄─── Table and JSON rendering
//! └── error.rs        ◄─── AppError and exit codes
//! ```
//!
//! ## Invocation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Invocation                                    │
//! │                                                                         │
//! │  1. Parse arguments (clap) ───────────────────────────────────────────► │
//! │     • usage errors exit with status 2                                   │
//! │                                                                         │
//! │  2. Resolve configuration ────────────────────────────────────────────► │
//! │     • --db  >  STOCKROOM_DB_PATH  >  inventory.db beside the binary     │
//! │                                                                         │
//! │  3. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber, RUST_LOG aware, written to stderr             │
//! │                                                                         │
//! │  4. Open Database ────────────────────────────────────────────────────► │
//! │     • file created and products table ensured if absent                 │
//! │                                                                         │
//! │  5. Run Command, Close Database ──────────────────────────────────────► │
//! │     • connection released on success and on error                       │
//! │                                                                         │
//! │  6. Render ───────────────────────────────────────────────────────────► │
//! │     • stdout: table or JSON   stderr: error message                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::product::{self, ProductForm, ProductPatch};
use commands::Outcome;
use config::AppConfig;
use error::AppError;
use stockroom_core::ProductId;
use stockroom_db::{Database, DbConfig};

/// Small inventory manager backed by a local SQLite file.
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about)]
pub struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Database file (overrides STOCKROOM_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a product
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        price: String,

        /// Thousands separators are accepted ("1,200")
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,

        #[arg(long)]
        units: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Show every product
    List,

    /// Find products where any field matches KEYWORD
    Search {
        #[arg(allow_hyphen_values = true)]
        keyword: String,
    },

    /// Change fields of a product; omitted fields keep their value
    Update {
        id: ProductId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,

        #[arg(long)]
        units: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove products by id
    Remove {
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },

    /// Write every product to a CSV file
    Export { path: PathBuf },
}

/// Runs the command line application.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_database_path(cli.db.clone());

    init_tracing(&config.log_filter);

    match execute(cli.command, &config).await {
        Ok(outcome) => {
            let rendered = if cli.json {
                view::render_json(&outcome)
            } else {
                Ok(view::render_text(&outcome))
            };
            match rendered {
                Ok(text) => {
                    print!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(err) => report(&err, cli.json),
            }
        }
        Err(err) => report(&err, cli.json),
    }
}

/// Opens the store, runs one command and closes the store again.
pub async fn execute(command: Command, config: &AppConfig) -> Result<Outcome, AppError> {
    let db = Database::new(DbConfig::new(config.database_path.clone())).await?;

    let result = dispatch(&db, command).await;

    db.close().await;
    result
}

async fn dispatch(db: &Database, command: Command) -> Result<Outcome, AppError> {
    match command {
        Command::Add {
            name,
            price,
            quantity,
            units,
            description,
        } => {
            let form = ProductForm {
                name,
                price,
                quantity,
                units,
                description,
            };
            product::add_product(db, form).await
        }
        Command::List => product::list_products(db).await,
        Command::Search { keyword } => product::search_products(db, keyword).await,
        Command::Update {
            id,
            name,
            price,
            quantity,
            units,
            description,
        } => {
            let patch = ProductPatch {
                name,
                price,
                quantity,
                units,
                description,
            };
            product::update_product(db, id, patch).await
        }
        Command::Remove { ids } => product::remove_products(db, ids).await,
        Command::Export { path } => product::export_products(db, &path).await,
    }
}

/// Prints an error to stderr and picks the exit code.
fn report(err: &AppError, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string(err) {
            Ok(text) => eprintln!("{}", text),
            Err(_) => eprintln!("{}", err),
        }
    } else {
        eprintln!("Error: {}", err);
    }
    err.exit_code()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Trace the store only
/// - Default: warnings, plus info from the stockroom crates
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if initialized {
        info!(version = env!("CARGO_PKG_VERSION"), "stockroom starting");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Database Connection Management
//!
//! Opens the single SQLite connection the store works through.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection                                │
//! │                                                                         │
//! │  Front-end startup                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file location and timeouts            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Connect + ensure products table         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │   SqlitePool (exactly one connection,   │                           │
//! │  │   never idled out, never recycled)      │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().create / list / search / update / delete / export      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← on every exit path                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability
//! File databases use WAL with `synchronous = FULL`: once a call returns,
//! its write survives the process being killed.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

/// Path value that selects a private in-memory database.
const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/inventory.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Create the file when it does not exist.
    /// Default: true
    pub create_if_missing: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            create_if_missing: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether a missing file is created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::in_memory()).await?;
    /// // Database is isolated and vanishes on close
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            connect_timeout: Duration::from_secs(5),
            create_if_missing: true,
        }
    }

    /// True when this configuration selects an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(self.create_if_missing)
            // Readers never see a half-applied statement
            .journal_mode(SqliteJournalMode::Wal)
            // Commit waits for fsync
            .synchronous(SqliteSynchronous::Full))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Owned handle to the product store.
///
/// There are no globals: the front end creates one `Database`, passes it to
/// whatever needs the store, and closes it when done. Dropping it also
/// releases the connection.
#[derive(Debug, Clone)]
pub struct Database {
    /// Single-connection pool.
    pool: SqlitePool,

    /// Where the data lives (`:memory:` for tests).
    path: PathBuf,
}

impl Database {
    /// Opens the database and makes sure the products table exists.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Connected, table present
    /// * `Err(DbError)` - Connection or table creation failed
    ///
    /// ## Example
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::new("./inventory.db")).await?;
    /// ```
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let file_existed = !config.is_in_memory() && config.database_path.exists();
        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        // One process, one connection, held for the lifetime of the handle
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        if config.is_in_memory() {
            info!("In-memory database opened");
        } else if file_existed {
            info!(path = %config.database_path.display(), "Database already exists");
        } else {
            info!(path = %config.database_path.display(), "Database created");
        }

        schema::ensure_schema(&pool).await?;

        Ok(Database {
            pool,
            path: config.database_path,
        })
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the connection.
    ///
    /// ## Note
    /// After calling close, all repository operations fail with
    /// `ConnectionFailed`.
    pub async fn close(&self) {
        info!(path = %self.path.display(), "Closing database connection");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

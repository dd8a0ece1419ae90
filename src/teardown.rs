//! The teardown procedure and the hook entry points a test runner calls.
//!
//! [`run_teardown`] does the work and reports what happened without printing
//! anything. [`global_teardown`] and [`global_teardown_blocking`] are the
//! zero-argument hooks: they read configuration from the environment, run the
//! procedure against MySQL and print the report.

use std::fmt::Display;

use tracing::{info, warn};

use crate::{
    backend::{Connection, DatabaseBackend},
    backends::MySqlBackend,
    config::{AdminCredentials, TestDbConfig},
    error::{Result, TeardownError},
    name::DatabaseName,
};

/// Prefix of the line printed when cleanup fails
pub const WARNING_PREFIX: &str = "⚠️  Warning:";

/// Progress points of a teardown run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Milestone {
    Connecting { host: String, port: u16 },
    Connected,
    Dropped { database: DatabaseName },
    Disconnected,
    Complete,
}

impl Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Milestone::Connecting { host, port } => {
                write!(f, "Connecting to MySQL at {}:{}...", host, port)
            }
            Milestone::Connected => write!(f, "Connected to MySQL"),
            Milestone::Dropped { database } => write!(f, "Dropped test database: {}", database),
            Milestone::Disconnected => write!(f, "Closed admin connection"),
            Milestone::Complete => write!(f, "Test database cleanup complete"),
        }
    }
}

/// Outcome of one teardown run
#[derive(Debug)]
pub struct TeardownReport {
    /// The database the run targeted
    pub database: DatabaseName,
    /// Milestones reached, in order
    pub milestones: Vec<Milestone>,
    /// `Err` carries the cleanup error; it is never raised to the caller
    pub result: Result<()>,
}

impl TeardownReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&TeardownError> {
        self.result.as_ref().err()
    }

    /// The warning line for a failed run
    pub fn warning(&self) -> Option<String> {
        self.error().map(warning_line)
    }

    /// Print milestones to stdout and any warning to stderr
    pub fn print(&self) {
        for milestone in &self.milestones {
            println!("{}", milestone);
        }
        if let Some(warning) = self.warning() {
            eprintln!("{}", warning);
        }
    }
}

fn warning_line(error: impl Display) -> String {
    format!("{} test database cleanup failed: {}", WARNING_PREFIX, error)
}

/// Drops the test database named in `config`, if it exists.
///
/// Never fails: any connection, drop or disconnect error ends up in the
/// returned report. The connection is closed on every path once it has been
/// opened.
pub async fn run_teardown<B: DatabaseBackend>(
    backend: &B,
    config: &TestDbConfig,
    credentials: &AdminCredentials,
) -> TeardownReport {
    let mut milestones = Vec::new();
    let result = drop_test_database(backend, config, credentials, &mut milestones).await;

    if let Err(e) = &result {
        warn!("Failed to clean up test database {}: {}", config.database, e);
    }

    TeardownReport {
        database: config.database.clone(),
        milestones,
        result,
    }
}

async fn drop_test_database<B: DatabaseBackend>(
    backend: &B,
    config: &TestDbConfig,
    credentials: &AdminCredentials,
    milestones: &mut Vec<Milestone>,
) -> Result<()> {
    reached(
        milestones,
        Milestone::Connecting {
            host: config.host.clone(),
            port: config.port,
        },
    );
    let mut conn = backend.connect(config, credentials).await?;
    reached(milestones, Milestone::Connected);

    if let Err(e) = conn.drop_database(&config.database).await {
        if let Err(close_err) = conn.close().await {
            warn!("Failed to close admin connection after drop failure: {}", close_err);
        }
        return Err(e);
    }
    reached(
        milestones,
        Milestone::Dropped {
            database: config.database.clone(),
        },
    );

    conn.close().await?;
    reached(milestones, Milestone::Disconnected);
    reached(milestones, Milestone::Complete);

    Ok(())
}

fn reached(milestones: &mut Vec<Milestone>, milestone: Milestone) {
    info!("{}", milestone);
    milestones.push(milestone);
}

/// Global teardown hook.
///
/// Reads `DB_HOST`/`DB_PORT`/`DB_NAME` and `MYSQL_ROOT_PASSWORD`, drops the
/// test database as `root` and prints the report. Returns normally whatever
/// happens.
pub async fn global_teardown() {
    crate::tracing::init_tracing();

    let config = match TestDbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", warning_line(&e));
            return;
        }
    };
    let credentials = AdminCredentials::root_from_env();

    run_teardown(&MySqlBackend::new(), &config, &credentials)
        .await
        .print();
}

/// [`global_teardown`] for callers without an async runtime.
///
/// Safe to call from inside a runtime too: the work then moves to a fresh
/// thread with its own runtime.
pub fn global_teardown_blocking() {
    if tokio::runtime::Handle::try_current().is_ok() {
        if std::thread::spawn(teardown_on_new_runtime).join().is_err() {
            eprintln!("{}", warning_line("teardown thread panicked"));
        }
    } else {
        teardown_on_new_runtime();
    }
}

fn teardown_on_new_runtime() {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(global_teardown()),
        Err(e) => eprintln!("{}", warning_line(format!("could not start runtime: {}", e))),
    }
}

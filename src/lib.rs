pub mod backend;
pub mod backends;
pub mod config;
pub mod env;
pub mod error;
pub mod name;
pub mod teardown;
pub mod tracing;

pub mod prelude;

pub use backend::{Connection, DatabaseBackend};
pub use backends::MySqlBackend;
pub use config::{AdminCredentials, TestDbConfig};
pub use error::{Result, TeardownError};
pub use name::DatabaseName;
pub use teardown::{
    global_teardown, global_teardown_blocking, run_teardown, Milestone, TeardownReport,
};
pub use crate::tracing::init_tracing;

pub use crate::backend::*;
pub use crate::backends::MySqlBackend;
pub use crate::config::{AdminCredentials, TestDbConfig};
pub use crate::error::{Result, TeardownError};
pub use crate::name::DatabaseName;
pub use crate::teardown::{
    global_teardown, global_teardown_blocking, run_teardown, Milestone, TeardownReport,
};

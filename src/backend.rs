use async_trait::async_trait;

use crate::{
    config::{AdminCredentials, TestDbConfig},
    error::Result,
    name::{drop_database_sql, DatabaseName},
};

/// An administrative session against a database server
#[async_trait]
pub trait Connection: Send + Sized {
    /// Execute a SQL statement, discarding any result
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Drop the given database if it exists
    async fn drop_database(&mut self, name: &DatabaseName) -> Result<()> {
        self.execute(&drop_database_sql(name)).await
    }

    /// Close the session
    async fn close(self) -> Result<()>;
}

/// A database server the teardown procedure can open admin sessions against
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// The type of connection this backend provides
    type Connection: Connection;

    /// Open an administrative session on the server described by `config`
    async fn connect(
        &self,
        config: &TestDbConfig,
        credentials: &AdminCredentials,
    ) -> Result<Self::Connection>;
}

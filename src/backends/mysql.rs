use async_trait::async_trait;
use mysql_async::{prelude::Queryable, Conn, Opts};

use crate::{
    backend::{Connection, DatabaseBackend},
    config::{admin_connection_url, redacted, AdminCredentials, TestDbConfig},
    error::{Result, TeardownError},
};

/// A single MySQL admin session; never pooled
pub struct MySqlConnection {
    conn: Conn,
}

#[async_trait]
impl Connection for MySqlConnection {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.conn
            .query_drop(sql)
            .await
            .map_err(|e| TeardownError::DropFailed(e.to_string()))
    }

    async fn close(self) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(|e| TeardownError::DisconnectFailed(e.to_string()))
    }
}

/// MySQL over `mysql_async`
///
/// No connect timeout is configured; the driver's defaults apply.
#[derive(Debug, Clone, Default)]
pub struct MySqlBackend;

impl MySqlBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatabaseBackend for MySqlBackend {
    type Connection = MySqlConnection;

    async fn connect(
        &self,
        config: &TestDbConfig,
        credentials: &AdminCredentials,
    ) -> Result<Self::Connection> {
        let url = admin_connection_url(config, credentials)?;
        tracing::debug!("Using MySQL admin URL: {}", redacted(&url));

        let opts = Opts::from_url(url.as_str())
            .map_err(|e| TeardownError::InvalidUrl(format!("Invalid connection string: {}", e)))?;

        let conn = Conn::new(opts)
            .await
            .map_err(|e| TeardownError::ConnectionFailed(e.to_string()))?;

        Ok(MySqlConnection { conn })
    }
}

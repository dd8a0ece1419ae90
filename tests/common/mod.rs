//! Common utilities for tests that talk to a live MySQL server

use mysql_async::{prelude::Queryable, Conn, Opts};
use mysql_teardown::{
    config::{admin_connection_url, DEFAULT_HOST, DEFAULT_PORT},
    env, AdminCredentials, DatabaseName, TestDbConfig,
};

/// Initialize tracing for tests if it hasn't been already
#[allow(dead_code)]
pub fn init_tracing() {
    mysql_teardown::init_tracing();
}

/// A config pointing at the test server with a fresh database name
#[allow(dead_code)]
pub fn test_config() -> TestDbConfig {
    let port = env::var_opt(env::PORT_VAR)
        .map(|p| env::parse_port(env::PORT_VAR, &p).expect("DB_PORT for the test server"))
        .unwrap_or(DEFAULT_PORT);
    TestDbConfig::new(
        env::var_or(env::HOST_VAR, DEFAULT_HOST),
        DatabaseName::unique("teardown"),
    )
    .with_port(port)
}

#[allow(dead_code)]
pub async fn admin_conn(config: &TestDbConfig) -> Conn {
    let url = admin_connection_url(config, &AdminCredentials::root_from_env())
        .expect("admin url");
    let opts = Opts::from_url(url.as_str()).expect("admin opts");
    Conn::new(opts).await.expect("admin connection")
}

#[allow(dead_code)]
pub async fn create_database(config: &TestDbConfig) {
    let mut conn = admin_conn(config).await;
    conn.query_drop(format!("CREATE DATABASE {}", config.database.quoted()))
        .await
        .expect("create database");
    conn.disconnect().await.expect("disconnect");
}

#[allow(dead_code)]
pub async fn database_exists(config: &TestDbConfig) -> bool {
    let mut conn = admin_conn(config).await;
    let count: Option<i64> = conn
        .exec_first(
            "SELECT COUNT(*) FROM information_schema.SCHEMATA WHERE SCHEMA_NAME = ?",
            (config.database.as_str(),),
        )
        .await
        .expect("query schemata");
    conn.disconnect().await.expect("disconnect");
    count.unwrap_or(0) > 0
}

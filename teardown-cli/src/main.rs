use clap::{error::ErrorKind, Parser};
use mysql_teardown::{
    config::{DEFAULT_HOST, DEFAULT_PORT, ROOT_USER},
    init_tracing, run_teardown, AdminCredentials, MySqlBackend, TestDbConfig,
};

/// Drop the test database left behind by a test run.
///
/// Failures are printed as warnings; the exit code is always 0 so a cleanup
/// problem never fails an otherwise green run.
#[derive(Parser, Debug)]
#[clap(name = "mysql-teardown", version)]
struct Args {
    /// Host of the MySQL server
    #[clap(short = 'H', long, env = "DB_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port of the MySQL server
    #[clap(short = 'P', long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// The test database to drop
    #[clap(short, long, env = "DB_NAME")]
    database: Option<String>,

    /// Administrative user
    #[clap(short, long, default_value = ROOT_USER)]
    user: String,

    /// Administrative password
    #[clap(long, env = "MYSQL_ROOT_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap reads env fallbacks, so .env has to be loaded first
    mysql_teardown::env::load_env();
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{} invalid arguments: {}", mysql_teardown::teardown::WARNING_PREFIX, e);
            return;
        }
    };

    let Some(database) = args.database.filter(|name| !name.trim().is_empty()) else {
        eprintln!(
            "{} no test database given (use --database or DB_NAME), nothing to clean up",
            mysql_teardown::teardown::WARNING_PREFIX
        );
        return;
    };

    let config = TestDbConfig::new(args.host, database).with_port(args.port);
    let credentials = AdminCredentials::new(args.user, args.password);

    run_teardown(&MySqlBackend::new(), &config, &credentials)
        .await
        .print();
}

//! The zero-argument hooks read the process environment, so everything that
//! touches it lives in a single test.

use mysql_teardown::{env, global_teardown, global_teardown_blocking, TeardownError, TestDbConfig};

#[tokio::test]
async fn test_hooks_return_whatever_the_environment_holds() {
    // Nothing listens on port 1, so no real database can be touched
    std::env::set_var(env::HOST_VAR, "127.0.0.1");
    std::env::set_var(env::PORT_VAR, "1");
    std::env::set_var(env::DATABASE_VAR, "app_test");

    let config = TestDbConfig::from_env().expect("config from env");
    assert_eq!(config, TestDbConfig::new("127.0.0.1", "app_test").with_port(1));

    // Called from inside a runtime: the work moves to its own thread
    global_teardown_blocking();
    global_teardown().await;

    std::env::set_var(env::PORT_VAR, "nope");
    assert!(matches!(
        TestDbConfig::from_env(),
        Err(TeardownError::Config(_))
    ));
    global_teardown_blocking();
    global_teardown().await;

    std::env::set_var(env::PORT_VAR, "1");
    std::env::remove_var(env::DATABASE_VAR);
    assert!(matches!(
        TestDbConfig::from_env(),
        Err(TeardownError::Config(_))
    ));
    global_teardown_blocking();
    global_teardown().await;
}

pub mod mysql;

pub use mysql::{MySqlBackend, MySqlConnection};

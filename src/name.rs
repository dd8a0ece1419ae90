use std::fmt::Display;

use uuid::Uuid;

/// The name of a test database
///
/// The name is used verbatim; it is only quoted when it lands in SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseName(String);

impl DatabaseName {
    /// Wrap an existing database name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a new unique database name with a prefix
    pub fn unique(prefix: &str) -> Self {
        Self(format!(
            "{}_{}",
            prefix,
            Uuid::new_v4().to_string().replace('-', "_")
        ))
    }

    /// Get the database name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a backtick-quoted MySQL identifier
    pub fn quoted(&self) -> String {
        format!("`{}`", self.0.replace('`', "``"))
    }
}

impl Display for DatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DatabaseName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DatabaseName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// `DROP DATABASE IF EXISTS` for the given database
pub fn drop_database_sql(name: &DatabaseName) -> String {
    format!("DROP DATABASE IF EXISTS {}", name.quoted())
}

use std::path::Path;

use crate::config::DatabaseConfig;

/// A SQLite database file inside `dir`, created on first connect.
pub fn test_database_config(dir: &Path) -> DatabaseConfig {
    let mut config = DatabaseConfig::new(format!(
        "sqlite://{}?mode=rwc",
        dir.join("cupcakes.db").display()
    ));
    config.max_connections = 1;
    config
}

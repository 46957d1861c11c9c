//! Database location resolution
//!
//! The only configuration the tool needs is where the database lives:
//! the `--db` flag (clap also fills it from `WARDEN_DB`), then
//! `warden.db` in the current directory.

use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve the database path from the flag, falling back to the default
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        let db_path = flag.unwrap_or_else(|| PathBuf::from("warden.db"));

        Self { db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/records.db")));
        assert_eq!(config.db_path, PathBuf::from("/tmp/records.db"));
    }

    #[test]
    fn test_default_path() {
        let config = Config::resolve(None);
        assert_eq!(config.db_path, PathBuf::from("warden.db"));
    }
}

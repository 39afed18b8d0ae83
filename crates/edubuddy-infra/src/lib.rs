//! Infrastructure implementations for EduBuddy.
//!
//! Concrete backends for the traits defined in edubuddy-core: SQLite
//! persistence via sqlx and the Gemini HTTP client via reqwest, plus the
//! configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;

use std::path::PathBuf;

/// Resolve the data directory: `EDUBUDDY_DATA_DIR` or `~/.edubuddy`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("EDUBUDDY_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".edubuddy")
        }
    }
}

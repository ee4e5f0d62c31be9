//! Phonebook - UI shell bridge
//!
//! The rendering surface (grid, dialogs) calls these commands and renders the
//! view models they return. No state lives on the surface side.

pub mod commands;
mod state;

pub use commands::CommandResult;
pub use state::AppState;

use phonebook_core::{Config, Result};

/// Install logging, load configuration and hydrate the phonebook
///
/// `config_path` is optional; when absent the platform data directory is used.
pub fn bootstrap(config_path: Option<&std::path::Path>) -> Result<AppState> {
    phonebook_core::init_logging();

    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let state = AppState::new(config);
    state.initialize()?;

    tracing::info!("Phonebook started");

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pb.db");
        let config_path = dir.path().join("config.json");
        let config = serde_json::json!({
            "database_path": db_path,
            "page_size": 10,
        });
        std::fs::write(&config_path, config.to_string()).unwrap();

        let state = bootstrap(Some(&config_path)).unwrap();

        assert_eq!(state.config().page_size, 10);
        assert!(db_path.exists());
        let page = commands::entries::get_entries(&state, 0).data.unwrap();
        assert_eq!(page.grid.rows.len(), 10);
    }
}

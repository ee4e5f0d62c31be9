//! UI shell commands
//!
//! These commands bridge the rendering surface to the entry editor.
//! The editor owns all state; the surface only renders what comes back.

pub mod dialogs;
pub mod entries;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<phonebook_core::Result<T>> for CommandResult<T> {
    fn from(result: phonebook_core::Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

//! Entry list commands
use serde::{Deserialize, Serialize};

use phonebook_core::{Entry, GridView, RecordStore, NEW_BUTTON_LABEL};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub id: u64,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl From<Entry> for EntryInfo {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            surname: entry.surname,
            phone_number: entry.phone_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntriesPage {
    pub grid: GridView,
    pub new_button_label: &'static str,
    /// Storage failure to surface as a notification
    pub error: Option<String>,
}

pub fn get_entries<S: RecordStore>(state: &AppState<S>, page: usize) -> CommandResult<EntriesPage> {
    let page_size = state.config().page_size;
    state
        .with_editor(|editor| {
            Ok(EntriesPage {
                grid: editor.grid(page, page_size),
                new_button_label: NEW_BUTTON_LABEL,
                error: editor.last_error().map(str::to_string),
            })
        })
        .into()
}

pub fn get_entry<S: RecordStore>(state: &AppState<S>, row: usize) -> CommandResult<EntryInfo> {
    state
        .with_editor(|editor| Ok(EntryInfo::from(editor.row(row)?.clone())))
        .into()
}

pub fn dismiss_error<S: RecordStore>(state: &AppState<S>) -> CommandResult<()> {
    state
        .with_editor_mut(|editor| {
            editor.dismiss_error();
            Ok(())
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::{Config, MemoryStore};
    use std::path::PathBuf;

    fn state() -> AppState<phonebook_core::LocalRecordStore<MemoryStore>> {
        let config = Config::new(PathBuf::from("/tmp/phonebook-unused"));
        AppState::with_store(config, MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_get_entries_pages() {
        let state = state();

        let first = get_entries(&state, 0);
        assert!(first.success);
        let page = first.data.unwrap();
        assert_eq!(page.grid.rows.len(), 5);
        assert_eq!(page.grid.page_count, 4);
        assert_eq!(page.new_button_label, "New");

        let last = get_entries(&state, 3).data.unwrap();
        assert_eq!(last.grid.rows[4].entry.name, "Rachel");
    }

    #[test]
    fn test_get_entry_out_of_range() {
        let state = state();
        assert_eq!(get_entry(&state, 1).data.unwrap().surname, "Smith");

        let missing = get_entry(&state, 20);
        assert!(!missing.success);
        assert_eq!(missing.error.as_deref(), Some("Row out of range: 20"));
    }

    #[test]
    fn test_entry_info_serializes() {
        let info = get_entry(&state(), 0).data.unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["phoneNumber"], "1234567890");
        assert!(json.get("phone_number").is_none());
    }
}

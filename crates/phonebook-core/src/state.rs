//! Editor State Machine
//!
//! ```text
//!            New / Edit(E)
//!   Idle  ─────────────────▶  Editing
//!    ▲  ◀───────────────────  (Cancel | Submit ok)
//!    │
//!    │  Delete(E)
//!    └───────────────────▶  ConfirmingDelete
//!       ◀───────────────────  (Cancel | ConfirmDelete)
//! ```
//!
//! At most one dialog is open, and a delete target only exists while its
//! confirmation dialog is showing.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::form::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorPhase {
    /// No dialog open
    Idle,
    /// Create/update dialog open
    Editing,
    /// Delete confirmation open
    ConfirmingDelete,
}

impl EditorPhase {
    pub fn can_transition_to(&self, target: EditorPhase) -> bool {
        match (self, target) {
            (EditorPhase::Idle, EditorPhase::Editing) => true,
            (EditorPhase::Idle, EditorPhase::ConfirmingDelete) => true,
            (EditorPhase::Editing, EditorPhase::Idle) => true,
            (EditorPhase::ConfirmingDelete, EditorPhase::Idle) => true,
            (EditorPhase::Idle, EditorPhase::Idle) => true,
            // Opening a dialog over another one is never allowed
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorPhase::Idle => "idle",
            EditorPhase::Editing => "editing",
            EditorPhase::ConfirmingDelete => "confirming_delete",
        }
    }
}

impl std::fmt::Display for EditorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// `target` is `None` when creating a new entry
    Editing {
        target: Option<Entry>,
        form: FormState,
    },
    ConfirmingDelete {
        target: Entry,
    },
}

impl EditorState {
    pub fn creating() -> Self {
        EditorState::Editing {
            target: None,
            form: FormState::empty(),
        }
    }

    pub fn editing(entry: Entry) -> Self {
        let form = FormState::new(entry.fields());
        EditorState::Editing {
            target: Some(entry),
            form,
        }
    }

    pub fn confirming_delete(entry: Entry) -> Self {
        EditorState::ConfirmingDelete { target: entry }
    }

    pub fn phase(&self) -> EditorPhase {
        match self {
            EditorState::Idle => EditorPhase::Idle,
            EditorState::Editing { .. } => EditorPhase::Editing,
            EditorState::ConfirmingDelete { .. } => EditorPhase::ConfirmingDelete,
        }
    }

    /// Entry being edited or about to be deleted
    pub fn target(&self) -> Option<&Entry> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing { target, .. } => target.as_ref(),
            EditorState::ConfirmingDelete { target } => Some(target),
        }
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            EditorState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryFields, Field};

    #[test]
    fn test_valid_transitions() {
        assert!(EditorPhase::Idle.can_transition_to(EditorPhase::Editing));
        assert!(EditorPhase::Idle.can_transition_to(EditorPhase::ConfirmingDelete));
        assert!(EditorPhase::Editing.can_transition_to(EditorPhase::Idle));
        assert!(EditorPhase::ConfirmingDelete.can_transition_to(EditorPhase::Idle));
    }

    #[test]
    fn test_invalid_transitions() {
        // No stacking dialogs
        assert!(!EditorPhase::Editing.can_transition_to(EditorPhase::ConfirmingDelete));
        assert!(!EditorPhase::ConfirmingDelete.can_transition_to(EditorPhase::Editing));
        assert!(!EditorPhase::Editing.can_transition_to(EditorPhase::Editing));
    }

    #[test]
    fn test_editing_prefills_form() {
        let entry = Entry::new(2, EntryFields::new("Jane", "Smith", "0987654321"));
        let state = EditorState::editing(entry.clone());

        assert_eq!(state.phase(), EditorPhase::Editing);
        assert_eq!(state.target(), Some(&entry));
        let form = state.form().unwrap();
        assert_eq!(form.value(Field::Surname), "Smith");
    }

    #[test]
    fn test_creating_has_no_target() {
        let state = EditorState::creating();
        assert!(state.target().is_none());
        assert_eq!(state.form().unwrap().value(Field::Name), "");
    }
}

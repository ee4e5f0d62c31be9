//! Entry Editor
//!
//! Mediates between the grid/dialog surface and the Record Store. Holds the
//! rows to render and the single dialog state; never touches storage directly.

use crate::entry::{Entry, Field};
use crate::error::CoreError;
use crate::state::EditorState;
use crate::store::RecordStore;
use crate::validation::ValidationReport;
use crate::view::{DialogView, GridView};
use crate::Result;

/// A user intent coming from the presentation surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    New,
    Edit(Entry),
    Delete(Entry),
    Cancel,
    SetField(Field, String),
    Blur(Field),
    Submit,
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dialog opened, closed or form edited
    Updated,
    /// Submit blocked by validation; the dialog stays open
    Invalid(ValidationReport),
    Saved(Entry),
    Deleted(usize),
}

pub struct Editor<S> {
    store: S,
    rows: Vec<Entry>,
    state: EditorState,
    last_error: Option<String>,
}

impl<S: RecordStore> Editor<S> {
    /// Hydrate the store and start idle
    pub fn mount(store: S) -> Result<Self> {
        let rows = store.hydrate()?;

        tracing::debug!(rows = rows.len(), "Mounted entry editor");

        Ok(Self {
            store,
            rows,
            state: EditorState::Idle,
            last_error: None,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rows(&self) -> &[Entry] {
        &self.rows
    }

    /// Row at a grid position
    pub fn row(&self, index: usize) -> Result<&Entry> {
        self.rows.get(index).ok_or(CoreError::RowOutOfRange(index))
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Message from the last failed store write, until dismissed or a write succeeds
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn grid(&self, page: usize, page_size: usize) -> GridView {
        GridView::paginate(&self.rows, page, page_size)
    }

    pub fn dialog(&self) -> DialogView {
        DialogView::from_state(&self.state)
    }

    fn transition(&mut self, next: EditorState) -> Result<()> {
        let from = self.state.phase();
        let to = next.phase();

        if !from.can_transition_to(to) {
            tracing::warn!(from = %from, to = %to, "Rejected editor transition");
            return Err(CoreError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        tracing::debug!(from = %from, to = %to, "Editor state transition");

        self.state = next;
        Ok(())
    }

    pub fn open_new(&mut self) -> Result<()> {
        self.transition(EditorState::creating())
    }

    pub fn open_edit(&mut self, entry: Entry) -> Result<()> {
        self.transition(EditorState::editing(entry))
    }

    pub fn open_delete(&mut self, entry: Entry) -> Result<()> {
        self.transition(EditorState::confirming_delete(entry))
    }

    /// Close whichever dialog is open, discarding form input. No-op when idle.
    pub fn cancel(&mut self) {
        if self.state.is_idle() {
            return;
        }
        tracing::debug!(from = %self.state.phase(), "Dialog cancelled");
        self.state = EditorState::Idle;
        self.last_error = None;
    }

    pub fn set_field(&mut self, field: Field, value: String) -> Result<()> {
        match &mut self.state {
            EditorState::Editing { form, .. } => {
                form.set_value(field, value);
                Ok(())
            }
            other => Err(not_editing(other)),
        }
    }

    pub fn blur(&mut self, field: Field) -> Result<()> {
        match &mut self.state {
            EditorState::Editing { form, .. } => {
                form.blur(field);
                Ok(())
            }
            other => Err(not_editing(other)),
        }
    }

    /// Validate the open form and save it as a new or updated entry
    pub fn submit(&mut self) -> Result<Outcome> {
        let (target_id, fields) = match &mut self.state {
            EditorState::Editing { target, form } => {
                if !form.touch_all() {
                    tracing::debug!("Submit blocked by validation");
                    return Ok(Outcome::Invalid(form.report().clone()));
                }
                (target.as_ref().map(|e| e.id), form.values().clone())
            }
            other => return Err(not_editing(other)),
        };

        let saved = match target_id {
            Some(id) => self.store.update(id, fields.into()),
            None => self.store.insert(fields),
        };

        let entry = self.record(saved)?;
        self.transition(EditorState::Idle)?;

        Ok(Outcome::Saved(entry))
    }

    pub fn confirm_delete(&mut self) -> Result<Outcome> {
        let id = match &self.state {
            EditorState::ConfirmingDelete { target } => target.id,
            other => {
                return Err(CoreError::InvalidTransition {
                    from: other.phase().to_string(),
                    to: "deleted".to_string(),
                })
            }
        };

        let deleted = self.store.delete(id);
        let removed = self.record(deleted)?;
        self.transition(EditorState::Idle)?;

        Ok(Outcome::Deleted(removed))
    }

    /// Refresh rows after a store call, or remember its failure
    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.rows = self.store.entries();
                self.last_error = None;
                Ok(value)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::New => self.open_new().map(|_| Outcome::Updated),
            Action::Edit(entry) => self.open_edit(entry).map(|_| Outcome::Updated),
            Action::Delete(entry) => self.open_delete(entry).map(|_| Outcome::Updated),
            Action::Cancel => {
                self.cancel();
                Ok(Outcome::Updated)
            }
            Action::SetField(field, value) => {
                self.set_field(field, value).map(|_| Outcome::Updated)
            }
            Action::Blur(field) => self.blur(field).map(|_| Outcome::Updated),
            Action::Submit => self.submit(),
            Action::ConfirmDelete => self.confirm_delete(),
        }
    }
}

fn not_editing(state: &EditorState) -> CoreError {
    CoreError::InvalidTransition {
        from: state.phase().to_string(),
        to: "editing".to_string(),
    }
}

//! Create / update / delete dialog commands
//!
//! Each command returns the dialog to render next and whether the entry list
//! changed, so the shell knows when to re-fetch the grid.
use serde::Serialize;

use phonebook_core::{Action, CoreError, DialogView, Editor, Field, Outcome, RecordStore, Result};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DialogUpdate {
    pub dialog: DialogView,
    pub rows_changed: bool,
}

fn apply<S, F>(state: &AppState<S>, f: F) -> CommandResult<DialogUpdate>
where
    S: RecordStore,
    F: FnOnce(&mut Editor<S>) -> Result<Action>,
{
    state
        .with_editor_mut(|editor| {
            let action = f(editor)?;
            let outcome = editor.dispatch(action)?;
            let rows_changed = matches!(outcome, Outcome::Saved(_) | Outcome::Deleted(_));
            Ok(DialogUpdate {
                dialog: editor.dialog(),
                rows_changed,
            })
        })
        .into()
}

fn parse_field(field: &str) -> Result<Field> {
    field
        .parse()
        .map_err(|_| CoreError::UnknownField(field.to_string()))
}

pub fn get_dialog<S: RecordStore>(state: &AppState<S>) -> CommandResult<DialogView> {
    state.with_editor(|editor| Ok(editor.dialog())).into()
}

pub fn open_new_entry<S: RecordStore>(state: &AppState<S>) -> CommandResult<DialogUpdate> {
    apply(state, |_| Ok(Action::New))
}

pub fn open_edit_entry<S: RecordStore>(state: &AppState<S>, row: usize) -> CommandResult<DialogUpdate> {
    apply(state, |editor| Ok(Action::Edit(editor.row(row)?.clone())))
}

pub fn open_delete_entry<S: RecordStore>(
    state: &AppState<S>,
    row: usize,
) -> CommandResult<DialogUpdate> {
    apply(state, |editor| Ok(Action::Delete(editor.row(row)?.clone())))
}

pub fn cancel_dialog<S: RecordStore>(state: &AppState<S>) -> CommandResult<DialogUpdate> {
    apply(state, |_| Ok(Action::Cancel))
}

pub fn set_entry_field<S: RecordStore>(
    state: &AppState<S>,
    field: String,
    value: String,
) -> CommandResult<DialogUpdate> {
    apply(state, |_| Ok(Action::SetField(parse_field(&field)?, value)))
}

pub fn blur_entry_field<S: RecordStore>(
    state: &AppState<S>,
    field: String,
) -> CommandResult<DialogUpdate> {
    apply(state, |_| Ok(Action::Blur(parse_field(&field)?)))
}

pub fn submit_entry<S: RecordStore>(state: &AppState<S>) -> CommandResult<DialogUpdate> {
    let result = apply(state, |_| Ok(Action::Submit));
    if let Some(error) = &result.error {
        tracing::warn!(error = %error, "Entry submit failed");
    }
    result
}

pub fn confirm_delete<S: RecordStore>(state: &AppState<S>) -> CommandResult<DialogUpdate> {
    let result = apply(state, |_| Ok(Action::ConfirmDelete));
    if let Some(error) = &result.error {
        tracing::warn!(error = %error, "Entry delete failed");
    }
    result
}

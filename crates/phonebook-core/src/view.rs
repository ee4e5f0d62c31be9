//! Grid and dialog view models handed to the rendering surface

use serde::Serialize;

use crate::entry::{Entry, Field};
use crate::state::EditorState;

pub const NEW_BUTTON_LABEL: &str = "New";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    Update,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Update => "Update",
            RowAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
    pub width: u32,
}

pub fn columns() -> Vec<Column> {
    vec![
        Column {
            field: Field::Name.as_str(),
            header: Field::Name.label(),
            width: 150,
        },
        Column {
            field: Field::Surname.as_str(),
            header: Field::Surname.label(),
            width: 150,
        },
        Column {
            field: Field::PhoneNumber.as_str(),
            header: Field::PhoneNumber.label(),
            width: 200,
        },
        Column {
            field: "actions",
            header: "Actions",
            width: 250,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// Position in the full collection; row actions refer to this
    pub index: usize,
    pub entry: Entry,
    pub actions: [RowAction; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub columns: Vec<Column>,
    pub rows: Vec<GridRow>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl GridView {
    /// Slice one zero-based page out of `entries`; pages past the end show the last one
    pub fn paginate(entries: &[Entry], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = entries.len().div_ceil(page_size).max(1);
        let page = page.min(page_count - 1);

        let rows = entries
            .iter()
            .enumerate()
            .skip(page * page_size)
            .take(page_size)
            .map(|(index, entry)| GridRow {
                index,
                entry: entry.clone(),
                actions: [RowAction::Update, RowAction::Delete],
            })
            .collect();

        Self {
            columns: columns(),
            rows,
            page,
            page_size,
            page_count,
            total_rows: entries.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    /// Helper text; only set once the input was visited
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogView {
    None,
    EntryForm {
        title: &'static str,
        submit_label: &'static str,
        cancel_label: &'static str,
        fields: Vec<FormFieldView>,
    },
    ConfirmDelete {
        title: &'static str,
        message: &'static str,
        confirm_label: &'static str,
        cancel_label: &'static str,
    },
}

impl DialogView {
    pub fn from_state(state: &EditorState) -> Self {
        match state {
            EditorState::Idle => DialogView::None,
            EditorState::Editing { target, form } => {
                let (title, submit_label) = if target.is_some() {
                    ("Update Entry", "Update")
                } else {
                    ("New Entry", "Add")
                };

                let fields = Field::ALL
                    .iter()
                    .map(|field| FormFieldView {
                        field: *field,
                        label: field.label(),
                        value: form.value(*field).to_string(),
                        error: form.visible_error(*field).map(|e| e.message()),
                    })
                    .collect();

                DialogView::EntryForm {
                    title,
                    submit_label,
                    cancel_label: CANCEL_LABEL,
                    fields,
                }
            }
            EditorState::ConfirmingDelete { .. } => DialogView::ConfirmDelete {
                title: "Confirm Delete",
                message: "Are you sure you want to delete this entry?",
                confirm_label: "OK",
                cancel_label: CANCEL_LABEL,
            },
        }
    }
}

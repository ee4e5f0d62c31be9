//! Entry form state
//!
//! Tracks the values being edited, which inputs the user has visited, and the
//! latest validation report. Errors are only shown for visited inputs.

use crate::entry::{EntryFields, Field};
use crate::validation::{validate, FieldError, ValidationReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub name: bool,
    pub surname: bool,
    pub phone_number: bool,
}

impl Touched {
    fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Surname => self.surname,
            Field::PhoneNumber => self.phone_number,
        }
    }

    fn mark(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Surname => self.surname = true,
            Field::PhoneNumber => self.phone_number = true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: EntryFields,
    touched: Touched,
    report: ValidationReport,
}

impl FormState {
    pub fn new(initial: EntryFields) -> Self {
        let report = validate(&initial);
        Self {
            values: initial,
            touched: Touched::default(),
            report,
        }
    }

    pub fn empty() -> Self {
        Self::new(EntryFields::default())
    }

    pub fn values(&self) -> &EntryFields {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(field)
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.report = validate(&self.values);
    }

    /// Mark an input as visited
    pub fn blur(&mut self, field: Field) {
        self.touched.mark(field);
    }

    /// Mark every input visited and report whether the form may be submitted
    pub fn touch_all(&mut self) -> bool {
        for field in Field::ALL {
            self.touched.mark(field);
        }
        self.report = validate(&self.values);
        self.report.is_valid()
    }

    /// Error to render under an input, if it was visited and currently fails
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.is_touched(field) {
            self.report.error(field)
        } else {
            None
        }
    }
}

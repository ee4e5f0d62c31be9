//! Field validation for submitted entries

use serde::Serialize;

use crate::entry::{EntryFields, Field};

pub const PHONE_NUMBER_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    InvalidPhoneNumber,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Required",
            FieldError::InvalidPhoneNumber => "Phone number is not valid",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field outcome of validating an entry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub name: Option<FieldError>,
    pub surname: Option<FieldError>,
    pub phone_number: Option<FieldError>,
}

impl ValidationReport {
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Surname => self.surname,
            Field::PhoneNumber => self.phone_number,
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.error(*f).is_none())
    }
}

pub fn is_valid_phone_number(value: &str) -> bool {
    value.len() == PHONE_NUMBER_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    match field {
        Field::PhoneNumber if !is_valid_phone_number(value) => Some(FieldError::InvalidPhoneNumber),
        _ => None,
    }
}

pub fn validate(fields: &EntryFields) -> ValidationReport {
    ValidationReport {
        name: validate_field(Field::Name, &fields.name),
        surname: validate_field(Field::Surname, &fields.surname),
        phone_number: validate_field(Field::PhoneNumber, &fields.phone_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let report = validate(&EntryFields::new("John", "Doe", "1234567890"));
        assert!(report.is_valid());
    }

    #[test]
    fn test_short_phone_number_rejected() {
        let report = validate(&EntryFields::new("John", "Doe", "12345"));
        assert_eq!(report.phone_number, Some(FieldError::InvalidPhoneNumber));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_non_digit_phone_number_rejected() {
        assert!(!is_valid_phone_number("12345abcde"));
        assert!(!is_valid_phone_number("123456789012"));
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let report = validate(&EntryFields::new("", "Doe", "1234567890"));
        assert_eq!(report.name, Some(FieldError::Required));
        assert_eq!(report.surname, None);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_empty_phone_is_required_not_invalid() {
        let report = validate(&EntryFields::default());
        assert_eq!(report.phone_number, Some(FieldError::Required));
        assert_eq!(FieldError::Required.to_string(), "Required");
    }
}

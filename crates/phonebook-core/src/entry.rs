//! Entry data structure
//!
//! Wire shape matches the stored JSON documents:
//! `{"id": 1, "name": "John", "surname": "Doe", "phoneNumber": "1234567890"}`

use serde::{Deserialize, Serialize};

pub type EntryId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl Entry {
    pub fn new(id: EntryId, fields: EntryFields) -> Self {
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
            phone_number: fields.phone_number,
        }
    }

    pub fn fields(&self) -> EntryFields {
        EntryFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest as they are
    pub fn apply(&mut self, patch: &EntryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(surname) = &patch.surname {
            self.surname = surname.clone();
        }
        if let Some(phone_number) = &patch.phone_number {
            self.phone_number = phone_number.clone();
        }
    }
}

/// The three user-editable fields of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl EntryFields {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Surname => self.surname = value,
            Field::PhoneNumber => self.phone_number = value,
        }
    }
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl EntryPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl From<EntryFields> for EntryPatch {
    fn from(fields: EntryFields) -> Self {
        Self {
            name: Some(fields.name),
            surname: Some(fields.surname),
            phone_number: Some(fields.phone_number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Surname,
    PhoneNumber,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Surname, Field::PhoneNumber];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::PhoneNumber => "phoneNumber",
        }
    }

    /// Label shown next to the form input and in the grid header
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::PhoneNumber => "Phone Number",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "surname" => Ok(Field::Surname),
            "phoneNumber" | "phone_number" => Ok(Field::PhoneNumber),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

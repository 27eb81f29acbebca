use serde::{Deserialize, Serialize};

/// The four free-form text fields of a contact, as sent by clients on create and update.
/// Every key is required, but the values may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}

impl ContactFields {
    pub fn new(first_name: &str, last_name: &str, email: &str, country: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            country: country.to_owned(),
        }
    }

    /// Returns the wire names of all fields that are empty, in display order
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.empty_fields().len() == 4
    }
}

/// A stored contact. The id is assigned by the store on creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    #[serde(flatten)]
    pub fields: ContactFields,
}

impl Contact {
    pub fn new(id: &str, fields: ContactFields) -> Self {
        Self {
            id: id.to_owned(),
            fields,
        }
    }
}

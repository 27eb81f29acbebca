use crate::api::ContactApi;
use crate::{Error, Result};
use contacts_core::{Contact, ContactFields};
use log::debug;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// One of the four editable fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Country,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "firstname" => Ok(Self::FirstName),
            "last" | "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "country" => Ok(Self::Country),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Country => "country",
        };
        write!(f, "{name}")
    }
}

/// Client side state of the contacts screen: the last fetched snapshot of all contacts,
/// the form draft and the contact being edited, if any.
///
/// The snapshot is never patched locally. Every successful mutation marks it stale and
/// reloads the whole collection from the server.
pub struct ContactsView {
    api: Arc<dyn ContactApi>,
    contacts: Vec<Contact>,
    draft: ContactFields,
    edit_target: Option<String>,
    stale: bool,
}

impl ContactsView {
    pub fn new(api: Arc<dyn ContactApi>) -> Self {
        Self {
            api,
            contacts: vec![],
            draft: ContactFields::default(),
            edit_target: None,
            stale: true,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn draft(&self) -> &ContactFields {
        &self.draft
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) {
        let target = match field {
            DraftField::FirstName => &mut self.draft.first_name,
            DraftField::LastName => &mut self.draft.last_name,
            DraftField::Email => &mut self.draft.email,
            DraftField::Country => &mut self.draft.country,
        };
        *target = value.to_owned();
    }

    /// Replaces the snapshot with the full collection from the server. On failure the
    /// previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.contacts = self.api.list().await?;
        self.stale = false;
        debug!("Refreshed {} contacts", self.contacts.len());
        Ok(())
    }

    /// Marks the snapshot as outdated
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Reloads the snapshot if it was invalidated
    pub async fn sync(&mut self) -> Result<()> {
        if self.stale {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Loads the given contact into the draft, discarding unsaved input
    pub fn begin_edit(&mut self, contact: &Contact) {
        self.draft = contact.fields.clone();
        self.edit_target = Some(contact.id.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.draft = ContactFields::default();
        self.edit_target = None;
    }

    /// Sends the draft as an update of the edit target, or as a new contact.
    ///
    /// The draft and edit target are only cleared once the server accepted the change.
    /// If the following reload fails, the mutation still happened and `Error::Reload`
    /// is returned.
    pub async fn submit(&mut self) -> Result<Contact> {
        let empty = self.draft.empty_fields();
        if !empty.is_empty() {
            return Err(Error::Validation(empty));
        }

        let saved = match self.edit_target.as_deref() {
            Some(id) => self.api.update(id, &self.draft).await?,
            None => self.api.create(&self.draft).await?,
        };

        self.cancel_edit();
        self.reload_after_change(&saved.id).await?;
        Ok(saved)
    }

    /// Deletes the contact with the given id and reloads the snapshot
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.api.delete(id).await?;
        self.reload_after_change(id).await
    }

    async fn reload_after_change(&mut self, id: &str) -> Result<()> {
        self.invalidate();
        self.sync().await.map_err(|e| Error::Reload {
            id: id.to_owned(),
            source: Box::new(e),
        })
    }
}

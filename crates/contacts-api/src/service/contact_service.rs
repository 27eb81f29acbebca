use super::{Error, Result};
use crate::util;
use async_trait::async_trait;
use contacts_core::{Contact, ContactFields};
use contacts_persistence::ContactStoreApi;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id, or `NotFound`
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Creates a new contact with a freshly assigned id
    async fn add_contact(&self, fields: ContactFields) -> Result<Contact>;

    /// Replaces the fields of an existing contact, or fails with `NotFound`
    async fn update_contact(&self, id: &str, fields: ContactFields) -> Result<Contact>;

    /// Deletes a contact. Deleting an unknown id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for managing the stored contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::Validation(String::from("Contact id must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        debug!("Loaded {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        validate_id(id)?;
        self.store.get(id).await?.ok_or(Error::NotFound)
    }

    async fn add_contact(&self, fields: ContactFields) -> Result<Contact> {
        let id = util::get_uuid_v4().to_string();
        let contact = self.store.insert(&id, &fields).await?;
        info!("Created contact {id}");
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, fields: ContactFields) -> Result<Contact> {
        validate_id(id)?;
        if self.store.get(id).await?.is_none() {
            return Err(Error::NotFound);
        }
        // the record can vanish between the check and the write
        let contact = self
            .store
            .update(id, &fields)
            .await?
            .ok_or(Error::NotFound)?;
        info!("Updated contact {id}");
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        self.store.delete(id).await?;
        info!("Deleted contact {id}");
        Ok(())
    }
}

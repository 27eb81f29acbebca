use contacts_core::{Contact, ContactFields};

use super::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all contacts in insertion order
    async fn get_all(&self) -> Result<Vec<Contact>>;
    /// Fetches the contact with the given id, if it exists
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    /// Stores a new contact under the given id and returns it
    async fn insert(&self, id: &str, data: &ContactFields) -> Result<Contact>;
    /// Replaces the fields of the contact with the given id, returns `None` if there is
    /// no such contact
    async fn update(&self, id: &str, data: &ContactFields) -> Result<Option<Contact>>;
    /// Removes the contact with the given id, a missing contact is not an error
    async fn delete(&self, id: &str) -> Result<()>;
}

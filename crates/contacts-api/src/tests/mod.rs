#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use contacts_core::{Contact, ContactFields};
    use contacts_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn get_all(&self) -> Result<Vec<Contact>>;
            async fn get(&self, id: &str) -> Result<Option<Contact>>;
            async fn insert(&self, id: &str, data: &ContactFields) -> Result<Contact>;
            async fn update(&self, id: &str, data: &ContactFields) -> Result<Option<Contact>>;
            async fn delete(&self, id: &str) -> Result<()>;
        }
    }

    pub const TEST_CONTACT_ID: &str = "00000000-0000-0000-0000-000000000000";

    pub fn ada_fields() -> ContactFields {
        ContactFields::new("Ada", "Lovelace", "ada@x.com", "UK")
    }

    pub fn get_baseline_contact() -> Contact {
        Contact::new(TEST_CONTACT_ID, ada_fields())
    }
}

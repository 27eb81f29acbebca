use super::super::{Error, Result};
use crate::{
    constants::{DB_CREATED_AT, DB_TABLE},
    contact::ContactStoreApi,
};
use async_trait::async_trait;
use contacts_core::{Contact, ContactFields};
use serde::{Deserialize, Serialize};
use surrealdb::{Surreal, engine::any::Any, sql::Thing};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let result: Vec<ContactDb> = self
            .db
            .query(format!(
                "SELECT * FROM type::table(${DB_TABLE}) ORDER BY {DB_CREATED_AT} ASC"
            ))
            .bind((DB_TABLE, Self::TABLE))
            .await?
            .take(0)?;
        result.into_iter().map(Contact::try_from).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        result.map(Contact::try_from).transpose()
    }

    async fn insert(&self, id: &str, data: &ContactFields) -> Result<Contact> {
        let entity = ContactDb::new_from_fields(data);
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id))
            .content(entity)
            .await?;
        match created {
            None => Err(Error::InsertFailed(format!("contact {id}"))),
            Some(c) => c.try_into(),
        }
    }

    async fn update(&self, id: &str, data: &ContactFields) -> Result<Option<Contact>> {
        // merge keeps the record id and creation timestamp untouched
        let entity: ContactFieldsDb = data.into();
        let updated: Option<ContactDb> = self
            .db
            .update((Self::TABLE, id))
            .merge(entity)
            .await?;
        updated.map(Contact::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let _: Option<ContactDb> = self.db.delete((Self::TABLE, id)).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub created_at: i64,
}

impl ContactDb {
    fn new_from_fields(value: &ContactFields) -> Self {
        Self {
            id: None,
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            country: value.country.clone(),
            created_at: chrono::Utc::now().timestamp_micros(),
        }
    }
}

impl TryFrom<ContactDb> for Contact {
    type Error = Error;

    fn try_from(value: ContactDb) -> Result<Self> {
        let id = value
            .id
            .ok_or_else(|| Error::MissingRecordId("contact".to_string()))?;
        Ok(Self {
            id: id.id.to_raw(),
            fields: ContactFields {
                first_name: value.first_name,
                last_name: value.last_name,
                email: value.email,
                country: value.country,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize)]
struct ContactFieldsDb {
    first_name: String,
    last_name: String,
    email: String,
    country: String,
}

impl From<&ContactFields> for ContactFieldsDb {
    fn from(value: &ContactFields) -> Self {
        Self {
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            country: value.country.clone(),
        }
    }
}

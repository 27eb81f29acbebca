use super::Result;
use log::info;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
};

pub mod contact;

#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str, namespace: &str, database: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            namespace: namespace.to_owned(),
            database: database.to_owned(),
        }
    }
}

pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    info!(
        "Connecting to SurrealDB at {} (ns: {}, db: {})",
        config.connection_string, config.namespace, config.database
    );
    let db = connect(&config.connection_string).await?;
    db.use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;
    Ok(db)
}

#[cfg(test)]
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    get_surreal_db(&SurrealDbConfig::new("mem://", namespace, database)).await
}

mod persistence;
pub mod service;
#[cfg(test)]
mod tests;
pub mod util;

pub use contacts_core as data;
pub use persistence::DbContext;
pub use persistence::get_db_context;

/// Settings shared by the persistence and service context and the HTTP server
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub http_address: String,
    pub surreal_db_connection: String,
    pub db_namespace: String,
    pub db_database: String,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}

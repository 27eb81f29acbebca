use clap::Parser;

/// Command line and environment configuration of the contacts server
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub http_port: u16,
    #[arg(long, env = "HTTP_ADDRESS", default_value = "127.0.0.1")]
    pub http_address: String,
    #[arg(long, env = "SURREAL_DB_CONNECTION", default_value = "ws://localhost:8800")]
    pub surreal_db_connection: String,
    #[arg(long, env = "DB_NAMESPACE", default_value = "contacts")]
    pub db_namespace: String,
    #[arg(long, env = "DB_DATABASE", default_value = "contacts")]
    pub db_database: String,
}

impl Config {
    pub fn api_config(&self) -> contacts_api::Config {
        contacts_api::Config {
            http_port: self.http_port,
            http_address: self.http_address.clone(),
            surreal_db_connection: self.surreal_db_connection.clone(),
            db_namespace: self.db_namespace.clone(),
            db_database: self.db_database.clone(),
        }
    }
}

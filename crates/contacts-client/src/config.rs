use clap::Parser;

/// Command line and environment configuration of the terminal contacts client
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base url of the contacts server
    #[arg(long, env = "CONTACTS_BACKEND_URL", default_value = "http://localhost:5000")]
    pub backend_url: String,
}

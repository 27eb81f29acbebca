use anyhow::{Result, anyhow};
use clap::Parser;
use config::Config;
use contacts_api::get_db_context;
use contacts_api::service::create_service_context;
use log::{error, info};

mod api_docs;
mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;

// MAIN
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments and env vars with clap
    let conf = Config::parse();
    let api_config = conf.api_config();

    // Initialize the database context
    let db = get_db_context(&api_config).await?;
    let service_context = create_service_context(api_config, db);

    if let Err(e) = router::rocket_main(service_context)?.launch().await {
        error!("Web server stopped with error: {e}");
        return Err(anyhow!("web server stopped with error: {e}"));
    }

    info!("Web server was shut down");
    Ok(())
}

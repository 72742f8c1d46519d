use fishshop_hex::application::ShopServices;
use fishshop_hex::config::Config;
use fishshop_hex::inbound::http::{HttpServer, HttpServerConfig};
use fishshop_repo::{build_repo, Repo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for SERVER_PORT / STORAGE_BACKEND / DATA_DIR when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    // Collections are loaded and seeded here, before any request is served.
    let repo: Repo = build_repo(config.data_dir.as_deref()).await?;
    tracing::info!(backend = repo.backend(), "store ready");
    let services = ShopServices::new(repo);

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(services, server_cfg).await?;
    http.run().await
}

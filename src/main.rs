use std::sync::Arc;
use std::time::Duration;

use reelfacts::config::Config;
use reelfacts::facts::FactClient;
use reelfacts::service::MovieService;
use reelfacts::store::MovieStore;
use reelfacts::{AppState, app, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelfacts=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("reelfacts/0.1")
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let store = MovieStore::new(db);
    let facts = Arc::new(FactClient::new(http, config.numbers_api_url.clone()));
    let state = AppState { service: MovieService::new(store, facts) };

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}

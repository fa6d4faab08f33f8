use strata::server::{
    config::Config,
    model::{app::AppState, db::LazyDatabase},
    router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), strata::server::error::Error> {
    let auth = startup::build_auth_client(&config)?;
    let session = startup::connect_to_session(&config).await?;

    let db = LazyDatabase::new(config.database_url.clone());
    if db.connection().await.is_none() {
        tracing::warn!("Database unavailable at startup, reads will return empty results");
    }

    let app = router::routes()
        .with_state(AppState { db, auth })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;

    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

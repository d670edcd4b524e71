use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dream_oracle::{config, infrastructure::AppState, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dream_oracle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    if config.gemini_api_key.is_none() {
        tracing::warn!(
            "{} is not set; analysis requests will fail until it is configured",
            config::API_KEY_ENV
        );
    }

    let state = AppState::new(&config);

    if let Err(e) = server::start_server(state, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

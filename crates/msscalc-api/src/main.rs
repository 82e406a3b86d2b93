use tracing_subscriber::EnvFilter;

use msscalc_api::config::ApiConfig;
use msscalc_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging (CloudWatch-friendly under Lambda)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let state = AppState::load(&config)?;
    let app = msscalc_api::router(state);

    if config.lambda {
        tracing::info!("serving through the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

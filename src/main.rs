mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let port = config.port;
    tracing::info!(api_url = %config.api_url, "HRMS backend configured");

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "hrms listening");
    axum::serve(listener, app).await?;
    Ok(())
}

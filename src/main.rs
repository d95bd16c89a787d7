use tracing::info;
use tracing_subscriber::FmtSubscriber;

use party_board::{app, config::Config, errors::Result, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing::subscriber::set_global_default(FmtSubscriber::default()).unwrap();

    let config = Config::load();
    let state = AppState::init(&config)?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;
    info!("Serving party board at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

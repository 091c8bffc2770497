mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::{main_router, weather_routes};
pub use state::AppState;

use crate::config;
use crate::error::AppError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AppError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        http_port = settings.http_port,
        market = %settings.spotify_market,
        "Loaded settings"
    );

    let app_state = AppState::from_settings(&settings)?;
    let app = router::main_router(
        app_state.weather_state(),
        settings.cors_allow_origin.as_deref(),
    )?;

    server::serve(app, settings.http_port, CancellationToken::new()).await
}

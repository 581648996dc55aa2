use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuel_server::config::AppConfig;
use fuel_server::gateway::StationGateway;
use fuel_server::upstream::HttpUpstream;
use fuel_server::web::{AppState, cors_layer, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing upstream base URL is fatal before anything binds.
    let config = AppConfig::from_env()?;

    let upstream = HttpUpstream::new(config.upstream())?;
    info!(base_url = upstream.base_url(), "upstream client ready");
    let state = AppState::new(StationGateway::new(upstream));
    let app = create_router(state).layer(cors_layer(&config.cors_origin)?);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "fuel station API listening");
    info!("GET /estaciones/detalles/:id");
    info!("GET /estaciones/historico/:id?inicio&fin");
    info!("GET /estaciones/municipio/:id");
    info!("GET /estaciones/radio?latitud&longitud&radio&page&limit");
    info!("GET /estaciones/radio/detalles?latitud&longitud&radio&page&limit");

    axum::serve(listener, app).await?;
    Ok(())
}

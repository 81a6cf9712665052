use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use solar_core::config::{CliConfigOverrides, LayeredConfig};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solar_api::{create_router, ApiConfig, AppState};

/// Read-only HTTP API over solar project metadata and generation data
#[derive(Debug, Parser)]
#[command(name = "solar-api", version)]
struct Args {
    /// TOML config file (defaults to $SOLAR_CONFIG when set)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project metadata JSON file
    #[arg(long)]
    projects: Option<PathBuf>,

    /// Directory holding `{id}_data.csv` generation files
    #[arg(long)]
    generation_dir: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "solar_api=info,solar_core=info,solar_store=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let layered = LayeredConfig::resolve(
        args.config.as_deref(),
        CliConfigOverrides {
            projects_path: args.projects,
            generation_dir: args.generation_dir,
            port: args.port,
        },
    )
    .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    for (key, (value, source)) in layered.to_inspection_map() {
        tracing::debug!(key = %key, value = %value, source = ?source, "Configuration");
    }

    let config = ApiConfig::from_layered(&layered);

    tracing::info!(
        port = config.port,
        projects_path = %config.projects_path.display(),
        generation_dir = %config.generation_dir.display(),
        "Starting solar projects API server"
    );

    let state = match AppState::load(&config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to load project dataset: {}", e);
            tracing::error!(
                "Remediation:\n\
                1. Check that the projects file exists and is readable\n\
                2. Verify it is a JSON array of project records\n\
                3. Set SOLAR_PROJECTS_PATH or --projects to the correct location"
            );
            return Err(e.into());
        }
    };

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use junctionflow_core::{RoadModel, create_road_model};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod state;

use config::ServerConfig;
use error::CliError;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "junctionflow-server", version, about = "Traffic-aware route server")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the fastest route between two junctions and exit
    Route {
        /// Junction id or exact name
        source: String,
        /// Junction id or exact name
        destination: String,
    },
    /// Print every road with its base and current travel time and exit
    Roads,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Command::Route {
            source,
            destination,
        } => {
            let model = create_road_model(&config.network).map_err(CliError::Model)?;
            print_route(&model, &source, &destination)
        }
        Command::Roads => {
            let model = create_road_model(&config.network).map_err(CliError::Model)?;
            print_roads(&model);
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), CliError> {
    let model = create_road_model(&config.network).map_err(CliError::Model)?;
    let app = api::build_router(AppState::new(model), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn print_route(model: &RoadModel, source: &str, destination: &str) -> Result<(), CliError> {
    let resolve = |input: &str| {
        model
            .resolve(input)
            .ok_or_else(|| CliError::UnknownName(input.to_string()))
    };
    let route = model
        .router
        .find_route(resolve(source)?, resolve(destination)?)?;

    let stops: Vec<_> = route
        .path
        .iter()
        .map(|&id| model.junction_label(id))
        .collect();
    println!("Path: {}", stops.join(" -> "));
    println!("Total time: {:.1} minutes", route.total_minutes);
    println!("Distance: {:.1} km", route.distance_km);
    Ok(())
}

fn print_roads(model: &RoadModel) {
    println!(
        "{} junctions, {} roads",
        model.router.junction_count(),
        model.router.road_count()
    );
    for road in model.router.roads() {
        println!(
            "#{} {} <-> {}: {:.1} km, {:.1} min (base {:.1} min)",
            road.id,
            model.junction_label(road.from),
            model.junction_label(road.to),
            road.distance,
            road.current_time,
            road.base_time
        );
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutting down");
}

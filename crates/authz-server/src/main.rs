// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authz gateway binary.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use authz_engine::{casbin_engine::RBAC_MODEL, CasbinEngine, EngineSeed};
use authz_server::{create_app_state, create_router, logging, version, AppState, GatewayConfig};
use authz_server_config::ConfigError;
use clap::{Parser, Subcommand};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};

/// Authz gateway - GraphQL front for a casbin policy store.
#[derive(Parser, Debug)]
#[command(
	name = "authz-gateway",
	about = "GraphQL gateway over a casbin policy store",
	version
)]
struct Args {
	/// Config file path (defaults to /etc/authz-gateway/gateway.toml)
	#[arg(long, short, env = "AUTHZ_GATEWAY_CONFIG", global = true)]
	config: Option<PathBuf>,

	/// Subcommands for authz-gateway; runs the server when omitted
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
	/// Print the GraphQL schema definition
	Sdl,
	/// Execute one GraphQL document against the configured policy store
	Query {
		/// GraphQL document text
		document: String,
	},
}

fn load_config(path: Option<&PathBuf>) -> Result<GatewayConfig, ConfigError> {
	match path {
		Some(path) => authz_server_config::load_config_with_file(path),
		None => authz_server_config::load_config(),
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	match args.command {
		Some(Command::Version) => {
			println!("{}", version::format_version_info());
			Ok(())
		}
		Some(Command::Sdl) => print_sdl(args.config.as_ref()).await,
		Some(Command::Query { document }) => run_query(args.config.as_ref(), &document).await,
		None => serve(args.config.as_ref()).await,
	}
}

async fn print_sdl(config_path: Option<&PathBuf>) -> anyhow::Result<()> {
	let config = load_config(config_path).context("failed to load configuration")?;

	// The schema shape does not depend on stored policy.
	let engine = CasbinEngine::from_model_str(RBAC_MODEL, &EngineSeed::new()).await?;
	let state = AppState::new(Arc::new(engine), &config.graphql);

	println!("{}", authz_graphql::sdl(&state.schema));
	Ok(())
}

async fn run_query(config_path: Option<&PathBuf>, document: &str) -> anyhow::Result<()> {
	let config = load_config(config_path).context("failed to load configuration")?;
	let state = create_app_state(&config)
		.await
		.context("failed to load enforcement engine")?;

	let response = authz_graphql::execute(&state.schema, document).await;
	println!("{}", serde_json::to_string_pretty(&response)?);
	Ok(())
}

async fn serve(config_path: Option<&PathBuf>) -> anyhow::Result<()> {
	let config = load_config(config_path).context("failed to load configuration")?;

	logging::init_tracing(&config.logging);

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		model = %config.engine.model_path.display(),
		policy = %config.engine.policy_path.display(),
		"starting authz-gateway"
	);

	let state = create_app_state(&config)
		.await
		.context("failed to load enforcement engine")?;

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr)
		.await
		.with_context(|| format!("failed to bind {addr}"))?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}

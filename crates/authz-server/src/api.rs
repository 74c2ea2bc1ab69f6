// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router.

use std::sync::Arc;

use authz_engine::{CasbinEngine, SharedEngine};
use authz_graphql::{build_schema_with, AuthzSchema, SchemaOptions};
use authz_server_config::{GatewayConfig, GraphqlConfig};
use axum::{routing::get, Router};
use tracing::info;

use crate::{error::Result, routes};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub schema: AuthzSchema,
	pub engine: SharedEngine,
}

impl AppState {
	/// Builds the schema over `engine` with the configured limits.
	pub fn new(engine: SharedEngine, graphql: &GraphqlConfig) -> Self {
		let schema = build_schema_with(engine.clone(), &schema_options(graphql));
		Self { schema, engine }
	}
}

/// Maps GraphQL config onto schema execution limits.
pub fn schema_options(config: &GraphqlConfig) -> SchemaOptions {
	SchemaOptions {
		max_depth: config.max_depth,
		max_complexity: config.max_complexity,
		disable_introspection: !config.introspection,
	}
}

/// Loads the file-backed engine named in `config` and builds the state.
pub async fn create_app_state(config: &GatewayConfig) -> Result<AppState> {
	let engine = CasbinEngine::from_files(&config.engine.model_path, &config.engine.policy_path)
		.await?;
	info!(
		policies = engine.policy_count().await,
		"enforcement engine ready"
	);

	Ok(AppState::new(Arc::new(engine), &config.graphql))
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route(
			"/",
			get(routes::graphql::graphql_get).post(routes::graphql::graphql_post),
		)
		.route(
			"/graphql",
			get(routes::graphql::graphql_get).post(routes::graphql::graphql_post),
		)
		.route("/schema", get(routes::graphql::schema_sdl))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}

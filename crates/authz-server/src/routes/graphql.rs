// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GraphQL HTTP handlers.

use async_graphql::{Request, Response, Variables};
use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::{error::ServerError, AppState};

/// Query string accepted by `GET /graphql`.
#[derive(Debug, Deserialize)]
pub struct GraphqlParams {
	pub query: String,
	#[serde(rename = "operationName", default)]
	pub operation_name: Option<String>,
	/// JSON-encoded variables object.
	#[serde(default)]
	pub variables: Option<String>,
}

impl GraphqlParams {
	/// Converts the query string into an executable request.
	pub fn into_request(self) -> Result<Request, ServerError> {
		let mut request = Request::new(self.query);

		if let Some(name) = self.operation_name.filter(|n| !n.is_empty()) {
			request = request.operation_name(name);
		}

		if let Some(raw) = self.variables.filter(|v| !v.trim().is_empty()) {
			let variables: Variables = serde_json::from_str(&raw)
				.map_err(|e| ServerError::InvalidVariables(e.to_string()))?;
			request = request.variables(variables);
		}

		Ok(request)
	}
}

/// GET /graphql - Execute a document passed in the query string.
pub async fn graphql_get(
	State(state): State<AppState>,
	params: Result<Query<GraphqlParams>, QueryRejection>,
) -> Result<Json<Response>, ServerError> {
	let Query(params) = params.map_err(|e| ServerError::InvalidQuery(e.body_text()))?;
	let request = params.into_request()?;
	debug!(operation = ?request.operation_name, "executing GET request");
	Ok(Json(state.schema.execute(request).await))
}

/// POST /graphql - Execute a JSON-encoded GraphQL request.
pub async fn graphql_post(
	State(state): State<AppState>,
	Json(request): Json<Request>,
) -> Json<Response> {
	debug!(operation = ?request.operation_name, "executing POST request");
	Json(state.schema.execute(request).await)
}

/// GET /schema - Schema definition language text.
pub async fn schema_sdl(State(state): State<AppState>) -> String {
	authz_graphql::sdl(&state.schema)
}

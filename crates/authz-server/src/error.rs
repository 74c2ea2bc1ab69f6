// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Transport-level errors and their HTTP rendering.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};

use authz_engine::EngineError;
use authz_server_config::ConfigError;

/// Errors raised outside GraphQL execution.
///
/// Field-level failures never land here; they travel inside the GraphQL
/// response body.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Configuration could not be loaded
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// Engine could not be constructed or did not answer
	#[error("engine error: {0}")]
	Engine(#[from] EngineError),

	/// GET query string was missing `query` or could not be decoded
	#[error("invalid query string: {0}")]
	InvalidQuery(String),

	/// `variables` query parameter was not a JSON object
	#[error("invalid variables: {0}")]
	InvalidVariables(String),

	/// I/O error binding or serving
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::InvalidQuery(_) | Self::InvalidVariables(_) => StatusCode::BAD_REQUEST,
			Self::Engine(_) => StatusCode::SERVICE_UNAVAILABLE,
			Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn error_code(&self) -> &'static str {
		match self {
			Self::Config(_) => "config_error",
			Self::Engine(_) => "engine_error",
			Self::InvalidQuery(_) => "invalid_query",
			Self::InvalidVariables(_) => "invalid_variables",
			Self::Io(_) => "internal_error",
		}
	}
}

/// JSON body returned for transport-level failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		(
			status,
			Json(ErrorResponse {
				error: self.error_code().to_string(),
				message: self.to_string(),
			}),
		)
			.into_response()
	}
}

pub type Result<T> = std::result::Result<T, ServerError>;

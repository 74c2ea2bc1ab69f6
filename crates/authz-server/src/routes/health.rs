// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: DateTime<Utc>,
	/// Stored policy tuples; absent when the engine did not answer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub policy_count: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// GET /health - Reports whether the engine answers a listing.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let (status, body) = match state.engine.policies().await {
		Ok(policies) => (
			StatusCode::OK,
			HealthResponse {
				status: HealthStatus::Healthy,
				timestamp: Utc::now(),
				policy_count: Some(policies.len()),
				error: None,
			},
		),
		Err(e) => {
			tracing::warn!(error = %e, "health check: engine did not answer");
			(
				StatusCode::SERVICE_UNAVAILABLE,
				HealthResponse {
					status: HealthStatus::Unhealthy,
					timestamp: Utc::now(),
					policy_count: None,
					error: Some(e.to_string()),
				},
			)
		}
	};

	(status, Json(body))
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! State construction from file-backed configuration.

use authz_engine::casbin_engine::RBAC_MODEL;
use authz_server::{create_app_state, create_router, GatewayConfig, ServerError};
use authz_server_config::EngineConfig;
use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::Value;
use tower::ServiceExt;

fn config_in(dir: &tempfile::TempDir, policy: Option<&str>) -> GatewayConfig {
	let model_path = dir.path().join("model.conf");
	std::fs::write(&model_path, RBAC_MODEL).unwrap();

	let policy_path = dir.path().join("policy.csv");
	if let Some(policy) = policy {
		std::fs::write(&policy_path, policy).unwrap();
	}

	GatewayConfig {
		engine: EngineConfig {
			model_path,
			policy_path,
		},
		..Default::default()
	}
}

#[tokio::test]
async fn state_loads_policy_file() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_in(
		&dir,
		Some("p, alice, data1, read\np, data2_admin, data2, read\ng, alice, data2_admin\n"),
	);

	let state = create_app_state(&config).await.unwrap();
	let response = authz_graphql::execute(
		&state.schema,
		r#"{ enforce(sub: "alice", obj: "data2", act: "read") { ok } }"#,
	)
	.await;
	let body = serde_json::to_value(response).unwrap();
	assert_eq!(body["data"]["enforce"]["ok"], Value::Bool(true));

	let response = create_router(state)
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let health: Value = serde_json::from_slice(&body).unwrap();
	assert_eq!(health["policy_count"], Value::from(2));
}

#[tokio::test]
async fn missing_policy_file_fails_startup() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_in(&dir, None);

	let err = create_app_state(&config).await.err().unwrap();
	assert!(matches!(err, ServerError::Engine(_)));
	assert!(err.to_string().contains("policy.csv"));
}

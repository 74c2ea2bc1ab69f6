// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! File-backed casbin engine tests against the RBAC fixture.

use std::io::Write;
use std::path::PathBuf;

use authz_engine::{CasbinEngine, EnforcementEngine, EngineError, PolicyRule};

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("fixtures")
		.join(name)
}

async fn load() -> CasbinEngine {
	CasbinEngine::from_files(fixture("rbac_model.conf"), fixture("rbac_policy.csv"))
		.await
		.unwrap()
}

#[tokio::test]
async fn lists_policies_in_file_order() {
	let engine = load().await;

	let policies = engine.policies().await.unwrap();
	let decoded: Vec<PolicyRule> = policies
		.into_iter()
		.map(|raw| PolicyRule::from_raw(raw).unwrap())
		.collect();

	assert_eq!(
		decoded,
		vec![
			PolicyRule::new("alice", "data1", "read"),
			PolicyRule::new("bob", "data2", "write"),
			PolicyRule::new("data2_admin", "data2", "read"),
			PolicyRule::new("data2_admin", "data2", "write"),
		]
	);
}

#[tokio::test]
async fn role_members_inherit_role_permissions() {
	let engine = load().await;

	let cases = [
		("alice", "data1", "read", true),
		("bob", "data2", "write", true),
		("data2_admin", "data2", "read", true),
		("data2_admin", "data2", "write", true),
		("alice", "data2", "write", true),
		("alice", "data2", "read", true),
		("alice", "data1", "write", false),
	];

	for (sub, obj, act, expected) in cases {
		let allowed = engine
			.enforce(&PolicyRule::new(sub, obj, act))
			.await
			.unwrap();
		assert_eq!(allowed, expected, "enforce({sub}, {obj}, {act})");
	}
}

#[tokio::test]
async fn update_moves_role_permission() {
	let engine = load().await;

	let updated = engine
		.update_policy(
			&PolicyRule::new("data2_admin", "data2", "read"),
			&PolicyRule::new("data2_admin", "data3", "read"),
		)
		.await
		.unwrap();

	assert!(updated);
	assert!(engine
		.enforce(&PolicyRule::new("alice", "data3", "read"))
		.await
		.unwrap());
	assert!(!engine
		.enforce(&PolicyRule::new("data2_admin", "data2", "read"))
		.await
		.unwrap());
}

#[tokio::test]
async fn missing_policy_file_is_a_load_error() {
	let result = CasbinEngine::from_files(fixture("rbac_model.conf"), fixture("missing.csv")).await;

	match result {
		Err(EngineError::Load { kind, path, .. }) => {
			assert_eq!(kind, "policy");
			assert!(path.ends_with("missing.csv"));
		}
		Err(other) => panic!("unexpected error: {other}"),
		Ok(_) => panic!("expected load error"),
	}
}

#[tokio::test]
async fn missing_model_file_is_a_load_error() {
	let result = CasbinEngine::from_files(fixture("missing.conf"), fixture("rbac_policy.csv")).await;
	assert!(matches!(result, Err(EngineError::Load { kind: "model", .. })));
}

#[tokio::test]
async fn loads_policy_from_temp_dir() {
	let dir = tempfile::tempdir().unwrap();
	let policy_path = dir.path().join("policy.csv");
	let mut file = std::fs::File::create(&policy_path).unwrap();
	writeln!(file, "p, carol, reports, read").unwrap();

	let engine = CasbinEngine::from_files(fixture("rbac_model.conf"), &policy_path)
		.await
		.unwrap();

	assert_eq!(engine.policy_count().await, 1);
	assert!(engine
		.enforce(&PolicyRule::new("carol", "reports", "read"))
		.await
		.unwrap());
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use authz_engine::casbin_engine::RBAC_MODEL;
use authz_engine::{
	CasbinEngine, EnforcementEngine, EngineError, EngineSeed, GroupingRule, PolicyRule,
	SharedEngine,
};
use authz_graphql::{build_schema, execute, AuthzSchema};
use serde_json::Value;

/// Engine seeded with `{alice,data1,read}` and `{bob,data2,write}`.
pub async fn basic_engine() -> SharedEngine {
	let seed = EngineSeed::new()
		.with_policy(PolicyRule::new("alice", "data1", "read"))
		.with_policy(PolicyRule::new("bob", "data2", "write"));
	Arc::new(CasbinEngine::from_model_str(RBAC_MODEL, &seed).await.unwrap())
}

/// Engine mirroring the RBAC policy fixture: alice is a data2_admin.
pub async fn rbac_engine() -> SharedEngine {
	let seed = EngineSeed::new()
		.with_policy(PolicyRule::new("alice", "data1", "read"))
		.with_policy(PolicyRule::new("bob", "data2", "write"))
		.with_policy(PolicyRule::new("data2_admin", "data2", "read"))
		.with_policy(PolicyRule::new("data2_admin", "data2", "write"))
		.with_grouping(GroupingRule::new("alice", "data2_admin"));
	Arc::new(CasbinEngine::from_model_str(RBAC_MODEL, &seed).await.unwrap())
}

/// Runs a document and returns the serialized `{data, errors}` response.
pub async fn run(schema: &AuthzSchema, query: &str) -> Value {
	serde_json::to_value(execute(schema, query).await).unwrap()
}

/// Runs a document that must not produce errors and returns `data`.
pub async fn data(schema: &AuthzSchema, query: &str) -> Value {
	let response = run(schema, query).await;
	assert!(
		response.get("errors").is_none(),
		"unexpected errors for {query}: {response}"
	);
	response["data"].clone()
}

pub async fn enforce_ok(schema: &AuthzSchema, sub: &str, obj: &str, act: &str) -> bool {
	let query = format!(r#"{{ enforce(sub: "{sub}", obj: "{obj}", act: "{act}") {{ sub obj act ok }} }}"#);
	data(schema, &query).await["enforce"]["ok"]
		.as_bool()
		.unwrap()
}

pub async fn mutate_ok(schema: &AuthzSchema, op: &str, sub: &str, obj: &str, act: &str) -> bool {
	let query =
		format!(r#"mutation {{ {op}(sub: "{sub}", obj: "{obj}", act: "{act}") {{ sub obj act ok }} }}"#);
	data(schema, &query).await[op]["ok"].as_bool().unwrap()
}

pub fn build(engine: SharedEngine) -> AuthzSchema {
	build_schema(engine)
}

/// Engine whose every call fails, counting how often it was reached.
#[derive(Default)]
pub struct FailingEngine {
	pub calls: AtomicUsize,
}

impl FailingEngine {
	fn fail<T>(&self) -> authz_engine::Result<T> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Err(EngineError::backend("policy store unavailable"))
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl EnforcementEngine for FailingEngine {
	async fn enforce(&self, _request: &PolicyRule) -> authz_engine::Result<bool> {
		self.fail()
	}

	async fn policies(&self) -> authz_engine::Result<Vec<Vec<String>>> {
		self.fail()
	}

	async fn add_policy(&self, _rule: &PolicyRule) -> authz_engine::Result<bool> {
		self.fail()
	}

	async fn remove_policy(&self, _rule: &PolicyRule) -> authz_engine::Result<bool> {
		self.fail()
	}

	async fn update_policy(&self, _old: &PolicyRule, _new: &PolicyRule) -> authz_engine::Result<bool> {
		self.fail()
	}
}

/// Engine that answers normally except for listing, which returns a short tuple.
pub struct ShortTupleEngine;

#[async_trait]
impl EnforcementEngine for ShortTupleEngine {
	async fn enforce(&self, _request: &PolicyRule) -> authz_engine::Result<bool> {
		Ok(true)
	}

	async fn policies(&self) -> authz_engine::Result<Vec<Vec<String>>> {
		Ok(vec![
			vec!["alice".to_string(), "data1".to_string(), "read".to_string()],
			vec!["bob".to_string(), "data2".to_string()],
		])
	}

	async fn add_policy(&self, _rule: &PolicyRule) -> authz_engine::Result<bool> {
		Ok(true)
	}

	async fn remove_policy(&self, _rule: &PolicyRule) -> authz_engine::Result<bool> {
		Ok(true)
	}

	async fn update_policy(&self, _old: &PolicyRule, _new: &PolicyRule) -> authz_engine::Result<bool> {
		Ok(true)
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolver set.
//!
//! One function per schema operation. Each makes exactly one call into the
//! [`EnforcementEngine`] and shapes the answer into a result object. No
//! retries, no validation, no fallback values: an engine error aborts the
//! operation and is returned as-is.
//!
//! A `false` outcome (duplicate add, missing delete, missing update target,
//! denied request) is ordinary data, never an error.

use authz_engine::{EnforcementEngine, EngineError, PolicyRule};
use tracing::{debug, instrument};

use crate::types::{EnforceResult, Policy, UpdateResult};

#[instrument(level = "debug", skip(engine, request), fields(request = %request))]
pub async fn enforce(
	engine: &dyn EnforcementEngine,
	request: PolicyRule,
) -> Result<EnforceResult, EngineError> {
	let ok = engine.enforce(&request).await?;
	debug!(ok, "enforce resolved");
	Ok(EnforceResult::new(request, ok))
}

/// Lists every stored policy, preserving engine order.
#[instrument(level = "debug", skip(engine))]
pub async fn policy(engine: &dyn EnforcementEngine) -> Result<Vec<Policy>, EngineError> {
	let raw = engine.policies().await?;
	let policies = raw
		.into_iter()
		.map(|tuple| PolicyRule::from_raw(tuple).map(Policy::from))
		.collect::<Result<Vec<_>, _>>()?;
	debug!(count = policies.len(), "policy resolved");
	Ok(policies)
}

#[instrument(level = "debug", skip(engine, rule), fields(rule = %rule))]
pub async fn add(
	engine: &dyn EnforcementEngine,
	rule: PolicyRule,
) -> Result<EnforceResult, EngineError> {
	let ok = engine.add_policy(&rule).await?;
	debug!(ok, "add resolved");
	Ok(EnforceResult::new(rule, ok))
}

#[instrument(level = "debug", skip(engine, rule), fields(rule = %rule))]
pub async fn delete(
	engine: &dyn EnforcementEngine,
	rule: PolicyRule,
) -> Result<EnforceResult, EngineError> {
	let ok = engine.remove_policy(&rule).await?;
	debug!(ok, "delete resolved");
	Ok(EnforceResult::new(rule, ok))
}

/// Replaces `old` with `new`.
///
/// The engine is always called as `(old, new)`; the result lists the new
/// tuple first.
#[instrument(level = "debug", skip(engine, new, old), fields(new = %new, old = %old))]
pub async fn update(
	engine: &dyn EnforcementEngine,
	new: PolicyRule,
	old: PolicyRule,
) -> Result<UpdateResult, EngineError> {
	let ok = engine.update_policy(&old, &new).await?;
	debug!(ok, "update resolved");
	Ok(UpdateResult::new(new, old, ok))
}

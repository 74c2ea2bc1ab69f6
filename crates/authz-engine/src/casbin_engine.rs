// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Casbin-backed enforcement engine.
//!
//! [`CasbinEngine`] wraps a single [`casbin::Enforcer`] behind a tokio
//! `RwLock`. Decisions and listings share the read lock; every mutation takes
//! the write lock, so concurrent writers against the same store are
//! serialized here rather than in the gateway.

use std::path::Path;

use async_trait::async_trait;
use casbin::{CoreApi, DefaultModel, Enforcer, FileAdapter, MemoryAdapter, MgmtApi};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::engine::EnforcementEngine;
use crate::error::{EngineError, Result};
use crate::rule::{EngineSeed, PolicyRule};

/// RBAC model with one role level: `g(user, role)`.
pub const RBAC_MODEL: &str = r#"
[request_definition]
r = sub, obj, act

[policy_definition]
p = sub, obj, act

[role_definition]
g = _, _

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = g(r.sub, p.sub) && r.obj == p.obj && r.act == p.act
"#;

pub struct CasbinEngine {
	enforcer: RwLock<Enforcer>,
}

impl CasbinEngine {
	/// Wraps an already constructed enforcer.
	pub fn new(enforcer: Enforcer) -> Self {
		Self {
			enforcer: RwLock::new(enforcer),
		}
	}

	/// Loads a model `.conf` file and a CSV policy file.
	pub async fn from_files(
		model_path: impl AsRef<Path>,
		policy_path: impl AsRef<Path>,
	) -> Result<Self> {
		let model_path = model_path.as_ref();
		let policy_path = policy_path.as_ref();

		let model = DefaultModel::from_file(model_path)
			.await
			.map_err(|e| EngineError::Load {
				kind: "model",
				path: model_path.to_path_buf(),
				message: e.to_string(),
			})?;

		if !policy_path.exists() {
			return Err(EngineError::Load {
				kind: "policy",
				path: policy_path.to_path_buf(),
				message: "file not found".to_string(),
			});
		}

		let adapter = FileAdapter::new(policy_path.to_path_buf());
		let enforcer = Enforcer::new(model, adapter)
			.await
			.map_err(|e| EngineError::Load {
				kind: "policy",
				path: policy_path.to_path_buf(),
				message: e.to_string(),
			})?;

		info!(
			model = %model_path.display(),
			policy = %policy_path.display(),
			policies = enforcer.get_policy().len(),
			"casbin engine loaded"
		);

		Ok(Self::new(enforcer))
	}

	/// Builds an in-memory engine from model text and seed rules.
	pub async fn from_model_str(model: &str, seed: &EngineSeed) -> Result<Self> {
		let model = DefaultModel::from_str(model).await?;
		let mut enforcer = Enforcer::new(model, MemoryAdapter::default()).await?;

		for rule in &seed.policies {
			enforcer.add_policy(rule.to_params()).await?;
		}

		for grouping in &seed.groupings {
			enforcer
				.add_grouping_policy(vec![grouping.member.clone(), grouping.role.clone()])
				.await?;
		}

		enforcer.build_role_links()?;

		debug!(
			policies = seed.policies.len(),
			groupings = seed.groupings.len(),
			"in-memory casbin engine seeded"
		);

		Ok(Self::new(enforcer))
	}

	/// Number of stored policy tuples.
	pub async fn policy_count(&self) -> usize {
		self.enforcer.read().await.get_policy().len()
	}
}

#[async_trait]
impl EnforcementEngine for CasbinEngine {
	#[instrument(level = "debug", skip(self), fields(request = %request))]
	async fn enforce(&self, request: &PolicyRule) -> Result<bool> {
		let enforcer = self.enforcer.read().await;
		let allowed = enforcer.enforce((
			request.subject.as_str(),
			request.object.as_str(),
			request.action.as_str(),
		))?;
		debug!(allowed, "enforce decision");
		Ok(allowed)
	}

	async fn policies(&self) -> Result<Vec<Vec<String>>> {
		Ok(self.enforcer.read().await.get_policy())
	}

	#[instrument(level = "debug", skip(self), fields(rule = %rule))]
	async fn add_policy(&self, rule: &PolicyRule) -> Result<bool> {
		let mut enforcer = self.enforcer.write().await;
		let added = enforcer.add_policy(rule.to_params()).await?;
		debug!(added, "add policy");
		Ok(added)
	}

	#[instrument(level = "debug", skip(self), fields(rule = %rule))]
	async fn remove_policy(&self, rule: &PolicyRule) -> Result<bool> {
		let mut enforcer = self.enforcer.write().await;
		let removed = enforcer.remove_policy(rule.to_params()).await?;
		debug!(removed, "remove policy");
		Ok(removed)
	}

	/// Replaces `old` with `new` at `old`'s position under one write lock.
	///
	/// casbin has no in-place update, so the `p` rules are removed and added
	/// back with `new` substituted. A copy of `new` found elsewhere in the
	/// listing is dropped. If adding fails, the previous listing is put back
	/// before the error is returned.
	#[instrument(level = "debug", skip(self), fields(old = %old, new = %new))]
	async fn update_policy(&self, old: &PolicyRule, new: &PolicyRule) -> Result<bool> {
		let mut enforcer = self.enforcer.write().await;

		let current = enforcer.get_policy();
		let old_params = old.to_params();
		let Some(index) = current.iter().position(|rule| *rule == old_params) else {
			debug!("old policy not found, nothing to update");
			return Ok(false);
		};
		let rebuilt = replace_at(&current, index, new.to_params());

		if !enforcer.remove_policies(current.clone()).await? {
			debug!("adapter refused to remove policies, nothing to update");
			return Ok(false);
		}

		match enforcer.add_policies(rebuilt).await {
			Ok(true) => {
				debug!(index, "policy updated");
				Ok(true)
			}
			Ok(false) => {
				restore(&mut enforcer, current).await;
				Ok(false)
			}
			Err(e) => {
				restore(&mut enforcer, current).await;
				Err(e.into())
			}
		}
	}
}

/// Copies `rules` with the entry at `index` swapped for `new`.
fn replace_at(rules: &[Vec<String>], index: usize, new: Vec<String>) -> Vec<Vec<String>> {
	let mut rebuilt = Vec::with_capacity(rules.len());
	for (i, rule) in rules.iter().enumerate() {
		if i == index {
			rebuilt.push(new.clone());
		} else if *rule != new {
			rebuilt.push(rule.clone());
		}
	}
	rebuilt
}

/// Puts a previously read listing back after a failed update.
///
/// When the adapter keeps failing, the listing is restored in the model only
/// so decisions stay as they were before the update.
async fn restore(enforcer: &mut Enforcer, previous: Vec<Vec<String>>) {
	match enforcer.add_policies(previous.clone()).await {
		Ok(true) => return,
		Ok(false) => warn!("adapter refused restored policies, restoring in memory only"),
		Err(e) => warn!(error = %e, "adapter rejected restored policies, restoring in memory only"),
	}

	enforcer.enable_auto_save(false);
	if let Err(e) = enforcer.add_policies(previous).await {
		warn!(error = %e, "failed to restore policies after update error");
	}
	enforcer.enable_auto_save(true);
}

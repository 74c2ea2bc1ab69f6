// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The enforcement engine interface consumed by the gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::rule::PolicyRule;

/// Policy store and decision point.
///
/// Implementations own matching semantics, storage and write serialization.
/// Callers treat every method as atomic and make no assumptions about how a
/// decision was reached.
#[async_trait]
pub trait EnforcementEngine: Send + Sync {
	/// Returns whether the request tuple is permitted by the loaded model.
	async fn enforce(&self, request: &PolicyRule) -> Result<bool>;

	/// Returns every stored policy tuple in the engine's iteration order.
	///
	/// Tuples are raw; callers decode them with [`PolicyRule::from_raw`].
	async fn policies(&self) -> Result<Vec<Vec<String>>>;

	/// Adds a rule. Returns `false` if the identical rule already exists.
	async fn add_policy(&self, rule: &PolicyRule) -> Result<bool>;

	/// Removes a rule. Returns `false` if no identical rule existed.
	async fn remove_policy(&self, rule: &PolicyRule) -> Result<bool>;

	/// Replaces `old` with `new`. Returns `false` if `old` did not exist.
	async fn update_policy(&self, old: &PolicyRule, new: &PolicyRule) -> Result<bool>;
}

/// Engine handle shared by every resolver built from it.
pub type SharedEngine = Arc<dyn EnforcementEngine>;

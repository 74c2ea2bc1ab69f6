// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GraphQL result objects.
//!
//! These are per-request data shapes: built fresh by a resolver, serialized,
//! and dropped.

use async_graphql::SimpleObject;
use authz_engine::PolicyRule;

/// A stored policy rule.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Policy {
	pub sub: String,
	pub obj: String,
	pub act: String,
}

impl From<PolicyRule> for Policy {
	fn from(rule: PolicyRule) -> Self {
		Self {
			sub: rule.subject,
			obj: rule.object,
			act: rule.action,
		}
	}
}

/// Echo of an enforce, add or delete request with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct EnforceResult {
	pub sub: String,
	pub obj: String,
	pub act: String,
	pub ok: bool,
}

impl EnforceResult {
	pub fn new(rule: PolicyRule, ok: bool) -> Self {
		Self {
			sub: rule.subject,
			obj: rule.object,
			act: rule.action,
			ok,
		}
	}
}

/// Echo of an update request: new tuple, old tuple, outcome.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct UpdateResult {
	pub sub: String,
	pub obj: String,
	pub act: String,
	pub osub: String,
	pub oobj: String,
	pub oact: String,
	pub ok: bool,
}

impl UpdateResult {
	pub fn new(new: PolicyRule, old: PolicyRule, ok: bool) -> Self {
		Self {
			sub: new.subject,
			obj: new.object,
			act: new.action,
			osub: old.subject,
			oobj: old.object,
			oact: old.action,
			ok,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn update_result_keeps_new_then_old() {
		let result = UpdateResult::new(
			PolicyRule::new("alice", "data1", "write"),
			PolicyRule::new("alice", "data1", "read"),
			true,
		);

		assert_eq!(result.act, "write");
		assert_eq!(result.oact, "read");
		assert!(result.ok);
	}

	#[test]
	fn policy_maps_fields_positionally() {
		let policy = Policy::from(PolicyRule::new("bob", "data2", "write"));
		assert_eq!(
			policy,
			Policy {
				sub: "bob".to_string(),
				obj: "data2".to_string(),
				act: "write".to_string(),
			}
		);
	}
}

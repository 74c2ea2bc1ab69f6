// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy tuple types crossing the engine seam.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One (subject, object, action) rule.
///
/// Field order is fixed; engines receive and return tuples in exactly this
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyRule {
	pub subject: String,
	pub object: String,
	pub action: String,
}

impl PolicyRule {
	pub fn new(
		subject: impl Into<String>,
		object: impl Into<String>,
		action: impl Into<String>,
	) -> Self {
		Self {
			subject: subject.into(),
			object: object.into(),
			action: action.into(),
		}
	}

	/// Decodes a raw engine tuple positionally.
	///
	/// Anything other than exactly three fields is a contract violation and is
	/// reported as [`EngineError::MalformedTuple`] rather than truncated or
	/// padded.
	pub fn from_raw(raw: Vec<String>) -> Result<Self> {
		match <[String; 3]>::try_from(raw) {
			Ok([subject, object, action]) => Ok(Self {
				subject,
				object,
				action,
			}),
			Err(raw) => Err(EngineError::MalformedTuple {
				len: raw.len(),
				tuple: raw,
			}),
		}
	}

	/// Raw parameter vector in (subject, object, action) order.
	pub fn to_params(&self) -> Vec<String> {
		vec![
			self.subject.clone(),
			self.object.clone(),
			self.action.clone(),
		]
	}
}

impl fmt::Display for PolicyRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {})", self.subject, self.object, self.action)
	}
}

/// Role assignment: `member` inherits every permission of `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingRule {
	pub member: String,
	pub role: String,
}

impl GroupingRule {
	pub fn new(member: impl Into<String>, role: impl Into<String>) -> Self {
		Self {
			member: member.into(),
			role: role.into(),
		}
	}
}

/// Initial contents for an in-memory engine.
#[derive(Debug, Clone, Default)]
pub struct EngineSeed {
	pub policies: Vec<PolicyRule>,
	pub groupings: Vec<GroupingRule>,
}

impl EngineSeed {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_policy(mut self, rule: PolicyRule) -> Self {
		self.policies.push(rule);
		self
	}

	pub fn with_grouping(mut self, grouping: GroupingRule) -> Self {
		self.groupings.push(grouping);
		self
	}
}

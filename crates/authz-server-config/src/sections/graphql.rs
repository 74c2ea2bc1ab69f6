// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GraphQL execution limits.

use serde::Deserialize;

/// GraphQL configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlConfig {
	pub introspection: bool,
	pub max_depth: Option<usize>,
	pub max_complexity: Option<usize>,
}

impl Default for GraphqlConfig {
	fn default() -> Self {
		Self {
			introspection: true,
			max_depth: None,
			max_complexity: None,
		}
	}
}

/// GraphQL configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GraphqlConfigLayer {
	#[serde(default)]
	pub introspection: Option<bool>,
	#[serde(default)]
	pub max_depth: Option<usize>,
	#[serde(default)]
	pub max_complexity: Option<usize>,
}

impl GraphqlConfigLayer {
	pub fn merge(&mut self, other: GraphqlConfigLayer) {
		if other.introspection.is_some() {
			self.introspection = other.introspection;
		}
		if other.max_depth.is_some() {
			self.max_depth = other.max_depth;
		}
		if other.max_complexity.is_some() {
			self.max_complexity = other.max_complexity;
		}
	}

	pub fn finalize(self) -> GraphqlConfig {
		GraphqlConfig {
			introspection: self.introspection.unwrap_or(true),
			max_depth: self.max_depth,
			max_complexity: self.max_complexity,
		}
	}
}

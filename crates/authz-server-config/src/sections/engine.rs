// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Enforcement engine file locations.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_MODEL_PATH: &str = "model.conf";
pub const DEFAULT_POLICY_PATH: &str = "policy.csv";

/// Engine configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
	/// Access-control model definition.
	pub model_path: PathBuf,
	/// CSV policy store loaded at startup.
	pub policy_path: PathBuf,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			model_path: PathBuf::from(DEFAULT_MODEL_PATH),
			policy_path: PathBuf::from(DEFAULT_POLICY_PATH),
		}
	}
}

/// Engine configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfigLayer {
	#[serde(default)]
	pub model_path: Option<PathBuf>,
	#[serde(default)]
	pub policy_path: Option<PathBuf>,
}

impl EngineConfigLayer {
	pub fn merge(&mut self, other: EngineConfigLayer) {
		if other.model_path.is_some() {
			self.model_path = other.model_path;
		}
		if other.policy_path.is_some() {
			self.policy_path = other.policy_path;
		}
	}

	pub fn finalize(self) -> EngineConfig {
		EngineConfig {
			model_path: self
				.model_path
				.unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
			policy_path: self
				.policy_path
				.unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_PATH)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_paths() {
		let config = EngineConfigLayer::default().finalize();
		assert_eq!(config.model_path, PathBuf::from("model.conf"));
		assert_eq!(config.policy_path, PathBuf::from("policy.csv"));
	}

	#[test]
	fn test_custom_paths() {
		let layer = EngineConfigLayer {
			model_path: Some(PathBuf::from("/srv/authz/rbac.conf")),
			policy_path: None,
		};
		let config = layer.finalize();
		assert_eq!(config.model_path, PathBuf::from("/srv/authz/rbac.conf"));
		assert_eq!(config.policy_path, PathBuf::from("policy.csv"));
	}
}

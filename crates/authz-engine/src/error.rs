// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for enforcement engine calls.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while talking to the enforcement engine.
#[derive(Debug, Error)]
pub enum EngineError {
	/// The delegated engine call itself failed
	#[error("enforcement engine call failed: {message}")]
	Backend { message: String },

	/// A stored tuple did not have exactly (subject, object, action)
	#[error("malformed policy tuple: expected 3 fields, got {len} ({tuple:?})")]
	MalformedTuple { len: usize, tuple: Vec<String> },

	/// Model or policy source could not be loaded
	#[error("failed to load {kind} from {}: {message}", .path.display())]
	Load {
		kind: &'static str,
		path: PathBuf,
		message: String,
	},
}

impl EngineError {
	/// Stable machine-readable code for API error extensions.
	pub fn code(&self) -> &'static str {
		match self {
			Self::Backend { .. } => "ENGINE_ERROR",
			Self::MalformedTuple { .. } => "MALFORMED_TUPLE",
			Self::Load { .. } => "ENGINE_LOAD_ERROR",
		}
	}

	/// Create a backend error from an engine failure message
	pub fn backend(message: impl Into<String>) -> Self {
		Self::Backend {
			message: message.into(),
		}
	}
}

impl From<casbin::Error> for EngineError {
	fn from(e: casbin::Error) -> Self {
		Self::Backend {
			message: e.to_string(),
		}
	}
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

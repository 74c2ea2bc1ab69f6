// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source.

use serde::Deserialize;

use crate::sections::{EngineConfigLayer, GraphqlConfigLayer, HttpConfigLayer, LoggingConfigLayer};

/// Gateway configuration layer (partial, for merging).
///
/// Sections left as `None` fall through to lower-precedence sources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub engine: Option<EngineConfigLayer>,
	#[serde(default)]
	pub graphql: Option<GraphqlConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl GatewayConfigLayer {
	/// Overlay `other` on top of `self`; values present in `other` win.
	pub fn merge(&mut self, other: GatewayConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.engine, other.engine, EngineConfigLayer::merge);
		merge_section(&mut self.graphql, other.graphql, GraphqlConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(overlay)) => merge(existing, overlay),
		(None, Some(overlay)) => *base = Some(overlay),
		(_, None) => {}
	}
}

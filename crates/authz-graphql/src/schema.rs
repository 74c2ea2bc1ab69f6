// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema builder.
//!
//! Wires operation names and arguments to the resolver set. Argument presence
//! and types are checked by async-graphql before a resolver runs; nothing here
//! validates input.
//!
//! Root fields are nullable so that one failing field reports an error and
//! resolves to `null` without discarding its siblings.

use async_graphql::{EmptySubscription, Error, ErrorExtensions, Object, Response, Schema};
use authz_engine::{EngineError, PolicyRule, SharedEngine};

use crate::resolvers;
use crate::types::{EnforceResult, Policy, UpdateResult};

/// The complete gateway schema.
pub type AuthzSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Execution limits applied when building a schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaOptions {
	pub max_depth: Option<usize>,
	pub max_complexity: Option<usize>,
	pub disable_introspection: bool,
}

/// Read operations.
pub struct QueryRoot {
	engine: SharedEngine,
}

impl QueryRoot {
	pub fn new(engine: SharedEngine) -> Self {
		Self { engine }
	}
}

#[Object]
impl QueryRoot {
	/// Check a request against the loaded policy
	async fn enforce(
		&self,
		sub: String,
		obj: String,
		act: String,
	) -> async_graphql::Result<Option<EnforceResult>> {
		resolvers::enforce(self.engine.as_ref(), PolicyRule::new(sub, obj, act))
			.await
			.map(Some)
			.map_err(field_error)
	}

	/// Get all policy
	async fn policy(&self) -> async_graphql::Result<Option<Vec<Policy>>> {
		resolvers::policy(self.engine.as_ref())
			.await
			.map(Some)
			.map_err(field_error)
	}
}

/// Mutating operations.
pub struct MutationRoot {
	engine: SharedEngine,
}

impl MutationRoot {
	pub fn new(engine: SharedEngine) -> Self {
		Self { engine }
	}
}

#[Object]
impl MutationRoot {
	/// Add a policy
	async fn add(
		&self,
		sub: String,
		obj: String,
		act: String,
	) -> async_graphql::Result<Option<EnforceResult>> {
		resolvers::add(self.engine.as_ref(), PolicyRule::new(sub, obj, act))
			.await
			.map(Some)
			.map_err(field_error)
	}

	/// Delete a policy
	async fn delete(
		&self,
		sub: String,
		obj: String,
		act: String,
	) -> async_graphql::Result<Option<EnforceResult>> {
		resolvers::delete(self.engine.as_ref(), PolicyRule::new(sub, obj, act))
			.await
			.map(Some)
			.map_err(field_error)
	}

	/// Update a policy
	async fn update(
		&self,
		sub: String,
		obj: String,
		act: String,
		osub: String,
		oobj: String,
		oact: String,
	) -> async_graphql::Result<Option<UpdateResult>> {
		resolvers::update(
			self.engine.as_ref(),
			PolicyRule::new(sub, obj, act),
			PolicyRule::new(osub, oobj, oact),
		)
		.await
		.map(Some)
		.map_err(field_error)
	}
}

/// Converts an engine failure into a field error tagged with its code.
fn field_error(err: EngineError) -> Error {
	let code = err.code();
	Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code.to_string()))
}

/// Builds the schema with default options.
///
/// Every resolver shares the given engine handle.
pub fn build_schema(engine: SharedEngine) -> AuthzSchema {
	build_schema_with(engine, &SchemaOptions::default())
}

pub fn build_schema_with(engine: SharedEngine, options: &SchemaOptions) -> AuthzSchema {
	let mut builder = Schema::build(
		QueryRoot::new(engine.clone()),
		MutationRoot::new(engine),
		EmptySubscription,
	);

	if let Some(depth) = options.max_depth {
		builder = builder.limit_depth(depth);
	}
	if let Some(complexity) = options.max_complexity {
		builder = builder.limit_complexity(complexity);
	}
	if options.disable_introspection {
		builder = builder.disable_introspection();
	}

	builder.finish()
}

/// Executes one query document.
pub async fn execute(schema: &AuthzSchema, query: &str) -> Response {
	schema.execute(query).await
}

/// Schema definition language text.
pub fn sdl(schema: &AuthzSchema) -> String {
	schema.sdl()
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GraphQL surface for the authz gateway.
//!
//! | Operation | Kind | Returns |
//! |---|---|---|
//! | `enforce(sub, obj, act)` | query | [`EnforceResult`] |
//! | `policy` | query | list of [`Policy`] |
//! | `add(sub, obj, act)` | mutation | [`EnforceResult`] |
//! | `delete(sub, obj, act)` | mutation | [`EnforceResult`] |
//! | `update(sub, obj, act, osub, oobj, oact)` | mutation | [`UpdateResult`] |
//!
//! # Usage
//!
//! ```ignore
//! let engine: SharedEngine = Arc::new(CasbinEngine::from_files("model.conf", "policy.csv").await?);
//! let schema = build_schema(engine);
//! let response = execute(&schema, r#"{ enforce(sub: "alice", obj: "data1", act: "read") { ok } }"#).await;
//! ```

pub mod resolvers;
pub mod schema;
pub mod types;

pub use schema::{
	build_schema, build_schema_with, execute, sdl, AuthzSchema, MutationRoot, QueryRoot,
	SchemaOptions,
};
pub use types::{EnforceResult, Policy, UpdateResult};

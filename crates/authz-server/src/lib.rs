// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP gateway exposing a casbin policy store over GraphQL.
//!
//! Routes:
//! - `GET /`, `GET /graphql`: document in `?query=`, optional `operationName`
//!   and JSON-encoded `variables`
//! - `POST /`, `POST /graphql`: JSON GraphQL request body
//! - `GET /schema`: SDL
//! - `GET /health`: engine reachability and policy count

pub mod api;
pub mod error;
pub mod logging;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, schema_options, AppState};
pub use authz_server_config::GatewayConfig;
pub use error::{ErrorResponse, ServerError};

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod engine;
mod graphql;
mod http;
mod logging;

pub use engine::{EngineConfig, EngineConfigLayer};
pub use graphql::{GraphqlConfig, GraphqlConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};

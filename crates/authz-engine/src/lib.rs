// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy enforcement engine seam for the authz gateway.
//!
//! The gateway never evaluates policies itself. Everything it knows about
//! matching, storage and role inheritance sits behind [`EnforcementEngine`]:
//!
//! - [`PolicyRule`]: the (subject, object, action) tuple crossing the seam
//! - [`EnforcementEngine`]: the five calls the gateway makes
//! - [`CasbinEngine`]: the production engine, backed by `casbin`
//!
//! Raw tuples coming back from the engine are decoded with
//! [`PolicyRule::from_raw`], which rejects anything that is not exactly three
//! fields long.

pub mod casbin_engine;
pub mod engine;
pub mod error;
pub mod rule;

pub use casbin_engine::CasbinEngine;
pub use engine::{EnforcementEngine, SharedEngine};
pub use error::{EngineError, Result};
pub use rule::{EngineSeed, GroupingRule, PolicyRule};

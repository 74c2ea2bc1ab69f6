// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup.

use authz_server_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level when it parses.
pub fn init_tracing(config: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

	let (json, pretty) = match config.format {
		LogFormat::Json => (Some(fmt::layer().json()), None),
		LogFormat::Pretty => (None, Some(fmt::layer())),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(json)
		.with(pretty)
		.init();
}

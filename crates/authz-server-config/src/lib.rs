// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the authz gateway.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`AUTHZ_GATEWAY_*`)
//!
//! # Usage
//!
//! ```ignore
//! use authz_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Gateway listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::GatewayConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
	pub http: HttpConfig,
	pub engine: EngineConfig,
	pub graphql: GraphqlConfig,
	pub logging: LoggingConfig,
}

impl GatewayConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`AUTHZ_GATEWAY_*`)
/// 2. Config file (`/etc/authz-gateway/gateway.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<GatewayConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<GatewayConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<GatewayConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = GatewayConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: GatewayConfigLayer) -> Result<GatewayConfig, ConfigError> {
	let config = GatewayConfig {
		http: layer.http.unwrap_or_default().finalize(),
		engine: layer.engine.unwrap_or_default().finalize(),
		graphql: layer.graphql.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		host = %config.http.host,
		port = config.http.port,
		model_path = %config.engine.model_path.display(),
		policy_path = %config.engine.policy_path.display(),
		introspection = config.graphql.introspection,
		max_depth = ?config.graphql.max_depth,
		max_complexity = ?config.graphql.max_complexity,
		log_format = %config.logging.format,
		"Gateway configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &GatewayConfig) -> Result<(), ConfigError> {
	if config.http.port == 0 {
		return Err(ConfigError::validation("http.port must be non-zero"));
	}
	if config.graphql.max_depth == Some(0) {
		return Err(ConfigError::validation(
			"graphql.max_depth must be greater than zero when set",
		));
	}
	if config.graphql.max_complexity == Some(0) {
		return Err(ConfigError::validation(
			"graphql.max_complexity must be greater than zero when set",
		));
	}

	Ok(())
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::GatewayConfigLayer;
use crate::sections::{
	EngineConfigLayer, GraphqlConfigLayer, HttpConfigLayer, LogFormat, LoggingConfigLayer,
};

/// Default location of the gateway config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/authz-gateway/gateway.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<GatewayConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<GatewayConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(GatewayConfigLayer::default())
	}
}

/// TOML file configuration source.
///
/// A missing file is not an error; the layer is simply empty.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<GatewayConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(GatewayConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: GatewayConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment variable source.
///
/// Convention: AUTHZ_GATEWAY_<FIELD> for http and engine,
/// AUTHZ_GATEWAY_<SECTION>_<FIELD> otherwise.
pub struct EnvSource {
	lookup: Lookup,
}

impl EnvSource {
	/// Reads from the process environment.
	pub fn new() -> Self {
		Self::with_lookup(|name| std::env::var(name).ok())
	}

	/// Reads variables through `lookup` instead of the process environment.
	pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
		Self {
			lookup: Box::new(lookup),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Result<Option<bool>, ConfigError> {
		match self.var(name) {
			Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(Some(true)),
			Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(Some(false)),
			Some(v) => Err(ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid boolean value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn parsed<T: FromStr>(&self, name: &str, kind: &str) -> Result<Option<T>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid {kind} value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn load_http(&self) -> Result<HttpConfigLayer, ConfigError> {
		Ok(HttpConfigLayer {
			host: self.var("AUTHZ_GATEWAY_HOST"),
			port: self.parsed("AUTHZ_GATEWAY_PORT", "u16")?,
		})
	}

	fn load_engine(&self) -> EngineConfigLayer {
		EngineConfigLayer {
			model_path: self.var("AUTHZ_GATEWAY_MODEL_PATH").map(PathBuf::from),
			policy_path: self.var("AUTHZ_GATEWAY_POLICY_PATH").map(PathBuf::from),
		}
	}

	fn load_graphql(&self) -> Result<GraphqlConfigLayer, ConfigError> {
		Ok(GraphqlConfigLayer {
			introspection: self.bool("AUTHZ_GATEWAY_GRAPHQL_INTROSPECTION")?,
			max_depth: self.parsed("AUTHZ_GATEWAY_GRAPHQL_MAX_DEPTH", "usize")?,
			max_complexity: self.parsed("AUTHZ_GATEWAY_GRAPHQL_MAX_COMPLEXITY", "usize")?,
		})
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		let format = match self.var("AUTHZ_GATEWAY_LOG_FORMAT") {
			Some(v) => Some(v.parse::<LogFormat>().map_err(|message| {
				ConfigError::InvalidValue {
					key: "AUTHZ_GATEWAY_LOG_FORMAT".to_string(),
					message,
				}
			})?),
			None => None,
		};

		Ok(LoggingConfigLayer {
			level: self.var("AUTHZ_GATEWAY_LOG_LEVEL"),
			format,
		})
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<GatewayConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(GatewayConfigLayer {
			http: Some(self.load_http()?),
			engine: Some(self.load_engine()),
			graphql: Some(self.load_graphql()?),
			logging: Some(self.load_logging()?),
		})
	}
}

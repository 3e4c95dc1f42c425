// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use beacon_common_theme::Theme;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::WebConfigLayer;
use crate::sections::{
	BrandingConfigLayer, I18nConfigLayer, LogFormat, LogLevel, LoggingConfigLayer,
};

/// System-wide config file location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/beacon/web.toml";

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
	fn load(&self) -> Result<WebConfigLayer, ConfigError>;
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

	fn load(&self) -> Result<WebConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(WebConfigLayer::default())
	}
}

/// TOML file configuration source.
///
/// A missing file yields an empty layer.
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

	fn load(&self) -> Result<WebConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(WebConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: WebConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `BEACON_WEB_<FIELD>`. Empty values count as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Read from the process environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read from a fixed set of variables instead of the process environment.
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(
				vars
					.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.filter(|s| !s.is_empty())
	}

	fn parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		match self.var(name) {
			Some(v) => v
				.parse()
				.map(Some)
				.map_err(|e| ConfigError::invalid_value(name, format!("'{v}': {e}"))),
			None => Ok(None),
		}
	}

	fn load_i18n(&self) -> Result<I18nConfigLayer, ConfigError> {
		Ok(I18nConfigLayer {
			default_locale: self.var("BEACON_WEB_DEFAULT_LOCALE"),
			baseline_key: self.var("BEACON_WEB_BASELINE_KEY"),
			cookie_name: self.var("BEACON_WEB_LOCALE_COOKIE_NAME"),
			cookie_max_age_days: self.parsed("BEACON_WEB_LOCALE_COOKIE_MAX_AGE_DAYS")?,
		})
	}

	fn load_branding(&self) -> Result<BrandingConfigLayer, ConfigError> {
		Ok(BrandingConfigLayer {
			base_path: self.var("BEACON_WEB_BASE_PATH"),
			theme: self.parsed::<Theme>("BEACON_WEB_THEME")?,
		})
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		Ok(LoggingConfigLayer {
			level: self.parsed::<LogLevel>("BEACON_WEB_LOG_LEVEL")?,
			format: self.parsed::<LogFormat>("BEACON_WEB_LOG_FORMAT")?,
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<WebConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(WebConfigLayer {
			i18n: Some(self.load_i18n()?),
			branding: Some(self.load_branding()?),
			logging: Some(self.load_logging()?),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.i18n.is_none());
		assert!(layer.branding.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/web.toml").load().unwrap();
		assert_eq!(layer, WebConfigLayer::default());
	}

	#[test]
	fn test_toml_source_reports_parse_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("web.toml");
		std::fs::write(&path, "[i18n\ndefault_locale = ").unwrap();

		let err = TomlSource::new(&path).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_source_reads_vars() {
		let source = EnvSource::from_vars([
			("BEACON_WEB_DEFAULT_LOCALE", "en-US"),
			("BEACON_WEB_LOCALE_COOKIE_MAX_AGE_DAYS", "30"),
			("BEACON_WEB_THEME", "dark"),
			("BEACON_WEB_LOG_FORMAT", "json"),
		]);
		let layer = source.load().unwrap();

		let i18n = layer.i18n.unwrap();
		assert_eq!(i18n.default_locale.as_deref(), Some("en-US"));
		assert_eq!(i18n.cookie_max_age_days, Some(30));
		assert!(i18n.cookie_name.is_none());
		assert_eq!(layer.branding.unwrap().theme, Some(Theme::Dark));
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Json));
	}

	#[test]
	fn test_env_source_empty_value_is_unset() {
		let source = EnvSource::from_vars([("BEACON_WEB_BASE_PATH", "")]);
		let layer = source.load().unwrap();
		assert!(layer.branding.unwrap().base_path.is_none());
	}

	#[test]
	fn test_env_source_invalid_number() {
		let source = EnvSource::from_vars([("BEACON_WEB_LOCALE_COOKIE_MAX_AGE_DAYS", "forever")]);
		let err = source.load().unwrap_err();
		match err {
			ConfigError::InvalidValue { key, message } => {
				assert_eq!(key, "BEACON_WEB_LOCALE_COOKIE_MAX_AGE_DAYS");
				assert!(message.contains("forever"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_env_source_invalid_theme() {
		let source = EnvSource::from_vars([("BEACON_WEB_THEME", "neon")]);
		assert!(matches!(
			source.load(),
			Err(ConfigError::InvalidValue { .. })
		));
	}
}

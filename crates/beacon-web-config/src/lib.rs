// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for the Beacon web console.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`BEACON_WEB_*`)
//!
//! # Usage
//!
//! ```ignore
//! use beacon_web_config::load_config;
//!
//! let config = load_config()?;
//! println!("default locale: {}", config.i18n.default_locale);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::WebConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use beacon_common_i18n::LocalizedStringResolver;
use tracing::{debug, info};

/// Fully resolved web console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebConfig {
	pub i18n: I18nConfig,
	pub branding: BrandingConfig,
	pub logging: LoggingConfig,
}

impl WebConfig {
	/// Localized string resolver using the configured baseline key.
	pub fn string_resolver(&self) -> LocalizedStringResolver {
		LocalizedStringResolver::new(self.i18n.baseline_key.clone())
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`BEACON_WEB_*`)
/// 2. Config file (`/etc/beacon/web.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<WebConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource::new()),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<WebConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::new()),
	])
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<WebConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = WebConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: WebConfigLayer) -> Result<WebConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let branding = layer.branding.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	i18n.validate()?;
	branding.validate()?;

	info!(
		default_locale = %i18n.default_locale,
		baseline_key = %i18n.baseline_key,
		cookie_name = %i18n.cookie_name,
		base_path = %branding.base_path,
		theme = %branding.theme,
		log_level = %logging.level,
		"Web configuration loaded"
	);

	Ok(WebConfig {
		i18n,
		branding,
		logging,
	})
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration.

use beacon_common_i18n::{
	is_supported, BASELINE_LOCALE_KEY, DEFAULT_LOCALE, LOCALE_COOKIE_MAX_AGE_DAYS, LOCALE_COOKIE_NAME,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Localization configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	/// Interface language when the user has not chosen one.
	pub default_locale: String,
	/// Key consulted when a localized map lacks the requested locale.
	pub baseline_key: String,
	pub cookie_name: String,
	pub cookie_max_age_days: u32,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}

impl I18nConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !is_supported(&self.default_locale) {
			return Err(ConfigError::validation(format!(
				"i18n.default_locale '{}' is not a supported locale",
				self.default_locale
			)));
		}
		if self.baseline_key.trim().is_empty() {
			return Err(ConfigError::validation("i18n.baseline_key must not be empty"));
		}
		if self.cookie_name.is_empty()
			|| !self
				.cookie_name
				.bytes()
				.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
		{
			return Err(ConfigError::validation(format!(
				"i18n.cookie_name '{}' must be non-empty and contain only [A-Za-z0-9_-]",
				self.cookie_name
			)));
		}
		if self.cookie_max_age_days == 0 {
			return Err(ConfigError::validation(
				"i18n.cookie_max_age_days must be greater than zero",
			));
		}
		Ok(())
	}
}

/// Localization configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub baseline_key: Option<String>,
	#[serde(default)]
	pub cookie_name: Option<String>,
	#[serde(default)]
	pub cookie_max_age_days: Option<u32>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.baseline_key.is_some() {
			self.baseline_key = other.baseline_key;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
		if other.cookie_max_age_days.is_some() {
			self.cookie_max_age_days = other.cookie_max_age_days;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			baseline_key: self
				.baseline_key
				.unwrap_or_else(|| BASELINE_LOCALE_KEY.to_string()),
			cookie_name: self
				.cookie_name
				.unwrap_or_else(|| LOCALE_COOKIE_NAME.to_string()),
			cookie_max_age_days: self
				.cookie_max_age_days
				.unwrap_or(LOCALE_COOKIE_MAX_AGE_DAYS),
		}
	}
}

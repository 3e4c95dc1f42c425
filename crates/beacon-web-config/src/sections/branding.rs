// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Branding configuration section.

use beacon_common_theme::{Theme, ThemeContext};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingConfig {
	/// URL prefix the console is served under, e.g. `/console`.
	pub base_path: String,
	pub theme: Theme,
}

impl BrandingConfig {
	pub fn theme_context(&self) -> ThemeContext {
		ThemeContext::new(self.theme).with_base_path(self.base_path.clone())
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.base_path.is_empty() {
			return Ok(());
		}
		if !self.base_path.starts_with('/') || self.base_path.ends_with('/') {
			return Err(ConfigError::validation(format!(
				"branding.base_path '{}' must start with '/' and must not end with '/'",
				self.base_path
			)));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfigLayer {
	#[serde(default)]
	pub base_path: Option<String>,
	#[serde(default)]
	pub theme: Option<Theme>,
}

impl BrandingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_path.is_some() {
			self.base_path = other.base_path;
		}
		if other.theme.is_some() {
			self.theme = other.theme;
		}
	}

	pub fn finalize(self) -> BrandingConfig {
		BrandingConfig {
			base_path: self.base_path.unwrap_or_default(),
			theme: self.theme.unwrap_or_default(),
		}
	}
}

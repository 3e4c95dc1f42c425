// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
	#[error("unknown theme '{0}', expected 'light' or 'dark'")]
	UnknownTheme(String),
}

/// Console color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Theme {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			_ => Err(ThemeError::UnknownTheme(s.to_string())),
		}
	}
}

/// Everything theme-dependent rendering needs, passed by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeContext {
	pub theme: Theme,
	/// Prefix for static asset URLs, e.g. `/console`. Empty when served from
	/// the root.
	pub base_path: String,
}

impl ThemeContext {
	pub fn new(theme: Theme) -> Self {
		Self {
			theme,
			base_path: String::new(),
		}
	}

	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = base_path.into();
		self
	}

	/// Prefix an absolute asset path with the base path.
	pub fn asset_url(&self, path: &str) -> String {
		format!("{}{}", self.base_path, path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_theme() {
		assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
		assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
		assert_eq!(
			"solarized".parse::<Theme>(),
			Err(ThemeError::UnknownTheme("solarized".to_string()))
		);
	}

	#[test]
	fn test_default_is_light() {
		assert_eq!(Theme::default(), Theme::Light);
		assert_eq!(ThemeContext::default().base_path, "");
	}

	#[test]
	fn test_asset_url() {
		assert_eq!(ThemeContext::default().asset_url("/logo/logo.jpg"), "/logo/logo.jpg");
		assert_eq!(
			ThemeContext::new(Theme::Dark)
				.with_base_path("/app")
				.asset_url("/logo/logo.jpg"),
			"/app/logo/logo.jpg"
		);
	}

	#[test]
	fn test_serde_lowercase() {
		#[derive(Deserialize)]
		struct Wrapper {
			theme: Theme,
		}
		let parsed: Wrapper = toml::from_str("theme = \"dark\"").unwrap();
		assert_eq!(parsed.theme, Theme::Dark);
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Picking the best string out of a [`LocaleMap`].

use crate::locale::BASELINE_LOCALE_KEY;
use crate::locale_map::LocaleMap;

/// Select the string for `language` from `map` using [`BASELINE_LOCALE_KEY`]
/// as the baseline.
///
/// See [`LocalizedStringResolver::resolve`] for the fallback order.
///
/// # Example
///
/// ```
/// use beacon_common_i18n::{render_i18n_object, LocaleMap};
///
/// let map = LocaleMap::from([("en_US", "Hello"), ("fr_FR", "Bonjour")]);
/// assert_eq!(render_i18n_object(Some(&map), "fr_FR"), "Bonjour");
/// assert_eq!(render_i18n_object(Some(&map), "de_DE"), "Hello");
/// assert_eq!(render_i18n_object(None, "de_DE"), "");
/// ```
pub fn render_i18n_object<'a>(map: Option<&'a LocaleMap>, language: &str) -> &'a str {
	LocalizedStringResolver::default().resolve(map, language)
}

/// Resolves a localized string with a fixed baseline locale key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedStringResolver {
	baseline: String,
}

impl Default for LocalizedStringResolver {
	fn default() -> Self {
		Self::new(BASELINE_LOCALE_KEY)
	}
}

impl LocalizedStringResolver {
	pub fn new(baseline: impl Into<String>) -> Self {
		Self {
			baseline: baseline.into(),
		}
	}

	pub fn baseline(&self) -> &str {
		&self.baseline
	}

	/// Resolution order:
	/// 1. Absent or empty map: `""`
	/// 2. Entry for `requested`
	/// 3. Entry for the baseline key
	/// 4. First entry in insertion order, whatever its key
	///
	/// Presence of a key decides each step, so an empty string stored under
	/// `requested` is returned as-is.
	pub fn resolve<'a>(&self, map: Option<&'a LocaleMap>, requested: &str) -> &'a str {
		let Some(map) = map else {
			return "";
		};

		map
			.get(requested)
			.or_else(|| map.get(&self.baseline))
			.or_else(|| map.first_value())
			.unwrap_or("")
	}
}

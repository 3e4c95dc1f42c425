// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::trace;

use crate::locale::{is_supported, Locale, DEFAULT_LOCALE};

/// Resolve the effective interface locale.
///
/// Resolution order (highest to lowest priority):
/// 1. User's persisted locale preference (if supported)
/// 2. Configured default locale (if supported)
/// 3. [`DEFAULT_LOCALE`]
///
/// # Arguments
///
/// * `user_locale` - The user's stored preference, e.g. from the locale cookie
/// * `configured_default` - Deployment default from configuration
///
/// # Example
///
/// ```
/// use beacon_common_i18n::resolve_locale;
///
/// // User preference takes priority
/// assert_eq!(resolve_locale(Some("ja-JP"), "en-US").as_str(), "ja-JP");
///
/// // Falls back to the configured default if the user has no preference
/// assert_eq!(resolve_locale(None, "en-US").as_str(), "en-US");
///
/// // Falls back to the built-in default if both are unsupported
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid").as_str(), "zh-Hans");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, configured_default: &str) -> Locale {
	if let Some(locale) = user_locale {
		if is_supported(locale) {
			return Locale::new(locale);
		}
		trace!(locale, "ignoring unsupported user locale");
	}

	if is_supported(configured_default) {
		return Locale::new(configured_default);
	}

	Locale::new(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("es-ES"), "en-US").as_str(), "es-ES");
		assert_eq!(resolve_locale(Some("ar-TN"), "en-US").as_str(), "ar-TN");
	}

	#[test]
	fn test_configured_default_when_no_user_preference() {
		assert_eq!(resolve_locale(None, "fr-FR").as_str(), "fr-FR");
	}

	#[test]
	fn test_configured_default_when_user_invalid() {
		assert_eq!(resolve_locale(Some("klingon"), "en-US").as_str(), "en-US");
		assert_eq!(resolve_locale(Some("en_US"), "de-DE").as_str(), "de-DE");
	}

	#[test]
	fn test_builtin_default_when_both_invalid() {
		assert_eq!(
			resolve_locale(Some("invalid"), "also_invalid").as_str(),
			DEFAULT_LOCALE
		);
		assert_eq!(resolve_locale(None, "invalid").as_str(), DEFAULT_LOCALE);
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en-US").as_str(), "en-US");
		assert_eq!(resolve_locale(None, "").as_str(), DEFAULT_LOCALE);
	}
}

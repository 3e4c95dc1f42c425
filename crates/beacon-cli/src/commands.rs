// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Command implementations. Each returns its output so `main` only prints.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use beacon_common_i18n::{
	available_locales, CookieLocaleStore, Locale, LocaleChange, LocaleMap, LocaleSwitcher,
	LocalizedStringResolver,
};
use beacon_web_config::I18nConfig;
use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};
use indexmap::IndexMap;
use tracing::{debug, instrument};

/// Read a localized map from a JSON file.
///
/// Without `key` the file holds a single map (`{"en_US": "Hello", ...}`).
/// With `key` it holds a catalog of maps keyed by message id; a missing id
/// yields `None`.
pub fn load_locale_map(path: &Path, key: Option<&str>) -> Result<Option<LocaleMap>> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;

	match key {
		None => {
			let map: LocaleMap = serde_json::from_str(&content)
				.with_context(|| format!("{} is not a JSON object of strings", path.display()))?;
			Ok(Some(map))
		}
		Some(key) => {
			let mut catalog: IndexMap<String, LocaleMap> = serde_json::from_str(&content)
				.with_context(|| format!("{} is not a JSON catalog", path.display()))?;
			debug!(entries = catalog.len(), key, "loaded catalog");
			Ok(catalog.shift_remove(key))
		}
	}
}

#[instrument(skip(resolver))]
pub fn render(
	map_path: &Path,
	key: Option<&str>,
	locale: &str,
	resolver: &LocalizedStringResolver,
) -> Result<String> {
	let map = load_locale_map(map_path, key)?;
	Ok(resolver.resolve(map.as_ref(), locale).to_string())
}

pub fn list_locales() -> String {
	let mut out = String::new();
	for info in available_locales() {
		let _ = writeln!(out, "{:<8} {:<4} {}", info.code, info.direction.as_str(), info.name);
	}
	out
}

fn request_headers(cookie: Option<&str>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();
	if let Some(cookie) = cookie {
		let value = HeaderValue::from_str(cookie).context("invalid Cookie header value")?;
		headers.insert(COOKIE, value);
	}
	Ok(headers)
}

fn switcher_for(cookie: Option<&str>, i18n: &I18nConfig) -> Result<LocaleSwitcher<CookieLocaleStore>> {
	let headers = request_headers(cookie)?;
	let store =
		CookieLocaleStore::from_headers_with(&headers, i18n.cookie_name.clone(), i18n.cookie_max_age_days);
	Ok(LocaleSwitcher::new(store).with_default_locale(i18n.default_locale.clone()))
}

/// Effective locale for a request carrying `cookie`.
pub fn current_locale(cookie: Option<&str>, i18n: &I18nConfig) -> Result<Locale> {
	Ok(switcher_for(cookie, i18n)?.current())
}

/// Switch locale for a request carrying `cookie`, returning the change and
/// the `Set-Cookie` values the response would carry.
pub fn switch_locale(
	locale: &str,
	reload: bool,
	cookie: Option<&str>,
	i18n: &I18nConfig,
) -> Result<(LocaleChange, Vec<String>)> {
	let mut switcher = switcher_for(cookie, i18n)?;
	let change = switcher.switch(locale, reload)?;
	let set_cookies = switcher
		.store()
		.set_cookie_headers()
		.iter()
		.filter_map(|v| v.to_str().ok().map(str::to_string))
		.collect();
	Ok((change, set_cookies))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write_json(dir: &Path, contents: &str) -> std::path::PathBuf {
		let path = dir.join("strings.json");
		std::fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn test_render_single_map() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_json(dir.path(), r#"{"en_US": "Hello", "fr_FR": "Bonjour"}"#);
		let resolver = LocalizedStringResolver::default();

		assert_eq!(render(&path, None, "fr_FR", &resolver).unwrap(), "Bonjour");
		assert_eq!(render(&path, None, "de_DE", &resolver).unwrap(), "Hello");
	}

	#[test]
	fn test_render_first_value_respects_file_order() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_json(dir.path(), r#"{"ja_JP": "こんにちは", "fr_FR": "Bonjour"}"#);
		let resolver = LocalizedStringResolver::default();

		assert_eq!(render(&path, None, "de_DE", &resolver).unwrap(), "こんにちは");
	}

	#[test]
	fn test_render_catalog_key() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_json(
			dir.path(),
			r#"{"app.title": {"en_US": "Console"}, "app.empty": {}}"#,
		);
		let resolver = LocalizedStringResolver::default();

		assert_eq!(
			render(&path, Some("app.title"), "ko_KR", &resolver).unwrap(),
			"Console"
		);
		assert_eq!(render(&path, Some("app.empty"), "ko_KR", &resolver).unwrap(), "");
		assert_eq!(render(&path, Some("missing"), "ko_KR", &resolver).unwrap(), "");
	}

	#[test]
	fn test_render_rejects_non_string_values() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_json(dir.path(), r#"{"en_US": 42}"#);
		assert!(render(&path, None, "en_US", &LocalizedStringResolver::default()).is_err());
	}

	#[test]
	fn test_render_missing_file() {
		let err = render(
			Path::new("/nonexistent/strings.json"),
			None,
			"en_US",
			&LocalizedStringResolver::default(),
		)
		.unwrap_err();
		assert!(err.to_string().contains("failed to read"));
	}

	#[test]
	fn test_list_locales_includes_direction() {
		let out = list_locales();
		assert!(out.lines().any(|l| l.starts_with("ar-TN") && l.contains("rtl")));
		assert_eq!(out.lines().count(), available_locales().len());
	}

	#[test]
	fn test_current_locale_from_cookie() {
		let i18n = I18nConfig::default();
		assert_eq!(
			current_locale(Some("locale=it-IT"), &i18n).unwrap().as_str(),
			"it-IT"
		);
		assert_eq!(current_locale(None, &i18n).unwrap().as_str(), "zh-Hans");
	}

	#[test]
	fn test_current_locale_uses_configured_cookie_name() {
		let i18n = I18nConfig {
			cookie_name: "lang".to_string(),
			..Default::default()
		};
		assert_eq!(
			current_locale(Some("locale=it-IT; lang=ru-RU"), &i18n)
				.unwrap()
				.as_str(),
			"ru-RU"
		);
	}

	#[test]
	fn test_switch_locale_emits_cookie() {
		let i18n = I18nConfig {
			cookie_max_age_days: 1,
			..Default::default()
		};
		let (change, cookies) = switch_locale("en-US", true, Some("locale=ja-JP"), &i18n).unwrap();
		assert_eq!(change.previous.as_str(), "ja-JP");
		assert_eq!(change.current.as_str(), "en-US");
		assert_eq!(
			cookies,
			vec!["locale=en-US; Path=/; Max-Age=86400; SameSite=Lax".to_string()]
		);
	}

	#[test]
	fn test_switch_locale_unsupported() {
		let err = switch_locale("en_US", false, None, &I18nConfig::default()).unwrap_err();
		assert!(err.to_string().contains("unsupported locale"));
	}
}

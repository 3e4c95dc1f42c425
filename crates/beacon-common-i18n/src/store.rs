// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persistence of the user's chosen locale.
//!
//! The [`LocaleStore`] trait keeps the side effect out of locale resolution.
//! [`CookieLocaleStore`] reads the choice from an incoming `Cookie` header and
//! emits `Set-Cookie` values for the response; [`MemoryLocaleStore`] keeps it
//! in process.

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{I18nError, Result};
use crate::locale::Locale;

/// Default name of the cookie that stores the chosen locale.
pub const LOCALE_COOKIE_NAME: &str = "locale";

/// Default cookie lifetime in days.
pub const LOCALE_COOKIE_MAX_AGE_DAYS: u32 = 365;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Capability to read and write the user's persisted locale.
pub trait LocaleStore {
	/// The persisted locale, if the user has chosen one.
	fn persisted_locale(&self) -> Option<Locale>;

	/// Persist `locale` as the user's choice.
	fn persist_locale(&mut self, locale: &Locale) -> Result<()>;
}

/// In-process locale store.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocaleStore {
	locale: Option<Locale>,
}

impl MemoryLocaleStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_locale(locale: impl Into<Locale>) -> Self {
		Self {
			locale: Some(locale.into()),
		}
	}
}

impl LocaleStore for MemoryLocaleStore {
	fn persisted_locale(&self) -> Option<Locale> {
		self.locale.clone()
	}

	fn persist_locale(&mut self, locale: &Locale) -> Result<()> {
		self.locale = Some(locale.clone());
		Ok(())
	}
}

/// Cookie-backed locale store for a single request/response exchange.
#[derive(Debug, Clone)]
pub struct CookieLocaleStore {
	cookie_name: String,
	max_age_days: u32,
	current: Option<Locale>,
	set_cookies: Vec<HeaderValue>,
}

impl CookieLocaleStore {
	/// Read the locale cookie from request headers using the default cookie
	/// name and lifetime.
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self::from_headers_with(headers, LOCALE_COOKIE_NAME, LOCALE_COOKIE_MAX_AGE_DAYS)
	}

	pub fn from_headers_with(
		headers: &HeaderMap,
		cookie_name: impl Into<String>,
		max_age_days: u32,
	) -> Self {
		let cookie_name = cookie_name.into();
		let current = extract_cookie(headers, &cookie_name).map(Locale::new);
		Self {
			cookie_name,
			max_age_days,
			current,
			set_cookies: Vec::new(),
		}
	}

	pub fn cookie_name(&self) -> &str {
		&self.cookie_name
	}

	/// `Set-Cookie` values produced by [`LocaleStore::persist_locale`], oldest
	/// first.
	pub fn set_cookie_headers(&self) -> &[HeaderValue] {
		&self.set_cookies
	}

	/// Append the pending `Set-Cookie` values to response headers.
	pub fn apply_to(&self, headers: &mut HeaderMap) {
		for value in &self.set_cookies {
			headers.append(SET_COOKIE, value.clone());
		}
	}

	fn set_cookie_value(&self, locale: &Locale) -> Result<HeaderValue> {
		if !is_valid_cookie_value(locale.as_str()) {
			return Err(I18nError::InvalidCookieValue(locale.to_string()));
		}
		let max_age = u64::from(self.max_age_days) * SECONDS_PER_DAY;
		let cookie = format!(
			"{}={}; Path=/; Max-Age={}; SameSite=Lax",
			self.cookie_name, locale, max_age
		);
		HeaderValue::from_str(&cookie).map_err(|_| I18nError::InvalidCookieValue(locale.to_string()))
	}
}

impl LocaleStore for CookieLocaleStore {
	fn persisted_locale(&self) -> Option<Locale> {
		self.current.clone()
	}

	fn persist_locale(&mut self, locale: &Locale) -> Result<()> {
		let value = self.set_cookie_value(locale)?;
		debug!(cookie = %self.cookie_name, locale = %locale, "persisting locale cookie");
		self.set_cookies.push(value);
		self.current = Some(locale.clone());
		Ok(())
	}
}

/// Extract a cookie value by name from all `Cookie` headers.
pub fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(';'))
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			if name.trim() == cookie_name {
				Some(value.trim().trim_matches('"').to_string())
			} else {
				None
			}
		})
		.filter(|value| !value.is_empty())
}

// RFC 6265 cookie-octet.
fn is_valid_cookie_value(value: &str) -> bool {
	!value.is_empty()
		&& value.bytes().all(|b| {
			matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	mod memory_store {
		use super::*;

		#[test]
		fn empty_by_default() {
			assert_eq!(MemoryLocaleStore::new().persisted_locale(), None);
		}

		#[test]
		fn persists_locale() {
			let mut store = MemoryLocaleStore::with_locale("en-US");
			store.persist_locale(&Locale::new("ko-KR")).unwrap();
			assert_eq!(store.persisted_locale(), Some(Locale::new("ko-KR")));
		}
	}

	mod extract_cookie {
		use super::*;

		#[test]
		fn extracts_from_single_cookie() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("locale=ja-JP"));
			assert_eq!(
				extract_cookie(&headers, LOCALE_COOKIE_NAME),
				Some("ja-JP".to_string())
			);
		}

		#[test]
		fn extracts_from_multiple_cookies() {
			let mut headers = HeaderMap::new();
			headers.insert(
				COOKIE,
				HeaderValue::from_static("session=abc; locale=fr-FR; theme=dark"),
			);
			assert_eq!(
				extract_cookie(&headers, LOCALE_COOKIE_NAME),
				Some("fr-FR".to_string())
			);
		}

		#[test]
		fn searches_every_cookie_header() {
			let mut headers = HeaderMap::new();
			headers.append(COOKIE, HeaderValue::from_static("session=abc"));
			headers.append(COOKIE, HeaderValue::from_static("locale=de-DE"));
			assert_eq!(
				extract_cookie(&headers, LOCALE_COOKIE_NAME),
				Some("de-DE".to_string())
			);
		}

		#[test]
		fn returns_none_without_cookie_header() {
			assert_eq!(extract_cookie(&HeaderMap::new(), LOCALE_COOKIE_NAME), None);
		}

		#[test]
		fn returns_none_for_empty_value() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("locale="));
			assert_eq!(extract_cookie(&headers, LOCALE_COOKIE_NAME), None);
		}

		#[test]
		fn does_not_match_name_prefix() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("locale_hint=en-US"));
			assert_eq!(extract_cookie(&headers, LOCALE_COOKIE_NAME), None);
		}

		#[test]
		fn strips_quotes_and_whitespace() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("  locale=\"pt-BR\"  ; a=b"));
			assert_eq!(
				extract_cookie(&headers, LOCALE_COOKIE_NAME),
				Some("pt-BR".to_string())
			);
		}
	}

	mod cookie_store {
		use super::*;

		#[test]
		fn reads_locale_from_request() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("locale=zh-Hant"));
			let store = CookieLocaleStore::from_headers(&headers);
			assert_eq!(store.persisted_locale(), Some(Locale::new("zh-Hant")));
			assert!(store.set_cookie_headers().is_empty());
		}

		#[test]
		fn persist_emits_set_cookie() {
			let mut store = CookieLocaleStore::from_headers(&HeaderMap::new());
			store.persist_locale(&Locale::new("en-US")).unwrap();

			let cookies = store.set_cookie_headers();
			assert_eq!(cookies.len(), 1);
			assert_eq!(
				cookies[0].to_str().unwrap(),
				"locale=en-US; Path=/; Max-Age=31536000; SameSite=Lax"
			);
			assert_eq!(store.persisted_locale(), Some(Locale::new("en-US")));
		}

		#[test]
		fn custom_name_and_lifetime() {
			let mut store = CookieLocaleStore::from_headers_with(&HeaderMap::new(), "ui_lang", 7);
			store.persist_locale(&Locale::new("it-IT")).unwrap();
			assert_eq!(store.cookie_name(), "ui_lang");
			assert_eq!(
				store.set_cookie_headers()[0].to_str().unwrap(),
				"ui_lang=it-IT; Path=/; Max-Age=604800; SameSite=Lax"
			);
		}

		#[test]
		fn rejects_invalid_cookie_value() {
			let mut store = CookieLocaleStore::from_headers(&HeaderMap::new());
			let err = store.persist_locale(&Locale::new("en US;")).unwrap_err();
			assert!(matches!(err, I18nError::InvalidCookieValue(_)));
			assert!(store.set_cookie_headers().is_empty());
			assert_eq!(store.persisted_locale(), None);
		}

		#[test]
		fn apply_to_appends_headers() {
			let mut store = CookieLocaleStore::from_headers(&HeaderMap::new());
			store.persist_locale(&Locale::new("en-US")).unwrap();
			store.persist_locale(&Locale::new("vi-VN")).unwrap();

			let mut response = HeaderMap::new();
			store.apply_to(&mut response);
			assert_eq!(response.get_all(SET_COOKIE).iter().count(), 2);
		}
	}
}

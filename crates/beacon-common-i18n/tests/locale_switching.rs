// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end locale flow: read the cookie, switch, render a label.

use beacon_common_i18n::{
	render_i18n_object, CookieLocaleStore, I18nError, LocaleMap, LocaleStore, LocaleSwitcher,
};
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

fn greeting() -> LocaleMap {
	LocaleMap::from([
		("en_US", "Hello"),
		("fr_FR", "Bonjour"),
		("zh_Hans", "你好"),
	])
}

#[test]
fn cookie_locale_drives_rendering() {
	let mut request = HeaderMap::new();
	request.insert(COOKIE, HeaderValue::from_static("session=s1; locale=fr-FR"));

	let switcher = LocaleSwitcher::new(CookieLocaleStore::from_headers(&request));
	let locale = switcher.current();

	assert_eq!(locale.as_str(), "fr-FR");
	assert_eq!(
		render_i18n_object(Some(&greeting()), &locale.map_key()),
		"Bonjour"
	);
}

#[test]
fn missing_cookie_falls_back_to_default_locale() {
	let switcher = LocaleSwitcher::new(CookieLocaleStore::from_headers(&HeaderMap::new()));
	let locale = switcher.current();

	assert_eq!(locale.as_str(), "zh-Hans");
	assert_eq!(render_i18n_object(Some(&greeting()), &locale.map_key()), "你好");
}

#[test]
fn switching_writes_cookie_and_changes_rendering() {
	let mut switcher = LocaleSwitcher::new(CookieLocaleStore::from_headers(&HeaderMap::new()))
		.with_default_locale("en-US");

	let change = switcher.switch("de-DE", true).unwrap();
	assert_eq!(change.previous.as_str(), "en-US");
	assert!(change.reload_requested);

	let store = switcher.into_store();
	let mut response = HeaderMap::new();
	store.apply_to(&mut response);

	let set_cookie = response.get(SET_COOKIE).unwrap().to_str().unwrap();
	assert!(set_cookie.starts_with("locale=de-DE;"));
	assert!(set_cookie.contains("Max-Age=31536000"));

	// de_DE has no entry, so the baseline wins.
	let locale = store.persisted_locale().unwrap();
	assert_eq!(render_i18n_object(Some(&greeting()), &locale.map_key()), "Hello");
}

#[test]
fn rejected_switch_leaves_no_cookie() {
	let mut switcher = LocaleSwitcher::new(CookieLocaleStore::from_headers(&HeaderMap::new()));

	let err = switcher.switch("tlh", false).unwrap_err();
	assert!(matches!(err, I18nError::UnsupportedLocale(_)));
	assert!(switcher.store().set_cookie_headers().is_empty());
}

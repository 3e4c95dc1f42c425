// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and per-locale metadata.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default interface language for the console.
pub const DEFAULT_LOCALE: &str = "zh-Hans";

/// Key consulted in a [`LocaleMap`](crate::LocaleMap) when the requested
/// locale has no entry.
pub const BASELINE_LOCALE_KEY: &str = "en_US";

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Value suitable for an HTML `dir` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Metadata for a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub direction: Direction,
}

const fn ltr(code: &'static str, name: &'static str) -> LocaleInfo {
	LocaleInfo {
		code,
		name,
		direction: Direction::Ltr,
	}
}

const fn rtl(code: &'static str, name: &'static str) -> LocaleInfo {
	LocaleInfo {
		code,
		name,
		direction: Direction::Rtl,
	}
}

/// All locales the console ships, in display order.
pub const LOCALES: &[LocaleInfo] = &[
	ltr("en-US", "English (United States)"),
	ltr("zh-Hans", "简体中文"),
	ltr("zh-Hant", "繁體中文"),
	ltr("pt-BR", "Português (Brasil)"),
	ltr("es-ES", "Español (España)"),
	ltr("fr-FR", "Français (France)"),
	ltr("de-DE", "Deutsch (Deutschland)"),
	ltr("ja-JP", "日本語 (日本)"),
	ltr("ko-KR", "한국어 (대한민국)"),
	ltr("ru-RU", "Русский (Россия)"),
	ltr("it-IT", "Italiano (Italia)"),
	ltr("th-TH", "ไทย (ประเทศไทย)"),
	ltr("uk-UA", "Українська (Україна)"),
	ltr("vi-VN", "Tiếng Việt (Việt Nam)"),
	ltr("ro-RO", "Română (România)"),
	ltr("pl-PL", "Polski (Polska)"),
	ltr("hi-IN", "हिन्दी (भारत)"),
	ltr("tr-TR", "Türkçe (Türkiye)"),
	rtl("fa-IR", "فارسی (ایران)"),
	ltr("sl-SI", "Slovenščina (Slovenija)"),
	ltr("id-ID", "Bahasa Indonesia"),
	rtl("ar-TN", "العربية (تونس)"),
];

static LOCALE_INDEX: Lazy<HashMap<&'static str, &'static LocaleInfo>> =
	Lazy::new(|| LOCALES.iter().map(|info| (info.code, info)).collect());

/// Returns every supported locale.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

pub fn is_supported(code: &str) -> bool {
	LOCALE_INDEX.contains_key(code)
}

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALE_INDEX.get(code).copied()
}

/// Whether `code` is a supported right-to-left locale.
///
/// Unknown locales are treated as left-to-right.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code).is_some_and(|info| info.direction == Direction::Rtl)
}

/// Convert a locale code into the key form used by localized string maps.
///
/// `en-US` becomes `en_US`; `zh-Hans` becomes `zh_Hans`.
pub fn to_map_key(code: &str) -> String {
	code.trim().replace('-', "_")
}

/// A locale identifier.
///
/// Construction never validates; callers check [`Locale::is_supported`]
/// where the supported set matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_supported(&self) -> bool {
		is_supported(&self.0)
	}

	pub fn info(&self) -> Option<&'static LocaleInfo> {
		locale_info(&self.0)
	}

	/// Key form of this locale for [`LocaleMap`](crate::LocaleMap) lookups.
	pub fn map_key(&self) -> String {
		to_map_key(&self.0)
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Default for Locale {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Locale {
	fn from(code: &str) -> Self {
		Self::new(code)
	}
}

impl From<String> for Locale {
	fn from(code: String) -> Self {
		Self(code)
	}
}

impl AsRef<str> for Locale {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Beacon web console.
//!
//! This crate provides:
//! - The supported locale list and per-locale metadata (name, text direction)
//! - [`LocaleMap`] and the localized string fallback chain
//! - Effective locale resolution from a user preference and a configured default
//! - A [`LocaleStore`] capability for persisting the chosen locale, with
//!   cookie-backed and in-memory implementations
//! - [`LocaleSwitcher`] for changing the active locale
//!
//! Loading translation catalogs is out of scope; callers own their catalogs
//! and hand this crate plain maps.
//!
//! # Example
//!
//! ```
//! use beacon_common_i18n::{render_i18n_object, resolve_locale, LocaleMap};
//!
//! let locale = resolve_locale(Some("fr-FR"), "en-US");
//! let label = LocaleMap::from([("en_US", "Settings"), ("fr_FR", "Paramètres")]);
//!
//! assert_eq!(render_i18n_object(Some(&label), &locale.map_key()), "Paramètres");
//! ```

mod error;
mod locale;
mod locale_map;
mod render;
mod resolve;
mod store;
mod switcher;

pub use error::{I18nError, Result};
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, to_map_key, Direction, Locale, LocaleInfo,
};
pub use locale_map::LocaleMap;
pub use render::{render_i18n_object, LocalizedStringResolver};
pub use resolve::resolve_locale;
pub use store::{
	extract_cookie, CookieLocaleStore, LocaleStore, MemoryLocaleStore, LOCALE_COOKIE_MAX_AGE_DAYS,
	LOCALE_COOKIE_NAME,
};
pub use switcher::{LanguageListener, LocaleChange, LocaleSwitcher, NoopListener};

pub use locale::{BASELINE_LOCALE_KEY, DEFAULT_LOCALE, LOCALES};

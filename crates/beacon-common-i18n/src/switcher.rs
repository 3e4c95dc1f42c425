// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Switching the active interface locale.

use tracing::{debug, info};

use crate::error::{I18nError, Result};
use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::resolve::resolve_locale;
use crate::store::LocaleStore;

/// Notified after a new locale has been persisted.
///
/// Implemented by whatever owns the loaded translations, so it can swap
/// catalogs.
pub trait LanguageListener {
	fn language_changed(&mut self, locale: &Locale);
}

/// Listener that ignores notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl LanguageListener for NoopListener {
	fn language_changed(&mut self, _locale: &Locale) {}
}

impl<F> LanguageListener for F
where
	F: FnMut(&Locale),
{
	fn language_changed(&mut self, locale: &Locale) {
		self(locale)
	}
}

/// Outcome of [`LocaleSwitcher::switch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChange {
	/// Effective locale before the switch.
	pub previous: Locale,
	pub current: Locale,
	/// The caller asked for a page reload; performing it is up to the caller.
	pub reload_requested: bool,
}

impl LocaleChange {
	pub fn changed(&self) -> bool {
		self.previous != self.current
	}
}

/// Persists locale choices and notifies the translation layer.
pub struct LocaleSwitcher<S, L = NoopListener> {
	store: S,
	listener: L,
	default_locale: String,
}

impl<S: LocaleStore> LocaleSwitcher<S, NoopListener> {
	pub fn new(store: S) -> Self {
		Self::with_listener(store, NoopListener)
	}
}

impl<S: LocaleStore, L: LanguageListener> LocaleSwitcher<S, L> {
	pub fn with_listener(store: S, listener: L) -> Self {
		Self {
			store,
			listener,
			default_locale: DEFAULT_LOCALE.to_string(),
		}
	}

	/// Override the locale used when nothing usable is persisted.
	pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
		self.default_locale = locale.into();
		self
	}

	/// The effective locale: the persisted choice if supported, else the
	/// configured default.
	pub fn current(&self) -> Locale {
		let persisted = self.store.persisted_locale();
		resolve_locale(
			persisted.as_ref().map(Locale::as_str),
			&self.default_locale,
		)
	}

	/// Persist `locale` and notify the listener.
	///
	/// Unsupported locales are rejected before anything is persisted.
	pub fn switch(&mut self, locale: impl Into<Locale>, reload_page: bool) -> Result<LocaleChange> {
		let locale = locale.into();
		if !locale.is_supported() {
			debug!(locale = %locale, "rejecting unsupported locale");
			return Err(I18nError::UnsupportedLocale(locale.into_inner()));
		}

		let previous = self.current();
		self.store.persist_locale(&locale)?;
		self.listener.language_changed(&locale);

		info!(
			previous = %previous,
			current = %locale,
			reload_page,
			"locale switched"
		);

		Ok(LocaleChange {
			previous,
			current: locale,
			reload_requested: reload_page,
		})
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn into_store(self) -> S {
		self.store
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-message mapping from locale keys to display strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Localized variants of a single message, keyed by locale.
///
/// Iteration follows insertion order. When deserialized, that is the order
/// the keys appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMap(IndexMap<String, String>);

impl LocaleMap {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Insert or replace the string for `locale`.
	///
	/// Replacing keeps the key's original position.
	pub fn insert(&mut self, locale: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(locale.into(), value.into())
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(locale, value);
		self
	}

	pub fn get(&self, locale: &str) -> Option<&str> {
		self.0.get(locale).map(String::as_str)
	}

	pub fn contains(&self, locale: &str) -> bool {
		self.0.contains_key(locale)
	}

	/// First value in insertion order.
	pub fn first_value(&self) -> Option<&str> {
		self.0.first().map(|(_, v)| v.as_str())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn locales(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K, V> FromIterator<(K, V)> for LocaleMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocaleMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl From<IndexMap<String, String>> for LocaleMap {
	fn from(map: IndexMap<String, String>) -> Self {
		Self(map)
	}
}

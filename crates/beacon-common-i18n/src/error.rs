// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

#[derive(Debug, Error)]
pub enum I18nError {
	#[error("unsupported locale: {0}")]
	UnsupportedLocale(String),

	#[error("invalid cookie value: {0:?}")]
	InvalidCookieValue(String),

	#[error("locale store error: {0}")]
	Store(String),
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod branding;
mod i18n;
mod logging;

pub use branding::{BrandingConfig, BrandingConfigLayer};
pub use i18n::{I18nConfig, I18nConfigLayer};
pub use logging::{LogFormat, LogLevel, LoggingConfig, LoggingConfigLayer};

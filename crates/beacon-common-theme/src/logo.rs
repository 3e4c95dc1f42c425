// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Console logo selection.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::context::{Theme, ThemeContext};

const LOGO_BASE_CLASS: &str = "block object-contain";
const LOGO_ALT: &str = "logo";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogoStyle {
	#[default]
	Default,
	MonochromeWhite,
}

impl LogoStyle {
	/// Asset path relative to the console's base path.
	pub fn path(self) -> &'static str {
		match self {
			LogoStyle::Default => "/logo/logo.jpg",
			LogoStyle::MonochromeWhite => "/logo/logo.jpg",
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
	Large,
	#[default]
	Medium,
	Small,
}

impl LogoSize {
	/// Utility classes giving the logo its dimensions.
	pub fn classes(self) -> &'static str {
		match self {
			LogoSize::Large => "w-16 h-7",
			LogoSize::Medium => "w-12 h-[22px]",
			LogoSize::Small => "w-9 h-4",
		}
	}
}

/// Style actually used for `style` under `theme`.
///
/// Only the default style adapts; an explicitly chosen style is kept.
pub fn themed_style(theme: Theme, style: LogoStyle) -> LogoStyle {
	match (theme, style) {
		(Theme::Dark, LogoStyle::Default) => LogoStyle::MonochromeWhite,
		_ => style,
	}
}

/// Join class names with single spaces, skipping blank parts.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
	parts
		.into_iter()
		.flat_map(str::split_whitespace)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Attributes for the logo `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoImage {
	pub src: String,
	pub class: String,
	pub alt: &'static str,
}

/// Logo properties chosen by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logo {
	pub style: LogoStyle,
	pub size: LogoSize,
	pub class: Option<String>,
}

impl Logo {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn style(mut self, style: LogoStyle) -> Self {
		self.style = style;
		self
	}

	pub fn size(mut self, size: LogoSize) -> Self {
		self.size = size;
		self
	}

	/// Extra classes appended after the built-in ones.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn render(&self, ctx: &ThemeContext) -> LogoImage {
		let style = themed_style(ctx.theme, self.style);
		trace!(theme = %ctx.theme, ?style, size = ?self.size, "rendering logo");

		LogoImage {
			src: ctx.asset_url(style.path()),
			class: class_names([
				LOGO_BASE_CLASS,
				self.size.classes(),
				self.class.as_deref().unwrap_or_default(),
			]),
			alt: LOGO_ALT,
		}
	}
}

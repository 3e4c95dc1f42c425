// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Beacon CLI
//!
//! Inspect the web console's localization and branding behavior from the
//! command line: resolve localized strings, list locales, simulate the
//! locale cookie, and compute themed logo attributes.

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use beacon_common_i18n::LocalizedStringResolver;
use beacon_common_theme::{Logo, LogoSize, LogoStyle, Theme};
use beacon_web_config::{load_config, load_config_with_file, LogLevel, WebConfig};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
	Light,
	Dark,
}

impl From<ThemeArg> for Theme {
	fn from(v: ThemeArg) -> Self {
		match v {
			ThemeArg::Light => Theme::Light,
			ThemeArg::Dark => Theme::Dark,
		}
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogoStyleArg {
	Default,
	MonochromeWhite,
}

impl From<LogoStyleArg> for LogoStyle {
	fn from(v: LogoStyleArg) -> Self {
		match v {
			LogoStyleArg::Default => LogoStyle::Default,
			LogoStyleArg::MonochromeWhite => LogoStyle::MonochromeWhite,
		}
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogoSizeArg {
	Large,
	Medium,
	Small,
}

impl From<LogoSizeArg> for LogoSize {
	fn from(v: LogoSizeArg) -> Self {
		match v {
			LogoSizeArg::Large => LogoSize::Large,
			LogoSizeArg::Medium => LogoSize::Medium,
			LogoSizeArg::Small => LogoSize::Small,
		}
	}
}

#[derive(Parser, Debug)]
#[command(name = "beacon", version, about, long_about = None)]
struct Args {
	/// Config file (defaults to /etc/beacon/web.toml)
	#[arg(long, env = "BEACON_WEB_CONFIG")]
	config: Option<PathBuf>,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve a localized string from a JSON file
	Render {
		/// JSON file holding a locale map, or a catalog of maps when --key is set
		#[arg(long)]
		map: PathBuf,

		/// Message id to pick from a catalog file
		#[arg(long)]
		key: Option<String>,

		/// Requested locale key, e.g. fr_FR
		#[arg(long, short)]
		locale: String,

		/// Override the configured baseline key
		#[arg(long)]
		baseline: Option<String>,
	},

	/// List supported locales
	Locales,

	/// Print the effective locale for a request
	ResolveLocale {
		/// Raw Cookie header of the request
		#[arg(long)]
		cookie: Option<String>,
	},

	/// Switch locale and print the Set-Cookie header the response carries
	SwitchLocale {
		locale: String,

		/// Ask the client to reload the page
		#[arg(long)]
		reload: bool,

		/// Raw Cookie header of the request
		#[arg(long)]
		cookie: Option<String>,
	},

	/// Print logo image attributes
	Logo {
		/// Theme to render for (defaults to the configured theme)
		#[arg(long, value_enum)]
		theme: Option<ThemeArg>,

		#[arg(long, value_enum, default_value = "default")]
		style: LogoStyleArg,

		#[arg(long, value_enum, default_value = "medium")]
		size: LogoSizeArg,

		/// Extra CSS classes
		#[arg(long)]
		class: Option<String>,
	},
}

fn load(args: &Args) -> Result<WebConfig> {
	let config = match &args.config {
		Some(path) => load_config_with_file(path.clone())
			.with_context(|| format!("failed to load config from {}", path.display()))?,
		None => load_config().context("failed to load config")?,
	};
	Ok(config)
}

fn main() -> Result<()> {
	let args = Args::parse();

	let mut config = load(&args)?;
	if args.verbose {
		config.logging.level = LogLevel::Debug;
	}
	logging::init_tracing(&config.logging);
	debug!(command = ?args.command, "running command");

	match args.command {
		Command::Render {
			map,
			key,
			locale,
			baseline,
		} => {
			let resolver = match baseline {
				Some(baseline) => LocalizedStringResolver::new(baseline),
				None => config.string_resolver(),
			};
			let value = commands::render(&map, key.as_deref(), &locale, &resolver)?;
			println!("{value}");
		}
		Command::Locales => {
			print!("{}", commands::list_locales());
		}
		Command::ResolveLocale { cookie } => {
			let locale = commands::current_locale(cookie.as_deref(), &config.i18n)?;
			println!("{locale}");
		}
		Command::SwitchLocale {
			locale,
			reload,
			cookie,
		} => {
			let (change, set_cookies) =
				commands::switch_locale(&locale, reload, cookie.as_deref(), &config.i18n)?;
			println!("{} -> {}", change.previous, change.current);
			for value in set_cookies {
				println!("Set-Cookie: {value}");
			}
			if change.reload_requested {
				println!("reload requested");
			}
		}
		Command::Logo {
			theme,
			style,
			size,
			class,
		} => {
			let mut ctx = config.branding.theme_context();
			if let Some(theme) = theme {
				ctx.theme = theme.into();
			}
			let mut logo = Logo::new().style(style.into()).size(size.into());
			if let Some(class) = class {
				logo = logo.class(class);
			}
			let img = logo.render(&ctx);
			println!("src={}", img.src);
			println!("class={}", img.class);
			println!("alt={}", img.alt);
		}
	}

	Ok(())
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Theming for the Beacon web console.
//!
//! The active theme is passed explicitly as a [`ThemeContext`]; nothing in
//! this crate reads process-wide state. Rendering is left to the caller,
//! which receives plain attribute values.
//!
//! # Example
//!
//! ```
//! use beacon_common_theme::{Logo, LogoSize, Theme, ThemeContext};
//!
//! let ctx = ThemeContext::new(Theme::Dark).with_base_path("/console");
//! let img = Logo::new().size(LogoSize::Small).render(&ctx);
//!
//! assert_eq!(img.src, "/console/logo/logo.jpg");
//! assert_eq!(img.class, "block object-contain w-9 h-4");
//! ```

mod context;
mod logo;

pub use context::{Theme, ThemeContext, ThemeError};
pub use logo::{class_names, themed_style, Logo, LogoImage, LogoSize, LogoStyle};

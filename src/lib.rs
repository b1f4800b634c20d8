// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a generative art gallery viewer built with the Iced GUI
//! framework.
//!
//! It reads an ordered catalog of artworks and presents it as a filterable
//! grid and a series timeline, with detail and source code dialogs,
//! Fluent-based localization and user preferences from `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

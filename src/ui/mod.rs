// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a `ViewContext` borrowed from the application state, a `Message` enum, and
//! where relevant an `update` that turns the message into a gallery
//! [`Action`](crate::gallery::Action).
//!
//! # Views
//!
//! - [`navbar`] - Title, view switcher and summary counts
//! - [`filter_bar`] - Category filter buttons
//! - [`grid`] - Wrapped artwork tiles
//! - [`timeline`] - One card per series
//! - [`dialogs`] - Artwork detail and source code dialogs
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod dialogs;
pub mod filter_bar;
pub mod grid;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod timeline;

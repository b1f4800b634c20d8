// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters for platform capabilities.
//!
//! These wrap file system and clipboard access behind functions that report
//! a [`crate::error::Result`], so the update loop can turn failures into
//! notifications.
//!
//! - [`assets`]: reading code assets and saving image copies
//! - [`clipboard`]: writing text to the system clipboard

pub mod assets;
pub mod clipboard;

pub use assets::{read_code_asset, save_image_copy};
pub use clipboard::copy_text;

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default width of a grid tile, in logical pixels.
pub const DEFAULT_TILE_WIDTH: f32 = 280.0;

/// Smallest tile width accepted from the config file.
pub const MIN_TILE_WIDTH: f32 = 160.0;

/// Largest tile width accepted from the config file.
pub const MAX_TILE_WIDTH: f32 = 480.0;

// ==========================================================================
// Timeline Defaults
// ==========================================================================

/// Edge length of a timeline thumbnail preview.
pub const TIMELINE_THUMBNAIL_SIZE: f32 = 60.0;

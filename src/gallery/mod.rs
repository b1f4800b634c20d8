// SPDX-License-Identifier: MPL-2.0
//! Gallery domain logic, independent of the widget tree.
//!
//! - [`state`]: active view and category filter, changed only through actions
//! - [`grid`]: which tiles the grid draws
//! - [`timeline`]: series grouping in first-seen order
//! - [`dialog`]: detail and source-code dialogs
//! - [`copy_feedback`]: timed "Copied!" confirmation

pub mod copy_feedback;
pub mod dialog;
pub mod grid;
pub mod state;
pub mod timeline;

pub use copy_feedback::{CopyFeedback, COPY_FEEDBACK_DURATION};
pub use dialog::{ArtworkDetail, CodeView, Dialogs};
pub use state::{Action, ActiveView, Filter, ViewState};
pub use timeline::{group_by_series, SeriesGroup, MAX_THUMBNAILS};

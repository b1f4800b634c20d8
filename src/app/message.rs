// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{dialogs, filter_bar, grid, navbar, notifications, timeline};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Filter(filter_bar::Message),
    Grid(grid::Message),
    Timeline(timeline::Message),
    Dialog(dialogs::Message),
    Notification(notifications::NotificationMessage),
    /// Source code read for the record at `index`.
    CodeLoaded {
        index: usize,
        result: Result<String, Error>,
    },
    /// Clipboard write finished.
    CodeCopied(Result<(), Error>),
    /// Save As dialog closed; `None` when the user cancelled.
    DownloadDialogResult {
        index: usize,
        destination: Option<PathBuf>,
    },
    /// Image copy finished, with the written path.
    DownloadCompleted(Result<PathBuf, Error>),
    /// Modal error notice acknowledged.
    NoticeDismissed,
    EscapePressed,
    Tick(Instant), // Periodic tick for toast and copy feedback expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file; wins over settings and environment.
    pub catalog_path: Option<String>,
    /// Optional data directory override.
    /// Takes precedence over `ICED_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! System clipboard access.
//!
//! The write itself goes through `iced::clipboard::write`, so the window
//! stays the selection owner after the copy. On X11 this keeps the text
//! available even without a clipboard manager.

use crate::error::{Error, Result};
use iced::Task;

/// Maximum clipboard content size in bytes (10 MB).
pub const MAX_CLIPBOARD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Writes `text` to the system clipboard, then reports the outcome through
/// `on_done`.
///
/// Oversized content is rejected before the clipboard is touched.
pub fn copy_text<Message>(
    text: String,
    on_done: impl FnOnce(Result<()>) -> Message,
) -> Task<Message>
where
    Message: Send + 'static,
{
    match check_size(&text) {
        Ok(()) => iced::clipboard::write(text).chain(Task::done(on_done(Ok(())))),
        Err(err) => Task::done(on_done(Err(err))),
    }
}

fn check_size(text: &str) -> Result<()> {
    if text.len() > MAX_CLIPBOARD_SIZE_BYTES {
        return Err(Error::Clipboard(format!(
            "content is {} bytes, limit is {}",
            text.len(),
            MAX_CLIPBOARD_SIZE_BYTES
        )));
    }
    Ok(())
}

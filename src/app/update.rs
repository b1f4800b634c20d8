// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation and filtering go through [`ViewState::apply`]; dialogs, copy
//! feedback and notifications are mutated in place. Asynchronous work (code
//! reads, clipboard writes, downloads) is started here as a `Task` and
//! reports back through a result message.

use super::Message;
use crate::catalog::{Catalog, DOWNLOAD_EXTENSION};
use crate::error::Error;
use crate::gallery::{Action, CopyFeedback, Dialogs, SeriesGroup, ViewState};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{copy_text, read_code_asset, save_image_copy};
use crate::ui::notifications::{self, Notification};
use crate::ui::{dialogs, grid, timeline};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

const CODE_LOAD_ERROR_KEY: &str = "notification-code-load-error";
const COPY_ERROR_KEY: &str = "notification-copy-error";
const NOTICE_TITLE_KEY: &str = "notice-error-title";
const DOWNLOAD_ERROR_KEY: &str = "notification-download-error";
const DOWNLOAD_SUCCESS_KEY: &str = "notification-download-success";

/// Mutable view of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub categories: &'a [String],
    pub series: &'a [SeriesGroup],
    pub view_state: &'a mut ViewState,
    pub dialogs: &'a mut Dialogs,
    pub copy_feedback: &'a mut CopyFeedback,
    pub notifications: &'a mut notifications::Manager,
}

/// Replaces the view state with the result of `action`.
pub fn handle_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    let next = ctx.view_state.apply(action);
    tracing::debug!(view = ?next.view(), filter = ?next.filter(), "view state changed");
    *ctx.view_state = next;
    Task::none()
}

pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::OpenArtwork(index) => {
            if ctx.catalog.get(index).is_some() {
                ctx.dialogs.open_artwork(index);
            }
            Task::none()
        }
    }
}

pub fn handle_timeline_message(
    ctx: &mut UpdateContext<'_>,
    message: timeline::Message,
) -> Task<Message> {
    match message {
        timeline::Message::FocusSeries(position) => match ctx.series.get(position) {
            Some(group) => {
                let action = group.focus_action(ctx.categories);
                handle_action(ctx, action)
            }
            None => Task::none(),
        },
    }
}

pub fn handle_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: dialogs::Message,
) -> Task<Message> {
    match message {
        dialogs::Message::Close => {
            close_dialogs(ctx);
            Task::none()
        }
        dialogs::Message::ViewCode(index) => {
            let Some(artwork) = ctx.catalog.get(index) else {
                return Task::none();
            };
            let path = artwork.code().to_path_buf();
            Task::perform(read_code_asset(path), move |result| Message::CodeLoaded {
                index,
                result,
            })
        }
        dialogs::Message::CopyCode => match ctx.dialogs.code() {
            Some(code) => copy_text(code.source.clone(), Message::CodeCopied),
            None => Task::none(),
        },
        dialogs::Message::Download(index) => {
            let Some(artwork) = ctx.catalog.get(index) else {
                return Task::none();
            };
            let file_name = artwork.download_name();
            Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_file_name(&file_name)
                        .add_filter("PNG", &[DOWNLOAD_EXTENSION])
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |destination| Message::DownloadDialogResult { index, destination },
            )
        }
    }
}

/// Opens the code dialog once its source has been read.
///
/// A failed read logs the error, leaves the code dialog closed and keeps the
/// detail dialog as it was.
pub fn handle_code_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<String, Error>,
) -> Task<Message> {
    match result {
        Ok(source) => {
            if ctx.dialogs.artwork() == Some(index) {
                ctx.notifications.clear_key(CODE_LOAD_ERROR_KEY);
                ctx.dialogs.open_code(index, source);
            } else {
                tracing::debug!(index, "detail dialog closed before source code arrived");
            }
        }
        Err(err) => {
            tracing::error!(index, error = %err, "failed to load source code");
            ctx.notifications.push(Notification::error(CODE_LOAD_ERROR_KEY));
            return blocking_notice(ctx.i18n, CODE_LOAD_ERROR_KEY);
        }
    }
    Task::none()
}

pub fn handle_code_copied(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), Error>,
    now: Instant,
) -> Task<Message> {
    match result {
        Ok(()) if ctx.dialogs.code().is_some() => ctx.copy_feedback.show(now),
        Ok(()) => tracing::debug!("code dialog closed before the copy finished"),
        Err(err) => {
            tracing::error!(error = %err, "failed to copy source code");
            ctx.notifications.push(Notification::error(COPY_ERROR_KEY));
            return blocking_notice(ctx.i18n, COPY_ERROR_KEY);
        }
    }
    Task::none()
}

/// Title and body of the modal error notice for `message_key`.
pub fn notice_text(i18n: &I18n, message_key: &str) -> (String, String) {
    (i18n.tr(NOTICE_TITLE_KEY), i18n.tr(message_key))
}

/// Shows a modal error dialog that must be acknowledged.
///
/// The matching error toast stays on screen after the dialog is closed.
fn blocking_notice(i18n: &I18n, message_key: &str) -> Task<Message> {
    let (title, description) = notice_text(i18n, message_key);
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(&title)
                .set_description(&description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        },
        |()| Message::NoticeDismissed,
    )
}

pub fn handle_download_destination(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        tracing::debug!(index, "download cancelled");
        return Task::none();
    };
    let Some(artwork) = ctx.catalog.get(index) else {
        return Task::none();
    };
    let source = artwork.image().to_path_buf();
    Task::perform(
        save_image_copy(source, destination),
        Message::DownloadCompleted,
    )
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "artwork saved");
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications
                .push(Notification::success(DOWNLOAD_SUCCESS_KEY).with_arg("filename", file_name));
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to save artwork");
            ctx.notifications.push(Notification::error(DOWNLOAD_ERROR_KEY));
        }
    }
    Task::none()
}

/// Escape closes whatever dialog is open; it does nothing otherwise.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.dialogs.is_open() {
        close_dialogs(ctx);
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    ctx.copy_feedback.tick(now);
    Task::none()
}

fn close_dialogs(ctx: &mut UpdateContext<'_>) {
    ctx.dialogs.close_all();
    ctx.copy_feedback.reset();
}

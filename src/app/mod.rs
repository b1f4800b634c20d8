// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the catalog and everything derived from it at startup
//! (categories, series groups, summary counts), plus the small amount of
//! state that changes afterwards: the view state, open dialogs, the copy
//! confirmation and toast notifications. The catalog is never re-read once
//! the window is up.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, Summary};
use crate::config::{self, Config};
use crate::error::Error;
use crate::gallery::{group_by_series, CopyFeedback, Dialogs, SeriesGroup, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{filter_bar, navbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    /// Distinct categories in first-seen order; one filter button each.
    categories: Vec<String>,
    series: Vec<SeriesGroup>,
    summary: Summary,
    view_state: ViewState,
    dialogs: Dialogs,
    copy_feedback: CopyFeedback,
    theme_mode: ThemeMode,
    tile_width: f32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("artworks", &self.catalog.len())
            .field("view_state", &self.view_state)
            .field("dialogs_open", &self.dialogs.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

const CATALOG_MISSING_KEY: &str = "notification-catalog-missing";
const CATALOG_IO_ERROR_KEY: &str = "notification-catalog-io-error";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(I18n::default(), Catalog::default(), &Config::default())
    }
}

impl App {
    /// Builds the application around an already loaded catalog, computing
    /// every projection once.
    pub fn from_parts(i18n: I18n, catalog: Catalog, config: &Config) -> Self {
        let categories = catalog.categories();
        let series = group_by_series(catalog.artworks());
        let summary = catalog.summary();
        let start_view = config.gallery.start_view.unwrap_or_default();

        Self {
            i18n,
            catalog,
            categories,
            series,
            summary,
            view_state: ViewState::new(start_view),
            dialogs: Dialogs::default(),
            copy_feedback: CopyFeedback::default(),
            theme_mode: config.general.theme_mode,
            tile_width: config.gallery.tile_width(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Loads settings, locale and catalog. Nothing here aborts startup:
    /// problems become notifications on an otherwise empty gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::info!(locale = %i18n.current_locale(), "locale selected");

        let catalog_path = paths::resolve_catalog_path(
            flags.catalog_path.map(PathBuf::from),
            config.gallery.catalog.clone(),
        );
        let (catalog, catalog_notice) = load_catalog(catalog_path.as_deref());

        let mut app = Self::from_parts(i18n, catalog, &config);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(notice) = catalog_notice {
            app.notifications.push(notice);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.copy_feedback.is_pending(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            categories: &self.categories,
            series: &self.series,
            view_state: &mut self.view_state,
            dialogs: &mut self.dialogs,
            copy_feedback: &mut self.copy_feedback,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_action(&mut ctx, navbar::update(navbar_message))
            }
            Message::Filter(filter_message) => {
                update::handle_action(&mut ctx, filter_bar::update(filter_message))
            }
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Timeline(timeline_message) => {
                update::handle_timeline_message(&mut ctx, timeline_message)
            }
            Message::Dialog(dialog_message) => {
                update::handle_dialog_message(&mut ctx, dialog_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CodeLoaded { index, result } => {
                update::handle_code_loaded(&mut ctx, index, result)
            }
            Message::CodeCopied(result) => {
                update::handle_code_copied(&mut ctx, result, Instant::now())
            }
            Message::DownloadDialogResult { index, destination } => {
                update::handle_download_destination(&mut ctx, index, destination)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::NoticeDismissed => Task::none(),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            categories: &self.categories,
            series: &self.series,
            summary: self.summary,
            view_state: &self.view_state,
            dialogs: &self.dialogs,
            copied: self.copy_feedback.is_pending(),
            tile_width: self.tile_width,
            notifications: &self.notifications,
        })
    }
}

/// Reads the catalog at `path`.
///
/// Any failure yields an empty catalog together with the notification that
/// tells the user why the gallery is empty.
fn load_catalog(path: Option<&Path>) -> (Catalog, Option<Notification>) {
    let Some(path) = path else {
        tracing::warn!("no catalog location could be resolved");
        return (
            Catalog::default(),
            Some(Notification::warning(CATALOG_MISSING_KEY).with_arg("path", "-")),
        );
    };

    if !path.exists() {
        tracing::warn!(path = %path.display(), "catalog file not found");
        return (
            Catalog::default(),
            Some(
                Notification::warning(CATALOG_MISSING_KEY)
                    .with_arg("path", path.display().to_string()),
            ),
        );
    }

    match Catalog::load_from_path(path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), artworks = catalog.len(), "catalog loaded");
            (catalog, None)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to load catalog");
            let key = match &err {
                Error::Catalog(reason) => reason.i18n_key(),
                _ => CATALOG_IO_ERROR_KEY,
            };
            (Catalog::default(), Some(Notification::error(key)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Artwork;
    use crate::gallery::{ActiveView, Filter};
    use crate::ui::notifications::Severity;
    use crate::ui::{dialogs, grid, timeline};
    use chrono::NaiveDate;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn artwork(id: &str, series: &str, category: &str, day: u32) -> Artwork {
        Artwork::new(
            id,
            format!("{id} title"),
            series,
            category,
            format!("{id} description"),
            NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            format!("/gallery/images/{id}.png"),
            format!("/gallery/code/{id}.py"),
        )
    }

    fn sample_app() -> App {
        let catalog = Catalog::new(vec![
            artwork("quantum_01", "Quantum Dreams", "physics", 1),
            artwork("memory_01", "Memory Palace", "consciousness", 2),
            artwork("quantum_02", "Quantum Dreams", "emotion", 3),
            artwork("swarm_01", "Swarm Logic", "emergence", 4),
        ]);
        App::from_parts(
            I18n::new(Some("en-US".into()), &Config::default()),
            catalog,
            &Config::default(),
        )
    }

    fn visible_keys(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect()
    }

    #[test]
    fn summary_counts_records_and_distinct_series() {
        let app = sample_app();
        assert_eq!(app.summary.artwork_count, 4);
        assert_eq!(app.summary.series_count, 3);
        assert_eq!(
            app.categories,
            vec!["physics", "consciousness", "emotion", "emergence"]
        );
    }

    #[test]
    fn default_app_starts_on_gallery_with_all() {
        let app = App::default();
        assert_eq!(app.view_state.view(), ActiveView::Gallery);
        assert_eq!(app.view_state.filter(), &Filter::All);
        assert!(!app.dialogs.is_open());
    }

    #[test]
    fn configured_start_view_is_used() {
        let mut config = Config::default();
        config.gallery.start_view = Some(ActiveView::Timeline);
        let app = App::from_parts(I18n::default(), Catalog::default(), &config);
        assert_eq!(app.view_state.view(), ActiveView::Timeline);
    }

    #[test]
    fn navbar_switches_view() {
        let mut app = sample_app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectView(
            ActiveView::Timeline,
        )));
        assert!(app.view_state.is_active(ActiveView::Timeline));
        assert!(!app.view_state.is_active(ActiveView::Gallery));
    }

    #[test]
    fn filter_bar_applies_category() {
        let mut app = sample_app();
        let _ = app.update(Message::Filter(filter_bar::Message::Select(
            Filter::Category("emotion".into()),
        )));
        assert_eq!(app.view_state.filter(), &Filter::Category("emotion".into()));
    }

    #[test]
    fn focusing_series_returns_to_filtered_gallery() {
        let mut app = sample_app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectView(
            ActiveView::Timeline,
        )));

        // "Quantum Dreams" is the first group; its first record is "physics".
        let _ = app.update(Message::Timeline(timeline::Message::FocusSeries(0)));

        assert_eq!(app.view_state.view(), ActiveView::Gallery);
        assert_eq!(app.view_state.filter(), &Filter::Category("physics".into()));
    }

    #[test]
    fn focusing_unknown_group_is_ignored() {
        let mut app = sample_app();
        let before = app.view_state.clone();
        let _ = app.update(Message::Timeline(timeline::Message::FocusSeries(42)));
        assert_eq!(app.view_state, before);
    }

    #[test]
    fn pressing_tile_opens_detail_for_that_record() {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(2)));
        assert_eq!(app.dialogs.artwork(), Some(2));
        assert!(app.dialogs.code().is_none());
    }

    #[test]
    fn code_load_failure_keeps_code_dialog_closed() {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(1)));

        let _ = app.update(Message::CodeLoaded {
            index: 1,
            result: Err(Error::Io("missing".into())),
        });

        assert!(app.dialogs.code().is_none());
        assert_eq!(app.dialogs.artwork(), Some(1));
        assert_eq!(visible_keys(&app), vec!["notification-code-load-error"]);
        assert!(app
            .notifications
            .visible()
            .all(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn code_load_success_opens_code_dialog_and_clears_old_error() {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(0)));
        let _ = app.update(Message::CodeLoaded {
            index: 0,
            result: Err(Error::Io("transient".into())),
        });

        let _ = app.update(Message::CodeLoaded {
            index: 0,
            result: Ok("def draw(): pass".into()),
        });

        let code = app.dialogs.code().expect("code dialog should be open");
        assert_eq!(code.index, 0);
        assert_eq!(code.source, "def draw(): pass");
        assert!(visible_keys(&app).is_empty());
    }

    #[test]
    fn late_code_for_closed_detail_is_dropped() {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(0)));
        let _ = app.update(Message::Dialog(dialogs::Message::Close));

        let _ = app.update(Message::CodeLoaded {
            index: 0,
            result: Ok("print()".into()),
        });

        assert!(!app.dialogs.is_open());
    }

    #[test]
    fn escape_closes_both_dialogs() {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(3)));
        let _ = app.update(Message::CodeLoaded {
            index: 3,
            result: Ok("swarm()".into()),
        });
        assert!(app.dialogs.code().is_some());

        let _ = app.update(Message::EscapePressed);

        assert!(app.dialogs.artwork().is_none());
        assert!(app.dialogs.code().is_none());
    }

    fn app_with_code_dialog() -> App {
        let mut app = sample_app();
        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(0)));
        let _ = app.update(Message::CodeLoaded {
            index: 0,
            result: Ok("quantum()".into()),
        });
        app
    }

    #[test]
    fn copy_success_shows_feedback_until_tick_expires_it() {
        let mut app = app_with_code_dialog();
        let _ = app.update(Message::CodeCopied(Ok(())));
        assert!(app.copy_feedback.is_pending());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(3)));
        assert!(!app.copy_feedback.is_pending());
    }

    #[test]
    fn error_notices_are_localised() {
        let app = sample_app();
        let (title, body) = update::notice_text(&app.i18n, "notification-copy-error");
        assert_eq!(title, "Error");
        assert_eq!(body, "Unable to copy code to clipboard.");

        let french = I18n::new(Some("fr".into()), &Config::default());
        let (title, body) = update::notice_text(&french, "notification-code-load-error");
        assert_eq!(title, "Erreur");
        assert_eq!(body, "Impossible de charger le code source.");
    }

    #[test]
    fn copy_failure_notifies() {
        let mut app = sample_app();
        let _ = app.update(Message::CodeCopied(Err(Error::Clipboard("no display".into()))));
        assert!(!app.copy_feedback.is_pending());
        assert_eq!(visible_keys(&app), vec!["notification-copy-error"]);
    }

    #[test]
    fn closing_dialog_resets_copy_feedback() {
        let mut app = app_with_code_dialog();
        let _ = app.update(Message::CodeCopied(Ok(())));
        assert!(app.copy_feedback.is_pending());
        let _ = app.update(Message::Dialog(dialogs::Message::Close));
        assert!(!app.copy_feedback.is_pending());
    }

    #[test]
    fn copy_finishing_after_close_leaves_reopened_dialog_unconfirmed() {
        let mut app = app_with_code_dialog();
        let _ = app.update(Message::Dialog(dialogs::Message::Close));
        let _ = app.update(Message::CodeCopied(Ok(())));
        assert!(!app.copy_feedback.is_pending());

        let _ = app.update(Message::Grid(grid::Message::OpenArtwork(0)));
        let _ = app.update(Message::CodeLoaded {
            index: 0,
            result: Ok("quantum()".into()),
        });
        assert!(app.dialogs.code().is_some());
        assert!(!app.copy_feedback.is_pending());
    }

    #[test]
    fn download_results_are_reported() {
        let mut app = sample_app();
        let _ = app.update(Message::DownloadCompleted(Ok(PathBuf::from(
            "/tmp/quantum_01.png",
        ))));
        let _ = app.update(Message::DownloadCompleted(Err(Error::Io("denied".into()))));

        let notifications: Vec<_> = app.notifications.visible().collect();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].message_key(), "notification-download-error");
        assert_eq!(notifications[1].message_key(), "notification-download-success");
        assert_eq!(
            notifications[1].message_args(),
            &[("filename".to_string(), "quantum_01.png".to_string())]
        );
    }

    #[test]
    fn cancelled_download_does_nothing() {
        let mut app = sample_app();
        let _ = app.update(Message::DownloadDialogResult {
            index: 0,
            destination: None,
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn missing_catalog_yields_empty_gallery_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");

        let (catalog, notice) = load_catalog(Some(path.as_path()));

        assert!(catalog.is_empty());
        let notice = notice.expect("a warning is expected");
        assert_eq!(notice.severity(), Severity::Warning);
        assert_eq!(notice.message_key(), "notification-catalog-missing");
    }

    #[test]
    fn invalid_catalog_reports_specific_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[artwork]]
id = "a"
title = "A"
series = "S"
category = "physics"
date = "2025-13-40"
image = "a.png"
code = "a.py"
"#,
        )
        .expect("failed to write catalog");

        let (catalog, notice) = load_catalog(Some(path.as_path()));

        assert!(catalog.is_empty());
        let notice = notice.expect("an error is expected");
        assert_eq!(notice.severity(), Severity::Error);
        assert_eq!(notice.message_key(), "notification-catalog-date-error");
    }

    #[test]
    fn valid_catalog_loads_without_notice() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[artwork]]
id = "a"
title = "A"
series = "S"
category = "physics"
date = "2025-08-04"
image = "a.png"
code = "a.py"
"#,
        )
        .expect("failed to write catalog");

        let (catalog, notice) = load_catalog(Some(path.as_path()));
        assert_eq!(catalog.len(), 1);
        assert!(notice.is_none());
    }
}

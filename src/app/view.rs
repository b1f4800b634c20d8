// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the header and active view, open dialogs, then the
//! toast overlay.

use super::Message;
use crate::catalog::{Catalog, Summary};
use crate::gallery::{ActiveView, Dialogs, SeriesGroup, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::{dialogs, filter_bar, grid, navbar, timeline};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub categories: &'a [String],
    pub series: &'a [SeriesGroup],
    pub summary: Summary,
    pub view_state: &'a ViewState,
    pub dialogs: &'a Dialogs,
    pub copied: bool,
    pub tile_width: f32,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.view_state.view(),
        summary: ctx.summary,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.view_state.view() {
        ActiveView::Gallery => Column::new()
            .push(
                filter_bar::view(filter_bar::ViewContext {
                    i18n: ctx.i18n,
                    categories: ctx.categories,
                    active: ctx.view_state.filter(),
                })
                .map(Message::Filter),
            )
            .push(
                grid::view(grid::ViewContext {
                    i18n: ctx.i18n,
                    artworks: ctx.catalog.artworks(),
                    filter: ctx.view_state.filter(),
                    tile_width: ctx.tile_width,
                })
                .map(Message::Grid),
            )
            .into(),
        ActiveView::Timeline => timeline::view(timeline::ViewContext {
            i18n: ctx.i18n,
            artworks: ctx.catalog.artworks(),
            groups: ctx.series,
        })
        .map(Message::Timeline),
    };

    let base = Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    for layer in dialogs::layers(dialogs::ViewContext {
        i18n: ctx.i18n,
        artworks: ctx.catalog.artworks(),
        dialogs: ctx.dialogs,
        copied: ctx.copied,
    }) {
        stack = stack.push(layer.map(Message::Dialog));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

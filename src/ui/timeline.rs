// SPDX-License-Identifier: MPL-2.0
//! Timeline view: one card per series, in first-appearance order.

use crate::catalog::{format_long_date, Artwork};
use crate::config::TIMELINE_THUMBNAIL_SIZE;
use crate::gallery::SeriesGroup;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artworks: &'a [Artwork],
    pub groups: &'a [SeriesGroup],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Position of the pressed group in the timeline.
    FocusSeries(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.groups.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .padding(spacing::XL)
            .into();
    }

    let cards = ctx
        .groups
        .iter()
        .enumerate()
        .map(|(position, group)| card(ctx.i18n, ctx.artworks, position, group));

    scrollable(
        Column::with_children(cards)
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn card<'a>(
    i18n: &I18n,
    artworks: &'a [Artwork],
    position: usize,
    group: &'a SeriesGroup,
) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(group.name()).size(typography::TITLE_SM))
        .push(Text::new(format_long_date(group.first_date())).size(typography::CAPTION))
        .push(
            Text::new(i18n.tr_with_count("timeline-count", group.count()))
                .size(typography::BODY_SM),
        );

    let thumbnails = group
        .thumbnails()
        .iter()
        .filter_map(|&index| artworks.get(index))
        .fold(Row::new().spacing(spacing::XS), |row, artwork| {
            row.push(thumbnail(artwork))
        });

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(thumbnails);

    button(content)
        .on_press(Message::FocusSeries(position))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::card)
        .into()
}

fn thumbnail<'a>(artwork: &'a Artwork) -> Element<'a, Message> {
    Container::new(
        image::Image::new(Handle::from_path(artwork.image()))
            .width(Length::Fixed(TIMELINE_THUMBNAIL_SIZE))
            .height(Length::Fixed(TIMELINE_THUMBNAIL_SIZE))
            .content_fit(ContentFit::Cover),
    )
    .style(styles::container::thumbnail)
    .into()
}

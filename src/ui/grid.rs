// SPDX-License-Identifier: MPL-2.0
//! Grid view: one wrapped tile per visible artwork.

use crate::catalog::Artwork;
use crate::gallery::{grid, Filter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

/// Tile images keep a 4:3 frame whatever the source size.
const TILE_IMAGE_RATIO: f32 = 0.75;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artworks: &'a [Artwork],
    pub filter: &'a Filter,
    pub tile_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Catalog index of the pressed tile.
    OpenArtwork(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = grid::visible_tiles(ctx.artworks, ctx.filter)
        .map(|(index, artwork)| tile(index, artwork, ctx.tile_width))
        .collect();

    if tiles.is_empty() {
        let key = if ctx.artworks.is_empty() {
            "gallery-empty"
        } else {
            "gallery-empty-filter"
        };
        return Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .into();
    }

    let wrapped = Row::with_children(tiles)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD);

    scrollable(Container::new(wrapped).padding(spacing::MD).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(index: usize, artwork: &'a Artwork, width: f32) -> Element<'a, Message> {
    let picture = image::Image::new(Handle::from_path(artwork.image()))
        .width(Length::Fill)
        .height(Length::Fixed(width * TILE_IMAGE_RATIO))
        .content_fit(ContentFit::Cover);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(artwork.title()).size(typography::TITLE_SM))
        .push(Text::new(artwork.series()).size(typography::BODY_SM))
        .push(Text::new(artwork.display_date()).size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(Container::new(picture).style(styles::container::thumbnail))
        .push(caption);

    button(content)
        .on_press(Message::OpenArtwork(index))
        .width(Length::Fixed(width))
        .padding(spacing::XS)
        .style(styles::button::card)
        .into()
}

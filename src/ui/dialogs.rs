// SPDX-License-Identifier: MPL-2.0
//! Artwork detail and source code dialogs.
//!
//! Each dialog is rendered as a layer meant to be stacked over the main
//! content: a dimmed backdrop that closes on click, with the dialog body
//! centered and opaque to pointer events.

use crate::catalog::Artwork;
use crate::gallery::{ArtworkDetail, CodeView, Dialogs};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, Column, Container, Row, Space, Text,
};
use iced::{ContentFit, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artworks: &'a [Artwork],
    pub dialogs: &'a Dialogs,
    /// Whether the copy button shows its confirmation label.
    pub copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close control, backdrop click or Escape.
    Close,
    Download(usize),
    ViewCode(usize),
    CopyCode,
}

/// Dialog layers from bottom to top. Empty when no dialog is open.
pub fn layers<'a>(ctx: ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let mut layers = Vec::new();

    if let Some(index) = ctx.dialogs.artwork() {
        if let Some(artwork) = ctx.artworks.get(index) {
            layers.push(modal(detail_body(ctx.i18n, index, artwork)));
        }
    }

    if let Some(code) = ctx.dialogs.code() {
        if let Some(artwork) = ctx.artworks.get(code.index) {
            layers.push(modal(code_body(ctx.i18n, artwork, code, ctx.copied)));
        }
    }

    layers
}

fn modal<'a>(body: Element<'a, Message>) -> Element<'a, Message> {
    opaque(
        mouse_area(center(opaque(body)).style(styles::container::backdrop))
            .on_press(Message::Close),
    )
}

fn detail_body<'a>(i18n: &I18n, index: usize, artwork: &Artwork) -> Element<'a, Message> {
    let detail = ArtworkDetail::from_artwork(artwork);

    let picture = image::Image::new(Handle::from_path(detail.image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DIALOG_IMAGE_HEIGHT))
        .content_fit(ContentFit::Contain);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("dialog-close")))
                .on_press(Message::Close)
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("dialog-view-code")))
                .on_press(Message::ViewCode(index))
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("dialog-download")))
                .on_press(Message::Download(index))
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(detail.title).size(typography::TITLE_LG))
        .push(Text::new(detail.date).size(typography::CAPTION))
        .push(picture)
        .push(Text::new(detail.description).size(typography::BODY))
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

fn code_body<'a>(
    i18n: &I18n,
    artwork: &Artwork,
    code: &'a CodeView,
    copied: bool,
) -> Element<'a, Message> {
    let title = i18n.tr_with_args("code-dialog-title", &[("title", artwork.title())]);

    let listing = scrollable(
        Container::new(
            Text::new(code.source.as_str())
                .font(Font::MONOSPACE)
                .size(typography::BODY_SM),
        )
        .padding(spacing::SM)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let copy_button = if copied {
        button(Text::new(i18n.tr("code-copied")))
            .on_press(Message::CopyCode)
            .style(styles::button::confirmed)
    } else {
        button(Text::new(i18n.tr("code-copy")))
            .on_press(Message::CopyCode)
            .style(styles::button::primary)
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("dialog-close")))
                .on_press(Message::Close)
                .style(styles::button::unselected),
        )
        .push(copy_button);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(
            Container::new(listing)
                .height(Length::Fill)
                .style(styles::container::code_block),
        )
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(sizing::CODE_DIALOG_WIDTH))
        .height(Length::Fixed(sizing::CODE_DIALOG_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn artworks() -> Vec<Artwork> {
        vec![Artwork::new(
            "fractal_01",
            "Fractal Bloom",
            "Fractal Bloom",
            "emergence",
            "Self-similar petals.",
            NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            "fractal_01.png",
            "fractal_01.py",
        )]
    }

    #[test]
    fn no_layers_when_closed() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let artworks = artworks();
        let dialogs = Dialogs::default();
        let layers = layers(ViewContext {
            i18n: &i18n,
            artworks: &artworks,
            dialogs: &dialogs,
            copied: false,
        });
        assert!(layers.is_empty());
    }

    #[test]
    fn code_dialog_stacks_over_detail() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let artworks = artworks();
        let mut dialogs = Dialogs::default();
        dialogs.open_artwork(0);
        dialogs.open_code(0, "print('bloom')".into());

        let layers = layers(ViewContext {
            i18n: &i18n,
            artworks: &artworks,
            dialogs: &dialogs,
            copied: true,
        });
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn stale_index_renders_nothing() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let artworks = artworks();
        let mut dialogs = Dialogs::default();
        dialogs.open_artwork(7);

        let layers = layers(ViewContext {
            i18n: &i18n,
            artworks: &artworks,
            dialogs: &dialogs,
            copied: false,
        });
        assert!(layers.is_empty());
    }
}

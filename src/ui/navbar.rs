// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Shows the gallery title, one button per view (the active one highlighted)
//! and the catalog summary counts.

use crate::catalog::Summary;
use crate::gallery::{Action, ActiveView};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: ActiveView,
    pub summary: Summary,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectView(ActiveView),
}

/// Translates a navbar message into a view-state action.
pub fn update(message: Message) -> Action {
    match message {
        Message::SelectView(view) => Action::SwitchView(view),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let mut tabs = Row::new().spacing(spacing::XS);
    for view in ActiveView::ALL {
        let style = if view == ctx.active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        tabs = tabs.push(
            button(Text::new(ctx.i18n.tr(view.label_key())))
                .on_press(Message::SelectView(view))
                .padding([spacing::XS, spacing::MD])
                .style(style),
        );
    }

    let row = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(summary_line(ctx.i18n, ctx.summary));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

/// Formats the header counts, e.g. "12 artworks · 4 series".
pub fn summary_text(i18n: &I18n, summary: Summary) -> String {
    format!(
        "{} · {}",
        i18n.tr_with_count("summary-artworks", summary.artwork_count),
        i18n.tr_with_count("summary-series", summary.series_count),
    )
}

fn summary_line<'a>(i18n: &I18n, summary: Summary) -> Element<'a, Message> {
    Text::new(summary_text(i18n, summary))
        .size(typography::BODY_SM)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn select_view_maps_to_switch_action() {
        assert_eq!(
            update(Message::SelectView(ActiveView::Timeline)),
            Action::SwitchView(ActiveView::Timeline)
        );
    }

    #[test]
    fn summary_text_pluralises_both_counts() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let summary = Summary {
            artwork_count: 1,
            series_count: 3,
        };
        assert_eq!(summary_text(&i18n, summary), "1 artwork · 3 series");
    }
}

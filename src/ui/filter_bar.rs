// SPDX-License-Identifier: MPL-2.0
//! Category filter buttons shown above the grid.

use crate::gallery::{Action, Filter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub categories: &'a [String],
    pub active: &'a Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(Filter),
}

pub fn update(message: Message) -> Action {
    match message {
        Message::Select(filter) => Action::ApplyFilter(filter),
    }
}

/// "All" followed by one button per category, in catalog order.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    row = row.push(filter_button(
        ctx.i18n.tr("filter-all"),
        Filter::All,
        ctx.active,
    ));
    for category in ctx.categories {
        row = row.push(filter_button(
            category_label(category),
            Filter::Category(category.clone()),
            ctx.active,
        ));
    }

    Container::new(row.wrap())
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

fn filter_button<'a>(label: String, filter: Filter, active: &Filter) -> Element<'a, Message> {
    let style = if &filter == active {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label))
        .on_press(Message::Select(filter))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

/// Category tags are stored lowercase; buttons show them capitalized.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_capitalizes_first_letter() {
        assert_eq!(category_label("physics"), "Physics");
        assert_eq!(category_label("émergence"), "Émergence");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn select_maps_to_apply_filter() {
        assert_eq!(
            update(Message::Select(Filter::Category("emotion".into()))),
            Action::ApplyFilter(Filter::Category("emotion".into()))
        );
    }
}

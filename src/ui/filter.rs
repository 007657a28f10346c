/// Category filter bar
use iced::widget::{button, container, text, Row};
use iced::{Element, Length};

use super::style;
use crate::state::data::Category;
use crate::Message;

/// One button per category; the active one is highlighted
pub fn view<'a>(categories: &'a [Category], active: &Category) -> Element<'a, Message> {
    let buttons = categories.iter().map(|category| {
        button(text(category.as_str()).size(15))
            .padding([8, 18])
            .style(style::toggle(category == active))
            .on_press(Message::CategorySelected(category.clone()))
            .into()
    });

    container(Row::with_children(buttons).spacing(12))
        .padding([32, 24])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

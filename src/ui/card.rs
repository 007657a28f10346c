/// Product card shown in the catalog grid
use iced::widget::{button, column, container, horizontal_space, row, text, Space};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::data::Product;
use crate::Message;

pub const CARD_WIDTH: f32 = 260.0;

pub fn view(product: &Product) -> Element<'_, Message> {
    // Remote images are not fetched; the card shows a placeholder tile
    let new_badge = container(text("NEW").size(11)).padding([2, 8]).style(style::badge);
    let image = container(column![new_badge, Space::with_height(Length::Fill)])
        .padding(12)
        .width(Length::Fill)
        .height(200)
        .style(style::placeholder);

    let info = column![
        text(product.category.as_str()).size(12).color(style::MUTED),
        text(product.name.as_str()).size(16),
        row![
            text(format!("{} Styles", product.styles)).size(13).color(style::MUTED),
            horizontal_space(),
            text(style::format_price(product.price)).size(18),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8)
    .padding(16);

    button(column![image, info])
        .padding(0)
        .width(CARD_WIDTH)
        .style(style::card)
        .on_press(Message::OpenProduct(product.id))
        .into()
}

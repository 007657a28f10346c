/// Product detail overlay
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, scrollable, text, Column,
    Row,
};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::data::{Product, Size};
use crate::state::detail::{DetailState, PurchaseAction};
use crate::Message;

const SIZES_PER_ROW: usize = 3;

const SHIPPING_INFO: [(&str, &str, &str); 3] = [
    ("📦", "무료배송", "30,000원 이상 주문시"),
    ("🔄", "교환/환불", "구매일로부터 30일 이내"),
    ("🚚", "배송기간", "주문 후 1-3일 (영업일 기준)"),
];

pub fn view<'a>(product: &'a Product, state: &'a DetailState) -> Element<'a, Message> {
    let title_bar = row![
        text("상품 상세").size(24),
        horizontal_space(),
        button(text("✕").size(18))
            .style(style::link)
            .on_press(Message::CloseProduct),
    ]
    .align_y(Alignment::Center);

    let body = row![gallery(product, state), info(product, state)].spacing(32);

    let content = column![title_bar, scrollable(body)].spacing(24);

    container(content)
        .padding(24)
        .max_width(920)
        .max_height(720)
        .style(style::surface)
        .into()
}

fn gallery<'a>(product: &'a Product, state: &'a DetailState) -> Element<'a, Message> {
    let images = product.gallery();
    let len = images.len();
    let current = state.current_image();

    // Remote images are not fetched; show which gallery entry is selected
    let main_image = container(
        column![
            text(format!("{} / {}", current + 1, len))
                .size(14)
                .color(style::MUTED),
            text(images.get(current).copied().unwrap_or_default())
                .size(10)
                .color(style::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(380)
    .center_x(Length::Fill)
    .center_y(380)
    .style(style::placeholder);

    let thumbnails = Row::with_children((0..len).map(|index| {
        button(text(format!("{}", index + 1)).size(13))
            .width(56)
            .height(56)
            .style(style::toggle(index == current))
            .on_press(Message::SelectImage(index))
            .into()
    }))
    .spacing(8);

    column![main_image, thumbnails]
        .spacing(16)
        .width(Length::FillPortion(1))
        .into()
}

fn info<'a>(product: &'a Product, state: &'a DetailState) -> Element<'a, Message> {
    let heading = column![
        container(text(product.category.as_str()).size(12))
            .padding([2, 10])
            .style(style::placeholder),
        text(product.name.as_str()).size(30),
        text(style::format_price(product.price))
            .size(24)
            .color(style::NEON_GREEN),
    ]
    .spacing(8);

    let description = column![
        text("상품 설명").size(16),
        text(product.description_or_default())
            .size(14)
            .color(style::MUTED),
    ]
    .spacing(8);

    let features = column![
        text("주요 특징").size(16),
        Column::with_children(product.features_or_default().into_iter().map(|feature| {
            row![
                text("•").color(style::NEON_GREEN),
                text(feature).size(14).color(style::MUTED)
            ]
            .spacing(8)
            .into()
        }))
        .spacing(4),
    ]
    .spacing(8);

    let quantity = row![
        button(text("-")).style(style::outline).on_press(Message::DecrementQuantity),
        text(state.quantity().to_string()).size(16).width(32).center(),
        button(text("+")).style(style::outline).on_press(Message::IncrementQuantity),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let purchase = |label: &'a str, action: PurchaseAction| {
        button(text(label).size(16).center().width(Length::Fill))
            .width(Length::Fill)
            .padding(12)
            .style(style::purchase)
            .on_press_maybe(state.can_purchase().then_some(Message::Purchase(action)))
    };

    let shipping = Column::with_children(SHIPPING_INFO.iter().map(|(icon, label, detail)| {
        text(format!("{icon} {label}  {detail}"))
            .size(13)
            .color(style::MUTED)
            .into()
    }))
    .spacing(6);

    column![
        heading,
        horizontal_rule(1),
        description,
        features,
        horizontal_rule(1),
        column![text("사이즈 선택").size(16), size_grid(state.selected_size())].spacing(12),
        column![text("수량").size(16), quantity].spacing(12),
        column![
            purchase("장바구니 담기", PurchaseAction::AddToCart),
            purchase("바로 구매", PurchaseAction::BuyNow),
        ]
        .spacing(12),
        container(shipping)
            .padding(16)
            .width(Length::Fill)
            .style(style::surface),
    ]
    .spacing(20)
    .width(Length::FillPortion(1))
    .into()
}

fn size_grid<'a>(selected: Option<Size>) -> Element<'a, Message> {
    let sizes: &'static [Size] = &Size::ALL;
    let rows = sizes.chunks(SIZES_PER_ROW).map(|chunk| {
        Row::with_children(chunk.iter().map(|&size| {
            button(text(size.label()).center().width(Length::Fill))
                .width(Length::Fill)
                .style(style::toggle(selected == Some(size)))
                .on_press(Message::SelectSize(size))
                .into()
        }))
        .spacing(8)
        .into()
    });

    Column::with_children(rows).spacing(8).into()
}

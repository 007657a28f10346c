/// Static page sections: hero banner, brand promise and footer
use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::Message;

const PROMISES: [(&str, &str, &str); 3] = [
    ("🏃", "최고의 성능", "첨단 기술로 제작된 고성능 러닝 양말"),
    ("✅", "검증된 품질", "수많은 러너들이 인정한 품질과 내구성"),
    ("🚚", "빠른 배송", "주문 후 1-3일 내 무료배송"),
];

const FOOTER_LINKS: [(&str, [&str; 3]); 3] = [
    ("쇼핑", ["남성", "여성", "키즈"]),
    ("고객지원", ["배송 안내", "교환/환불", "고객센터"]),
    ("회사", ["브랜드 소개", "채용정보", "이용약관"]),
];

pub fn hero<'a>() -> Element<'a, Message> {
    let headline = row![
        text("Run Beyond Limits with ").size(44),
        text("Compro").size(44).color(style::NEON_GREEN),
    ];

    // The call to action is decorative
    let cta = button(text("지금 쇼핑하기").size(18))
        .padding([12, 32])
        .style(style::selected);

    let content = column![
        headline,
        text("혁신적인 기술과 뛰어난 품질로 제작된 고성능 러닝 양말로 새로운 차원의 러닝을 경험하세요")
            .size(18),
        cta,
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(content)
        .padding([72, 24])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(style::dark)
        .into()
}

pub fn brand_promise<'a>() -> Element<'a, Message> {
    let items = PROMISES.iter().map(|(icon, title, body)| -> Element<'a, Message> {
        column![
            text(*icon).size(36),
            text(*title).size(20),
            text(*body).size(14).color(style::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    });

    container(Row::with_children(items).spacing(32))
        .padding([56, 24])
        .width(Length::Fill)
        .style(style::surface)
        .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    let brand = column![
        text("Compro").size(22).color(style::NEON_GREEN),
        text("최고의 러닝 양말로 당신의 러닝을 한 단계 업그레이드하세요.")
            .size(14)
            .color(style::MUTED),
    ]
    .spacing(12)
    .width(Length::Fill);

    let columns = FOOTER_LINKS.iter().map(|(heading, links)| -> Element<'a, Message> {
        let links = Column::with_children(
            links
                .iter()
                .map(|link| text(*link).size(14).color(style::MUTED).into()),
        )
        .spacing(8);
        column![text(*heading).size(16), links]
            .spacing(16)
            .width(Length::Fill)
            .into()
    });

    let grid = Row::with_children(std::iter::once(brand.into()).chain(columns)).spacing(32);

    container(
        column![
            grid,
            horizontal_rule(1),
            text("© 2024 Compro. All rights reserved.").size(13).color(style::MUTED),
        ]
        .spacing(32)
        .align_x(Alignment::Center),
    )
    .padding([48, 24])
    .width(Length::Fill)
    .style(style::dark)
    .into()
}

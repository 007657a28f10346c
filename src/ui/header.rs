/// Page header: logo, navigation, search and the mobile menu
///
/// Search text and the menu flag are local to the header. Nothing else
/// in the application reads them.
use iced::widget::{button, column, container, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::Message;

const NAV_ITEMS: [&str; 6] = ["홈", "남성", "여성", "키즈", "브랜드 소개", "고객지원"];
const SEARCH_PLACEHOLDER: &str = "상품 검색...";

#[derive(Debug, Clone)]
pub enum Event {
    SearchChanged(String),
    ToggleMenu,
    /// A navigation link was pressed (links are inert)
    NavPressed(usize),
}

#[derive(Debug, Default)]
pub struct Header {
    menu_open: bool,
    search: String,
}

impl Header {
    pub fn update(&mut self, event: Event) {
        match event {
            Event::SearchChanged(value) => self.search = value,
            Event::ToggleMenu => self.menu_open = !self.menu_open,
            Event::NavPressed(index) => {
                tracing::debug!(item = ?NAV_ITEMS.get(index), "navigation pressed");
                self.menu_open = false;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let logo = text("Compro").size(26).color(style::NEON_GREEN);

        let nav = Row::with_children(NAV_ITEMS.iter().enumerate().map(|(i, item)| nav_link(i, item)))
            .spacing(24)
            .align_y(Alignment::Center);

        let cart_badge = container(text("0").size(11))
            .padding([1, 6])
            .style(style::badge);
        let cart = button(row![text("🛍").size(20), cart_badge].align_y(Alignment::Start))
            .style(style::link);

        let menu_toggle = button(text(if self.menu_open { "✕" } else { "☰" }).size(20))
            .style(style::link)
            .on_press(Event::ToggleMenu);

        let bar = row![
            logo,
            container(nav).width(Length::Fill).center_x(Length::Fill),
            self.search_input().width(240),
            cart,
            menu_toggle,
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut content = column![bar].spacing(12);

        if self.menu_open {
            let dropdown = Column::with_children(
                NAV_ITEMS.iter().enumerate().map(|(i, item)| nav_link(i, item)),
            )
            .spacing(8);
            content = content.push(self.search_input().width(Length::Fill)).push(dropdown);
        }

        let header: Element<'_, Event> = container(content)
            .padding([12, 24])
            .width(Length::Fill)
            .style(style::surface)
            .into();

        header.map(Message::Header)
    }

    fn search_input(&self) -> iced::widget::TextInput<'_, Event> {
        text_input(SEARCH_PLACEHOLDER, &self.search)
            .on_input(Event::SearchChanged)
            .padding(8)
    }
}

fn nav_link<'a>(index: usize, label: &'a str) -> Element<'a, Event> {
    button(text(label).size(15))
        .style(style::link)
        .on_press(Event::NavPressed(index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggles() {
        let mut header = Header::default();
        assert!(!header.menu_open);

        header.update(Event::ToggleMenu);
        assert!(header.menu_open);

        header.update(Event::ToggleMenu);
        assert!(!header.menu_open);
    }

    #[test]
    fn test_nav_press_closes_menu() {
        let mut header = Header::default();
        header.update(Event::ToggleMenu);

        header.update(Event::NavPressed(2));
        assert!(!header.menu_open);
    }

    #[test]
    fn test_search_text_is_kept() {
        let mut header = Header::default();
        header.update(Event::SearchChanged("쿠션".into()));
        assert_eq!(header.search, "쿠션");
    }
}

/// Presentation components
///
/// Every component is a plain `view` function (or a small struct for the
/// header, which owns its own local state) producing `crate::Message`s.

pub mod card;
pub mod detail;
pub mod filter;
pub mod header;
pub mod sections;
pub mod style;

use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

/// Lay `content` over `base` on a dimmed backdrop.
///
/// Clicks on the backdrop produce `on_blur`; the base stays inert.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content)).padding(24).style(style::backdrop)).on_press(on_blur))
    ]
    .into()
}

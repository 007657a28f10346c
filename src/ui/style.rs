/// Storefront palette, widget styles and display formatting
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const NEON_GREEN: Color = Color { r: 0.22, g: 1.0, b: 0.08, a: 1.0 };
pub const NEON_YELLOW: Color = Color { r: 0.87, g: 1.0, b: 0.0, a: 1.0 };
pub const INK: Color = Color { r: 0.07, g: 0.09, b: 0.15, a: 1.0 };
pub const MUTED: Color = Color { r: 0.42, g: 0.45, b: 0.50, a: 1.0 };
pub const PAGE: Color = Color { r: 0.98, g: 0.98, b: 0.98, a: 1.0 };
pub const SURFACE: Color = Color::WHITE;
pub const HERO: Color = Color { r: 0.12, g: 0.14, b: 0.18, a: 1.0 };
pub const PLACEHOLDER: Color = Color { r: 0.95, g: 0.96, b: 0.96, a: 1.0 };
pub const BORDER: Color = Color { r: 0.90, g: 0.91, b: 0.92, a: 1.0 };

/// Format a won amount with thousands separators, e.g. `₩18,000`
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₩');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Neon style for the selected option, outline otherwise
pub fn toggle(selected: bool) -> ButtonStyle {
    if selected {
        self::selected
    } else {
        outline
    }
}

pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => NEON_YELLOW,
        _ => NEON_GREEN,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::BLACK,
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (border_color, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (NEON_GREEN, INK),
        button::Status::Disabled => (BORDER, MUTED),
        button::Status::Active => (BORDER, INK),
    };
    button::Style {
        background: Some(Background::Color(SURFACE)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Primary purchase button; greyed out while disabled
pub fn purchase(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(PLACEHOLDER)),
            text_color: MUTED,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        _ => selected(theme, status),
    }
}

pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => NEON_GREEN,
        _ => INK,
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

/// Product card; lifts slightly on hover
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(Background::Color(SURFACE)),
        text_color: INK,
        border: Border {
            color: if hovered { NEON_GREEN } else { BORDER },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color { a: if hovered { 0.15 } else { 0.05 }, ..Color::BLACK },
            offset: Vector::new(0.0, if hovered { 6.0 } else { 2.0 }),
            blur_radius: if hovered { 16.0 } else { 4.0 },
        },
    }
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(INK),
        background: Some(Background::Color(PAGE)),
        ..container::Style::default()
    }
}

pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(INK),
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn dark(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(HERO)),
        ..container::Style::default()
    }
}

pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(MUTED),
        background: Some(Background::Color(PLACEHOLDER)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::BLACK),
        background: Some(Background::Color(NEON_GREEN)),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.5, ..Color::BLACK }.into()),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₩0");
        assert_eq!(format_price(999), "₩999");
        assert_eq!(format_price(18000), "₩18,000");
        assert_eq!(format_price(1_234_567), "₩1,234,567");
    }
}

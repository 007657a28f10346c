use iced::keyboard::{self, key};
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Pixels, Subscription, Task, Theme};
use iced_aw::Wrap;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use error::AppError;
use state::catalog::Catalog;
use state::data::{Category, ProductId, Size};
use state::detail::PurchaseAction;
use state::selection::Selection;

/// Main application state
struct Storefront {
    /// Catalog, category filter and the open product
    selection: Selection,
    /// Header with its own local search/menu state
    header: ui::header::Header,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Header(ui::header::Event),
    CategorySelected(Category),
    OpenProduct(ProductId),
    CloseProduct,
    SelectImage(usize),
    SelectSize(Size),
    IncrementQuantity,
    DecrementQuantity,
    Purchase(PurchaseAction),
}

impl Storefront {
    fn new(catalog: Catalog) -> (Self, Task<Message>) {
        tracing::info!(
            products = catalog.list_products().len(),
            categories = catalog.list_categories().len() - 1,
            "storefront initialized"
        );

        (
            Storefront {
                selection: Selection::new(catalog),
                header: ui::header::Header::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state.
    ///
    /// Rejected transitions are logged and otherwise ignored; the user
    /// never sees an error.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(event) => self.header.update(event),
            Message::CategorySelected(category) => {
                tracing::debug!(%category, "category selected");
                if let Err(e) = self.selection.set_category(category) {
                    tracing::debug!("ignored: {}", e);
                }
            }
            Message::OpenProduct(id) => match self.selection.open_product(id) {
                Ok(product) => tracing::info!(%id, name = %product.name, "product opened"),
                Err(e) => tracing::debug!("ignored: {}", e),
            },
            Message::CloseProduct => {
                if self.selection.is_open() {
                    tracing::info!("product closed");
                }
                self.selection.close_product();
            }
            Message::SelectImage(index) => {
                let result = self
                    .selection
                    .detail_mut()
                    .and_then(|detail| detail.select_image(index));
                if let Err(e) = result {
                    tracing::debug!("ignored: {}", e);
                }
            }
            Message::SelectSize(size) => self.with_detail(|detail| detail.select_size(size)),
            Message::IncrementQuantity => self.with_detail(|detail| detail.increment()),
            Message::DecrementQuantity => self.with_detail(|detail| detail.decrement()),
            Message::Purchase(action) => {
                let result = self
                    .selection
                    .detail_mut()
                    .and_then(|detail| detail.purchase(action));
                match result {
                    Ok(request) => tracing::info!(?request, "purchase requested"),
                    Err(e) => tracing::debug!("ignored: {}", e),
                }
            }
        }

        Task::none()
    }

    fn with_detail(&mut self, f: impl FnOnce(&mut state::detail::DetailState)) {
        match self.selection.detail_mut() {
            Ok(detail) => f(detail),
            Err(e) => tracing::debug!("ignored: {}", e),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let catalog = self.selection.catalog();

        let page = column![
            ui::sections::hero(),
            ui::filter::view(catalog.list_categories(), self.selection.active_category()),
            self.product_grid(),
            ui::sections::brand_promise(),
            ui::sections::footer(),
        ];

        let base = container(column![self.header.view(), scrollable(page)])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::page);

        match self.selection.opened() {
            Some((product, detail)) => {
                ui::modal(base, ui::detail::view(product, detail), Message::CloseProduct)
            }
            None => base.into(),
        }
    }

    fn product_grid(&self) -> Element<'_, Message> {
        let products = self.selection.filtered_products();

        let grid: Element<'_, Message> = if products.is_empty() {
            text("표시할 상품이 없습니다.").into()
        } else {
            Wrap::with_elements(products.into_iter().map(ui::card::view).collect())
                .spacing(Pixels(24.0))
                .line_spacing(Pixels(24.0))
                .into()
        };

        container(grid)
            .padding([0, 24])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Escape closes the detail overlay
    fn subscription(&self) -> Subscription<Message> {
        if !self.selection.is_open() {
            return Subscription::none();
        }
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseProduct),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env();
    let catalog = config.load_catalog().inspect_err(|e| {
        tracing::error!("failed to load catalog: {}", e);
    })?;

    iced::application("Compro", Storefront::update, Storefront::view)
        .subscription(Storefront::subscription)
        .theme(Storefront::theme)
        .window_size(iced::Size::new(1280.0, 900.0))
        .centered()
        .run_with(move || Storefront::new(catalog))?;

    Ok(())
}

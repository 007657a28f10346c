/// Per-product detail state
///
/// Created fresh whenever a product is opened and dropped when the
/// overlay closes. Nothing in here survives a switch to another product.

use super::data::{Product, ProductId, Size};
use crate::error::SelectionError;

/// The two purchase affordances of the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseAction {
    AddToCart,
    BuyNow,
}

/// What an enabled purchase action would submit.
///
/// There is no cart or checkout behind it; callers only log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub action: PurchaseAction,
    pub product: ProductId,
    pub size: Size,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    product: ProductId,
    gallery_len: usize,
    selected_size: Option<Size>,
    quantity: u32,
    current_image: usize,
}

impl DetailState {
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.id,
            gallery_len: product.gallery_len(),
            selected_size: None,
            quantity: 1,
            current_image: 0,
        }
    }

    pub fn product(&self) -> ProductId {
        self.product
    }

    pub fn selected_size(&self) -> Option<Size> {
        self.selected_size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn current_image(&self) -> usize {
        self.current_image
    }

    /// Show gallery image `index`; out-of-range indices are rejected
    pub fn select_image(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.gallery_len {
            return Err(SelectionError::ImageIndexOutOfRange {
                index,
                len: self.gallery_len,
            });
        }
        self.current_image = index;
        Ok(())
    }

    /// Single-select: replaces any previous choice
    pub fn select_size(&mut self, size: Size) {
        self.selected_size = Some(size);
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Quantity never drops below 1
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Purchase actions are enabled only once a size is chosen
    pub fn can_purchase(&self) -> bool {
        self.selected_size.is_some()
    }

    pub fn purchase(&self, action: PurchaseAction) -> Result<PurchaseRequest, SelectionError> {
        let size = self.selected_size.ok_or(SelectionError::SizeNotSelected)?;
        Ok(PurchaseRequest {
            action,
            product: self.product,
            size,
            quantity: self.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::product;

    #[test]
    fn test_fresh_state() {
        let state = DetailState::new(&product(1, "러닝"));

        assert_eq!(state.selected_size(), None);
        assert_eq!(state.quantity(), 1);
        assert_eq!(state.current_image(), 0);
        assert!(!state.can_purchase());
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut state = DetailState::new(&product(1, "러닝"));

        state.decrement();
        assert_eq!(state.quantity(), 1);

        state.increment();
        state.increment();
        assert_eq!(state.quantity(), 3);
        state.decrement();
        assert_eq!(state.quantity(), 2);
    }

    #[test]
    fn test_select_image_bounds() {
        // Fallback gallery has three entries
        let mut state = DetailState::new(&product(1, "러닝"));

        assert!(state.select_image(2).is_ok());
        assert_eq!(state.current_image(), 2);

        assert_eq!(
            state.select_image(3),
            Err(SelectionError::ImageIndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.current_image(), 2);
    }

    #[test]
    fn test_select_image_uses_listed_gallery() {
        let mut p = product(1, "러닝");
        p.images = Some(vec!["only.jpg".into()]);
        let mut state = DetailState::new(&p);

        assert!(state.select_image(1).is_err());
        assert!(state.select_image(0).is_ok());
    }

    #[test]
    fn test_size_is_single_select() {
        let mut state = DetailState::new(&product(1, "러닝"));

        state.select_size(Size::M);
        state.select_size(Size::Xl);
        assert_eq!(state.selected_size(), Some(Size::Xl));
    }

    #[test]
    fn test_purchase_gated_on_size() {
        let mut state = DetailState::new(&product(7, "러닝"));
        assert_eq!(
            state.purchase(PurchaseAction::BuyNow),
            Err(SelectionError::SizeNotSelected)
        );

        state.select_size(Size::S);
        state.increment();
        let request = state.purchase(PurchaseAction::AddToCart).unwrap();

        assert!(state.can_purchase());
        assert_eq!(request.product.get(), 7);
        assert_eq!(request.size, Size::S);
        assert_eq!(request.quantity, 2);
        assert_eq!(request.action, PurchaseAction::AddToCart);
    }
}

use super::catalog::Catalog;
use super::data::{Category, Product, ProductId};
use super::detail::DetailState;
use crate::error::SelectionError;

/// Owns the catalog together with the two pieces of page state:
/// the active category filter and the product shown in the detail overlay.
///
/// The overlay's `DetailState` lives here so it is dropped together with
/// the open product and can never carry over to another one.
#[derive(Debug)]
pub struct Selection {
    catalog: Catalog,
    active_category: Category,
    open: Option<DetailState>,
}

impl Selection {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_category: Category::all(),
            open: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> &Category {
        &self.active_category
    }

    /// Change the filter. Unknown categories are rejected and the
    /// previous filter stays active.
    pub fn set_category(&mut self, category: Category) -> Result<(), SelectionError> {
        if !self.catalog.contains_category(&category) {
            return Err(SelectionError::UnknownCategory(category.to_string()));
        }
        self.active_category = category;
        Ok(())
    }

    /// Products visible under the active filter, in catalog order
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.active_category)
    }

    /// Open the detail overlay for `id`.
    ///
    /// Opening a different product starts from a fresh `DetailState`;
    /// re-opening the product already shown keeps its state.
    pub fn open_product(&mut self, id: ProductId) -> Result<&Product, SelectionError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(SelectionError::UnknownProduct(id))?;

        if self.open.as_ref().map(DetailState::product) != Some(id) {
            self.open = Some(DetailState::new(product));
        }
        Ok(product)
    }

    pub fn close_product(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The open product and its detail state
    pub fn opened(&self) -> Option<(&Product, &DetailState)> {
        let detail = self.open.as_ref()?;
        let product = self.catalog.get(detail.product())?;
        Some((product, detail))
    }

    pub fn detail_mut(&mut self) -> Result<&mut DetailState, SelectionError> {
        self.open.as_mut().ok_or(SelectionError::NoProductOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::product;
    use crate::state::data::Size;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn builtin() -> Selection {
        Selection::new(Catalog::builtin().unwrap())
    }

    fn id(n: u32) -> ProductId {
        ProductId::new(n).unwrap()
    }

    fn ids(selection: &Selection) -> Vec<u32> {
        selection
            .filtered_products()
            .iter()
            .map(|p| p.id.get())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let selection = builtin();

        assert!(selection.active_category().is_all());
        assert!(!selection.is_open());
        assert!(selection.opened().is_none());
        assert_eq!(ids(&selection), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_running_filter_end_to_end() {
        let mut selection = builtin();

        selection.set_category(Category::new("러닝")).unwrap();
        assert_eq!(ids(&selection), vec![1, 2]);

        selection.set_category(Category::all()).unwrap();
        assert_eq!(selection.filtered_products().len(), 6);
    }

    #[test]
    fn test_unknown_category_keeps_previous_filter() {
        let mut selection = builtin();
        selection.set_category(Category::new("키즈")).unwrap();

        let err = selection.set_category(Category::new("수영")).unwrap_err();

        assert_eq!(err, SelectionError::UnknownCategory("수영".into()));
        assert_eq!(selection.active_category(), &Category::new("키즈"));
        assert_eq!(ids(&selection), vec![5]);
    }

    #[test]
    fn test_open_then_close_returns_to_closed() {
        let mut selection = builtin();

        let name = selection.open_product(id(3)).unwrap().name.clone();
        assert_eq!(name, "Compro Compression Quarter");
        assert!(selection.is_open());

        selection.close_product();
        assert!(!selection.is_open());
        assert!(selection.opened().is_none());
        assert_eq!(selection.detail_mut().unwrap_err(), SelectionError::NoProductOpen);
    }

    #[test]
    fn test_open_unknown_product_is_rejected() {
        let mut selection = builtin();
        selection.open_product(id(2)).unwrap();

        let err = selection.open_product(id(42)).unwrap_err();

        assert_eq!(err, SelectionError::UnknownProduct(id(42)));
        assert_eq!(selection.opened().map(|(p, _)| p.id), Some(id(2)));
    }

    #[test]
    fn test_switching_products_resets_detail_state() {
        let mut selection = builtin();
        selection.open_product(id(1)).unwrap();
        {
            let detail = selection.detail_mut().unwrap();
            detail.select_size(Size::M);
            detail.increment();
            detail.increment();
            detail.select_image(2).unwrap();
            assert_eq!(detail.quantity(), 3);
        }

        selection.open_product(id(2)).unwrap();
        let (product, detail) = selection.opened().unwrap();

        assert_eq!(product.id, id(2));
        assert_eq!(detail.selected_size(), None);
        assert_eq!(detail.quantity(), 1);
        assert_eq!(detail.current_image(), 0);
    }

    #[test]
    fn test_reopening_same_product_keeps_detail_state() {
        let mut selection = builtin();
        selection.open_product(id(1)).unwrap();
        selection.detail_mut().unwrap().select_size(Size::L);

        selection.open_product(id(1)).unwrap();

        let (_, detail) = selection.opened().unwrap();
        assert_eq!(detail.selected_size(), Some(Size::L));
    }

    #[test]
    fn test_close_then_reopen_is_fresh() {
        let mut selection = builtin();
        selection.open_product(id(4)).unwrap();
        selection.detail_mut().unwrap().increment();

        selection.close_product();
        selection.open_product(id(4)).unwrap();

        assert_eq!(selection.opened().unwrap().1.quantity(), 1);
    }

    #[test]
    fn test_filter_does_not_touch_overlay() {
        let mut selection = builtin();
        selection.open_product(id(6)).unwrap();

        selection.set_category(Category::new("러닝")).unwrap();

        assert_eq!(selection.opened().map(|(p, _)| p.id), Some(id(6)));
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D"]), 1..40).prop_map(
            |labels| {
                labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| product(i as u32 + 1, label))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subset(products in arb_products()) {
            let mut selection = Selection::new(Catalog::from_products(products.clone()).unwrap());
            let categories = selection.catalog().list_categories().to_vec();

            for category in categories.iter().filter(|c| !c.is_all()) {
                selection.set_category(category.clone()).unwrap();
                let expected: Vec<&Product> =
                    products.iter().filter(|p| p.category == *category).collect();
                prop_assert_eq!(selection.filtered_products(), expected);
            }
        }

        #[test]
        fn prop_sentinel_shows_everything(products in arb_products(), pick in 0usize..5) {
            let mut selection = Selection::new(Catalog::from_products(products.clone()).unwrap());
            let categories = selection.catalog().list_categories().to_vec();
            let _ = selection.set_category(categories[pick % categories.len()].clone());

            selection.set_category(Category::all()).unwrap();

            let all: Vec<&Product> = products.iter().collect();
            prop_assert_eq!(selection.filtered_products(), all);
        }
    }
}

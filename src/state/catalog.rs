use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::data::{Category, Product, ProductId};
use crate::error::CatalogError;

/// Catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// On-disk shape of a catalog document
#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// The Catalog holds the static product list and the derived category list.
///
/// It is validated once on construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Load the catalog shipped with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog document from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_products(file.products)
    }

    /// Validate products and derive the category list.
    ///
    /// Categories are the sentinel first, then each distinct product
    /// category in first-seen order.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_ids = HashSet::new();
        let mut categories = vec![Category::all()];

        for product in &products {
            if !seen_ids.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.styles == 0 {
                return Err(CatalogError::NoStyles(product.id));
            }
            if product.images.as_ref().is_some_and(Vec::is_empty) {
                return Err(CatalogError::EmptyGallery(product.id));
            }
            if product.category.is_all() {
                return Err(CatalogError::ReservedCategory {
                    id: product.id,
                    category: product.category.to_string(),
                });
            }
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        Ok(Catalog {
            products,
            categories,
        })
    }

    /// All products in configuration order
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// The sentinel followed by every known category
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Products matching `category`, in catalog order.
    ///
    /// The sentinel matches everything.
    pub fn filter(&self, category: &Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_all() || p.category == *category)
            .collect()
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::state::data::ProductId;

/// Top-level application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The catalog could not be loaded or failed validation
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The windowing/rendering runtime failed
    #[error("ui error: {0}")]
    Ui(#[from] iced::Error),
}

/// Errors raised while loading or validating the product catalog.
///
/// These only occur at startup; once a `Catalog` exists it is well-formed.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no products")]
    Empty,

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    #[error("product {0} must have at least one style")]
    NoStyles(ProductId),

    #[error("product {0} lists an empty image gallery")]
    EmptyGallery(ProductId),

    #[error("product {id} uses the reserved category \"{category}\"")]
    ReservedCategory { id: ProductId, category: String },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Rejected state transitions.
///
/// Every operation returning one of these leaves the state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    #[error("no product is open")]
    NoProductOpen,

    #[error("image index {index} out of range (gallery has {len})")]
    ImageIndexOutOfRange { index: usize, len: usize },

    #[error("no size selected")]
    SizeNotSelected,
}

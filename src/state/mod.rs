/// State management module
///
/// This module handles all storefront state, including:
/// - Shared data structures (data.rs)
/// - The static product catalog (catalog.rs)
/// - Category filter and open-product selection (selection.rs)
/// - Per-product detail overlay state (detail.rs)

pub mod catalog;
pub mod data;
pub mod detail;
pub mod selection;

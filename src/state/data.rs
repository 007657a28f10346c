/// Shared data structures for the storefront
///
/// These structs represent the data model that flows between
/// the catalog configuration and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Label of the filter sentinel meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "전체";

/// Gallery length used when a product does not list its own images
const FALLBACK_GALLERY_LEN: usize = 3;

const FALLBACK_DESCRIPTION: &str = "Compro의 프리미엄 러닝 양말로 최고의 성능과 편안함을 경험하세요. \
혁신적인 기술과 뛰어난 소재로 제작된 이 양말은 모든 러닝 활동에 완벽한 선택입니다.";

const FALLBACK_FEATURES: [&str; 5] = [
    "뛰어난 통기성과 수분 흡수",
    "압축 기술로 혈액 순환 개선",
    "내구성이 뛰어난 소재",
    "발가락 부분 강화 처리",
    "미끄럼 방지 기능",
];

/// Unique, positive product identifier
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Returns `None` for zero
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A category label, or the "All" sentinel
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The filter sentinel
    pub fn all() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sock sizes offered for every product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// All sizes in display order
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    pub fn label(self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "2XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single product in the catalog
///
/// Products are created once when the catalog loads and are never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Number of style variants
    pub styles: u32,
    /// Price in won
    pub price: u32,
    /// Primary image URI (shown on the card)
    pub image: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Detail gallery; non-empty when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Product {
    /// Images shown in the detail gallery.
    ///
    /// Falls back to the primary image repeated three times.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.images {
            Some(images) => images.iter().map(String::as_str).collect(),
            None => vec![self.image.as_str(); FALLBACK_GALLERY_LEN],
        }
    }

    pub fn gallery_len(&self) -> usize {
        self.images
            .as_ref()
            .map_or(FALLBACK_GALLERY_LEN, Vec::len)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION)
    }

    pub fn features_or_default(&self) -> Vec<&str> {
        match &self.features {
            Some(features) => features.iter().map(String::as_str).collect(),
            None => FALLBACK_FEATURES.to_vec(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal product for tests
    pub fn product(id: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: format!("Product {}", id),
            styles: 1,
            price: 10_000,
            image: format!("https://example.com/{}.jpg", id),
            category: Category::new(category),
            description: None,
            features: None,
            images: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_gallery_falls_back_to_primary_image() {
        let p = product(1, "러닝");
        let gallery = p.gallery();

        assert_eq!(gallery.len(), 3);
        assert!(gallery.iter().all(|uri| *uri == p.image));
        assert_eq!(p.gallery_len(), 3);
    }

    #[test]
    fn test_gallery_uses_listed_images() {
        let mut p = product(1, "러닝");
        p.images = Some(vec!["a.jpg".into(), "b.jpg".into()]);

        assert_eq!(p.gallery(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(p.gallery_len(), 2);
    }

    #[test]
    fn test_text_fallbacks() {
        let mut p = product(1, "러닝");
        assert_eq!(p.features_or_default().len(), 5);
        assert!(p.description_or_default().starts_with("Compro의"));

        p.description = Some("짧은 설명".into());
        p.features = Some(vec!["하나".into()]);
        assert_eq!(p.description_or_default(), "짧은 설명");
        assert_eq!(p.features_or_default(), vec!["하나"]);
    }

    #[test]
    fn test_product_id_rejects_zero() {
        assert!(ProductId::new(0).is_none());
        assert_eq!(ProductId::new(7).map(ProductId::get), Some(7));
    }

    #[test]
    fn test_category_sentinel() {
        assert!(Category::default().is_all());
        assert!(!Category::new("러닝").is_all());
    }

    #[test]
    fn test_size_labels_in_display_order() {
        let labels: Vec<&str> = Size::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["XS", "S", "M", "L", "XL", "2XL"]);
    }

    #[test]
    fn test_optional_fields_deserialize_as_none() {
        let json = r#"{"id":9,"name":"X","styles":1,"price":0,"image":"x.jpg","category":"키즈"}"#;
        let p: Product = serde_json::from_str(json).unwrap();

        assert_eq!(p.description, None);
        assert_eq!(p.features, None);
        assert_eq!(p.images, None);
    }
}

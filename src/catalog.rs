use crate::models::{CatalogItem, Category};

pub trait Catalog: Send + Sync {
    /// Every item, in display order.
    fn all(&self) -> &[CatalogItem];

    fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.all().iter().find(|item| item.id == id)
    }

    fn by_category(&self, category: Category) -> Vec<&CatalogItem> {
        self.all()
            .iter()
            .filter(|item| item.category == Some(category))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The compiled-in HabStick line-up.
    pub fn habstick() -> Self {
        Self::new(vec![
            item(
                "habstick-pro",
                "HabStick Pro",
                "The HabStick Pro is an advanced navigation aid that combines cutting-edge technology with intuitive design to help visually impaired individuals navigate with confidence.",
                5000,
                &[
                    "Advanced obstacle detection up to 10 feet away",
                    "Voice navigation with customizable settings",
                    "Emergency alert system with GPS tracking",
                    "Water-resistant design (IP67 rated)",
                    "12-hour battery life",
                    "Lightweight design (2.6 lbs)",
                ],
                "https://media.cnn.com/api/v1/images/stellar/prod/140617170019-ultracane-handle.jpg?q=w_3684,h_2832,x_0,y_0,c_fill",
                Category::Premium,
            ),
            item(
                "habstick-max",
                "HabStick Max",
                "Our most advanced model with extended range detection and enhanced features for maximum independence and safety in all environments.",
                10000,
                &[
                    "Enhanced obstacle detection up to 15 feet away",
                    "Advanced AI-powered environment recognition",
                    "Voice navigation with natural language processing",
                    "Emergency alert system with automatic fall detection",
                    "Fully waterproof design (IP68 rated)",
                    "Extended 24-hour battery life",
                    "Built-in cellular connectivity",
                ],
                "https://pub.mdpi-res.com/inventions/inventions-06-00058/article_deploy/html/images/inventions-06-00058-g008.png?1630409775",
                Category::Premium,
            ),
            item(
                "habstick-lite",
                "HabStick Lite",
                "A lighter, more affordable version of our flagship product, perfect for everyday use with essential navigation features.",
                3000,
                &[
                    "Obstacle detection up to 6 feet away",
                    "Basic voice feedback",
                    "Water-resistant design (IP65 rated)",
                    "8-hour battery life",
                    "Ultra-lightweight design (1.8 lbs)",
                ],
                "https://v6co.com/assests/Images/products2/medical-grade.png",
                Category::Standard,
            ),
            item(
                "habstick-mini",
                "HabStick Mini",
                "Our most compact model, designed for quick trips and urban environments where portability is key.",
                1500,
                &[
                    "Compact design for easy storage and travel",
                    "Obstacle detection up to 4 feet away",
                    "Simple haptic feedback system",
                    "6-hour battery life",
                    "Ultra-compact design (1.2 lbs)",
                    "Fast 30-minute quick charging",
                ],
                "https://mir-s3-cdn-cf.behance.net/project_modules/fs/e52d4080227907.5cdb2f93276b7.jpg",
                Category::Standard,
            ),
        ])
    }
}

impl Catalog for StaticCatalog {
    fn all(&self) -> &[CatalogItem] {
        &self.items
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    features: &[&str],
    image_url: &str,
    category: Category,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        features: features.iter().map(|f| f.to_string()).collect(),
        image_url: image_url.to_string(),
        category: Some(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habstick_catalog_prices_and_order() {
        let catalog = StaticCatalog::habstick();
        let summary: Vec<(&str, i64)> = catalog
            .all()
            .iter()
            .map(|i| (i.id.as_str(), i.price))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("habstick-pro", 5000),
                ("habstick-max", 10000),
                ("habstick-lite", 3000),
                ("habstick-mini", 1500),
            ]
        );
    }

    #[test]
    fn find_and_filter() {
        let catalog = StaticCatalog::habstick();
        assert_eq!(catalog.find("habstick-lite").map(|i| i.price), Some(3000));
        assert!(catalog.find("habstick-ultra").is_none());

        let premium: Vec<&str> = catalog
            .by_category(Category::Premium)
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(premium, vec!["habstick-pro", "habstick-max"]);
    }
}

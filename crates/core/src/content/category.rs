//! Product and gallery category enums.

use serde::{Deserialize, Serialize};

/// Stone categories in the product catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Marble (Italian, Indian, ...).
    Marble,
    /// Granite.
    Granite,
    /// Engineered quartz.
    Quartz,
    /// Onyx.
    Onyx,
    /// Anything else.
    Other,
}

impl ProductCategory {
    /// Returns the storage representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Marble => "Marble",
            Self::Granite => "Granite",
            Self::Quartz => "Quartz",
            Self::Onyx => "Onyx",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project categories for the installation gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryCategory {
    /// Floor installations.
    Flooring,
    /// Kitchen and vanity countertops.
    Countertops,
    /// Bathroom surfaces.
    Bathrooms,
    /// Feature and cladding walls.
    #[serde(rename = "Wall Cladding")]
    WallCladding,
    /// Commercial projects.
    Commercial,
    /// Residential projects.
    Residential,
    /// Anything else.
    Other,
}

impl GalleryCategory {
    /// Returns the storage representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flooring => "Flooring",
            Self::Countertops => "Countertops",
            Self::Bathrooms => "Bathrooms",
            Self::WallCladding => "Wall Cladding",
            Self::Commercial => "Commercial",
            Self::Residential => "Residential",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_category_serde() {
        let cat: ProductCategory = serde_json::from_str("\"Marble\"").unwrap();
        assert_eq!(cat, ProductCategory::Marble);
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"Marble\"");
    }

    #[test]
    fn test_unknown_product_category_rejected() {
        let result: Result<ProductCategory, _> = serde_json::from_str("\"Limestone\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_wall_cladding_spelling() {
        let cat: GalleryCategory = serde_json::from_str("\"Wall Cladding\"").unwrap();
        assert_eq!(cat, GalleryCategory::WallCladding);
        assert_eq!(cat.as_str(), "Wall Cladding");
    }
}

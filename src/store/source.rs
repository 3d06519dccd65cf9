//! Item sources feeding the catalog store

use crate::core::product::CatalogSnapshot;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// A fixed, ordered source of catalog data.
///
/// The store treats a fetched snapshot as read-only. Sources may fail
/// (missing file, malformed document); the store maps any failure to
/// [`StoreError::Load`](crate::core::error::StoreError::Load) and keeps an
/// empty catalog until the caller retries.
pub trait ItemSource {
    /// Fetch the full snapshot.
    fn fetch(&self) -> Result<CatalogSnapshot>;
}

/// An in-memory snapshot used directly as a source.
impl ItemSource for CatalogSnapshot {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        Ok(self.clone())
    }
}

/// YAML-backed item source.
///
/// The document holds `categories` and `products` lists in the catalog's
/// camelCase wire shape.
pub struct YamlSource {
    kind: YamlKind,
}

enum YamlKind {
    Inline(String),
    File(PathBuf),
}

impl YamlSource {
    /// Source backed by an inline YAML string.
    pub fn from_str(yaml: impl Into<String>) -> Self {
        Self {
            kind: YamlKind::Inline(yaml.into()),
        }
    }

    /// Source backed by a YAML file, read at fetch time.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: YamlKind::File(path.into()),
        }
    }
}

impl ItemSource for YamlSource {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        let content = match &self.kind {
            YamlKind::Inline(yaml) => yaml.clone(),
            YamlKind::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?,
        };
        let snapshot: CatalogSnapshot =
            serde_yaml::from_str(&content).context("parsing catalog YAML")?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_YAML: &str = r#"
categories:
  - id: "1"
    name: Electronics
    slug: electronics
products:
  - id: "1"
    name: Widget
    description: A widget
    price: 9.5
    categoryId: "1"
    brand: Acme
    rating: 4.2
    reviewCount: 7
    inStock: true
    stockQuantity: 3
    imageUrl: ""
    tags: [new]
    features: []
    createdAt: 2024-01-15T00:00:00Z
    updatedAt: 2024-01-15T00:00:00Z
"#;

    #[test]
    fn test_inline_yaml_source_fetches() {
        let snapshot = YamlSource::from_str(CATALOG_YAML).fetch().unwrap();
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].brand, "Acme");
        assert!(snapshot.products[0].stock_consistent());
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let source = YamlSource::from_str("products: {not: [a, list}");
        assert!(source.fetch().is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let source = YamlSource::from_file("/nonexistent/catalog.yaml");
        let err = source.fetch().unwrap_err();
        assert!(err.to_string().contains("catalog file"));
    }

    #[test]
    fn test_file_source_fetches() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_YAML.as_bytes()).unwrap();
        let snapshot = YamlSource::from_file(file.path()).fetch().unwrap();
        assert_eq!(snapshot.products.len(), 1);
    }

    #[test]
    fn test_snapshot_is_its_own_source() {
        let snapshot = YamlSource::from_str(CATALOG_YAML).fetch().unwrap();
        let again = snapshot.fetch().unwrap();
        assert_eq!(again.products, snapshot.products);
    }
}

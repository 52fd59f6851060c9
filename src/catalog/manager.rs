use crate::models::Product;

/// In-memory product catalog for one vendor.
///
/// Keeps vendor order but deduplicates by product id (last occurrence
/// wins, matching how repeated search pages overwrite earlier rows).
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        let mut deduped: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if let Some(existing) = deduped.iter_mut().find(|p| p.id == product.id) {
                *existing = product;
            } else {
                deduped.push(product);
            }
        }
        Self { products: deduped }
    }

    /// Consume the catalog, yielding its deduplicated products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, vendor order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products currently available for sale.
    pub fn available(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.available).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

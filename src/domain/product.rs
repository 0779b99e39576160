// src/domain/product.rs
//! Products offered by the bakery.
//!
//! Identity is the pair `(name, price)`; there is no surrogate key taking part
//! in comparisons. Values are immutable once built, so a `Product` stored in a
//! `HashSet` keeps its hash for as long as it lives there.

use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

pub const MAX_PRICE: i32 = 100_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(required, length(min = 1, max = 255))]
    name: Option<String>,
    /// Price in minor currency units.
    #[validate(required, range(min = 0, max = MAX_PRICE))]
    price: Option<i32>,
}

impl Product {
    /// Fields compared by `==` and fed to `Hash`, in that order.
    pub const IDENTITY_FIELDS: &'static [&'static str] = &["name", "price"];

    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Start a builder from this value, e.g. to derive a renamed copy.
    pub fn to_builder(&self) -> ProductBuilder {
        ProductBuilder {
            name: self.name.clone(),
            price: self.price,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> Option<i32> {
        self.price
    }

    /// Check the persistence constraints (required fields, lengths, price range).
    pub fn ensure_valid(&self) -> DomainResult<()> {
        Validate::validate(self)?;
        Ok(())
    }

    fn identity_key(&self) -> (Option<&str>, Option<i32>) {
        (self.name.as_deref(), self.price)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    price: Option<i32>,
}

impl ProductBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Product {
        Product {
            name: self.name,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    fn hash_of(product: &Product) -> u64 {
        let mut hasher = DefaultHasher::new();
        product.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_follows_name() {
        let first = Product::builder().name("name").price(123).build();
        let second = Product::builder().name("anothername").price(123).build();
        assert_ne!(first, second);

        let second = second.to_builder().name("name").build();
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn equality_follows_price() {
        let cheap = Product::builder().name("Strawberry Bun").price(150).build();
        let dear = Product::builder().name("Strawberry Bun").price(151).build();
        assert_ne!(cheap, dear);
    }

    #[test]
    fn absent_fields_only_equal_absent_fields() {
        let unnamed = Product::builder().price(10).build();
        let named = Product::builder().name("").price(10).build();
        assert_ne!(unnamed, named);
        assert_eq!(unnamed, Product::builder().price(10).build());
        assert_eq!(Product::default(), Product::builder().build());
    }

    #[test]
    fn equal_products_collapse_in_a_set() {
        let set: HashSet<Product> = [
            Product::builder().name("Vanilla Cracker").price(250).build(),
            Product::builder().name("Vanilla Cracker").price(250).build(),
            Product::builder().name("Vanilla Cracker").price(300).build(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deserializes_from_json() {
        let product: Product = serde_json::from_str(r#"{ "name": "Bread", "price": 450 }"#).unwrap();
        assert_eq!(product, Product::builder().name("Bread").price(450).build());

        let partial: Product = serde_json::from_str(r#"{ "name": "Bread" }"#).unwrap();
        assert_eq!(partial.price(), None);
    }

    #[test]
    fn ensure_valid_accepts_complete_product() {
        let product = Product::builder().name("Bread").price(MAX_PRICE).build();
        assert!(product.ensure_valid().is_ok());
    }

    #[test]
    fn ensure_valid_rejects_missing_and_out_of_range_fields() {
        let err = Product::builder().price(-1).build().ensure_valid().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name"), "{message}");
        assert!(message.contains("price"), "{message}");

        let too_dear = Product::builder().name("Bread").price(MAX_PRICE + 1).build();
        let message = too_dear.ensure_valid().unwrap_err().to_string();
        assert!(message.contains("price"), "{message}");

        let long_name = "x".repeat(256);
        assert!(
            Product::builder()
                .name(long_name)
                .price(1)
                .build()
                .ensure_valid()
                .is_err()
        );
    }
}

//! Catalog generation: categories, products and vendors.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use rand::Rng;

use super::{ParentIds, capitalize, price_in};

/// Generated category ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub name: String,
    pub description: String,
}

/// Generated product ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub name: String,
    pub brand: String,
    pub quantity: i32,
    pub price: f64,
    pub category_id: i32,
}

/// Generated vendor ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedVendor {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
}

/// Draws per name before falling back to a numeric suffix.
const UNIQUE_NAME_ATTEMPTS: usize = 50;

/// Generates catalog rows.
#[derive(Debug, Default)]
pub struct CatalogGenerator;

impl CatalogGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` categories with names unique within the batch.
    ///
    /// The lorem vocabulary is finite, so once it is exhausted names get a
    /// numeric suffix instead of looping forever.
    pub fn categories(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedCategory> {
        let mut seen = HashSet::with_capacity(count);
        let mut categories = Vec::with_capacity(count);

        for idx in 0..count {
            let name = unique_word(&seen, idx, rng);
            seen.insert(name.clone());
            categories.push(GeneratedCategory {
                name,
                description: Sentence(4..10).fake_with_rng(rng),
            });
        }

        categories
    }

    /// Generates a single product in one of the given categories.
    pub fn product(&self, categories: &ParentIds, rng: &mut impl Rng) -> GeneratedProduct {
        GeneratedProduct {
            name: capitalize(&Word().fake_with_rng::<String, _>(rng)),
            brand: CompanyName().fake_with_rng(rng),
            quantity: rng.gen_range(1..=100),
            price: price_in(10.0, 500.0, rng),
            category_id: categories.pick(rng),
        }
    }

    pub fn products(
        &self,
        count: usize,
        categories: &ParentIds,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProduct> {
        (0..count).map(|_| self.product(categories, rng)).collect()
    }

    /// Generates a single vendor supplying one of the given categories.
    pub fn vendor(&self, categories: &ParentIds, rng: &mut impl Rng) -> GeneratedVendor {
        GeneratedVendor {
            name: CompanyName().fake_with_rng(rng),
            price: price_in(50.0, 1000.0, rng),
            category_id: categories.pick(rng),
        }
    }

    pub fn vendors(
        &self,
        count: usize,
        categories: &ParentIds,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedVendor> {
        (0..count).map(|_| self.vendor(categories, rng)).collect()
    }
}

/// Draws capitalized words until one is not in `seen`.
fn unique_word(seen: &HashSet<String>, idx: usize, rng: &mut impl Rng) -> String {
    for _ in 0..UNIQUE_NAME_ATTEMPTS {
        let candidate = capitalize(&Word().fake_with_rng::<String, _>(rng));
        if !seen.contains(&candidate) {
            return candidate;
        }
    }

    let base = capitalize(&Word().fake_with_rng::<String, _>(rng));
    format!("{base} {}", idx + 1)
}

//! Entity generators for the retail schema.
//!
//! This module provides generators for creating synthetic rows:
//! - [`CatalogGenerator`]: categories, products and vendors
//! - [`CustomerGenerator`]: customers with addresses and payment tokens
//! - [`OrderGenerator`]: orders and order items
//! - [`ReviewGenerator`]: free-text product reviews
//!
//! Generators never touch the database. Foreign keys are sampled from
//! [`ParentIds`] fetched by the seeder beforehand.

pub mod catalog;
pub mod customer;
pub mod order;
pub mod review;

pub use catalog::{CatalogGenerator, GeneratedCategory, GeneratedProduct, GeneratedVendor};
pub use customer::{CustomerGenerator, GeneratedCustomer};
pub use order::{GeneratedOrder, GeneratedOrderItem, OrderGenerator};
pub use review::{GeneratedReview, ReviewGenerator};

use rand::Rng;

use crate::models::Table;

/// Primary keys of a parent table, guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct ParentIds {
    table: Table,
    ids: Vec<i32>,
}

impl ParentIds {
    /// Returns `None` when `ids` is empty, since nothing could reference it.
    pub fn new(table: Table, ids: Vec<i32>) -> Option<Self> {
        if ids.is_empty() {
            None
        } else {
            Some(Self { table, ids })
        }
    }

    /// Picks an id uniformly at random.
    pub fn pick(&self, rng: &mut impl Rng) -> i32 {
        self.ids[rng.gen_range(0..self.ids.len())]
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }
}

/// Samples uniformly from `[min, max]` and rounds to cents.
pub(crate) fn price_in(min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    round_cents(rng.gen_range(min..=max))
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) fn has_cents_precision(value: f64) -> bool {
    (round_cents(value) - value).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_empty_parent_ids() {
        assert!(ParentIds::new(Table::Category, Vec::new()).is_none());
    }

    #[test]
    fn test_pick_stays_in_set() {
        let ids = ParentIds::new(Table::Customer, vec![3, 7, 11]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(ids.contains(ids.pick(&mut rng)));
        }
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.345_6), 12.35);
        assert_eq!(round_cents(10.0), 10.0);
        assert!(has_cents_precision(round_cents(499.999)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sapiente"), "Sapiente");
        assert_eq!(capitalize(""), "");
    }
}

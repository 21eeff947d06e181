//! Review generation.
//!
//! Reviews only reference customers and products loosely: the customer id is
//! a number in a fixed range and the product is named by free text, so
//! neither is sampled from the database.

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use rand::Rng;

use super::capitalize;

/// Generated review ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedReview {
    pub description: String,
    pub time_spent: String,
    pub customer_id: i32,
    pub product_name: String,
}

/// Generates review rows.
#[derive(Debug, Default)]
pub struct ReviewGenerator;

impl ReviewGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single review.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedReview {
        let minutes: u32 = rng.gen_range(1..=10);

        GeneratedReview {
            description: Sentence(4..10).fake_with_rng(rng),
            time_spent: format!("{minutes} minutes"),
            customer_id: rng.gen_range(1..=2000),
            product_name: capitalize(&Word().fake_with_rng::<String, _>(rng)),
        }
    }

    /// Generates multiple reviews.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedReview> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

//! Database integration for seeding the retail schema.
//!
//! The [`Seeder`] owns the run's single connection and writes generated rows
//! with batched, transactional inserts.

mod row;
mod seeder;

pub use row::InsertRow;
pub use seeder::{SeedError, Seeder};

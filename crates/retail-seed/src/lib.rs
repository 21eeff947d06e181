//! Synthetic data seeding for the retail store schema.
//!
//! This crate fills categories, products, vendors, customers, orders, order
//! items and reviews with fake data, parents before children, using one
//! batched transactional insert per table.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use retail_seed::prelude::*;
//!
//! let config = SeedConfig::load()?;
//! let mut seeder = Seeder::connect(&config.database).await?;
//! let report = Pipeline::from_config(&config)
//!     .run(&mut seeder, &mut rng)
//!     .await;
//! seeder.close().await?;
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{Pipeline, PipelineReport, StepReport};
    pub use crate::config::{DatabaseConfig, FailurePolicy, SeedConfig, TableCounts};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        CatalogGenerator, CustomerGenerator, OrderGenerator, ParentIds, ReviewGenerator,
    };
    pub use crate::models::{CustomerStatus, Table};
}

//! Database seeding utilities.

use rand::Rng;
use sqlx::{Connection, PgConnection, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::row::{InsertRow, insert_prefix, rows_per_statement};
use crate::config::DatabaseConfig;
use crate::generators::{
    CatalogGenerator, CustomerGenerator, OrderGenerator, ParentIds, ReviewGenerator,
};
use crate::models::Table;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("No rows in parent table {0}")]
    EmptyParent(Table),
}

/// Database seeder holding the single connection used for a whole run.
pub struct Seeder {
    conn: PgConnection,
    batch_size: usize,
}

impl Seeder {
    /// Opens a connection to the configured database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SeedError> {
        let options = config.connect_options().map_err(SeedError::Connect)?;
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(SeedError::Connect)?;

        info!("Database connection successful");
        Ok(Self::from_connection(conn))
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: PgConnection) -> Self {
        Self {
            conn,
            batch_size: 5000,
        }
    }

    /// Sets the maximum number of rows per INSERT statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Seeds `count` rows into `table`, returning the number inserted.
    pub async fn seed(
        &mut self,
        table: Table,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        match table {
            Table::Category => self.seed_categories(count, rng).await,
            Table::Product => self.seed_products(count, rng).await,
            Table::Vendor => self.seed_vendors(count, rng).await,
            Table::Customer => self.seed_customers(count, rng).await,
            Table::Order => self.seed_orders(count, rng).await,
            Table::OrderItem => self.seed_order_items(count, rng).await,
            Table::Review => self.seed_reviews(count, rng).await,
        }
    }

    /// Seeds categories. Names already present are skipped, so the returned
    /// count can be lower than `count`.
    pub async fn seed_categories(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let categories = CatalogGenerator::new().categories(count, rng);
        self.bulk_insert(&categories).await
    }

    /// Seeds products, each in an existing category.
    pub async fn seed_products(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let categories = self.fetch_ids(Table::Category).await?;
        let products = CatalogGenerator::new().products(count, &categories, rng);
        self.bulk_insert(&products).await
    }

    /// Seeds vendors, each supplying an existing category.
    pub async fn seed_vendors(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let categories = self.fetch_ids(Table::Category).await?;
        let vendors = CatalogGenerator::new().vendors(count, &categories, rng);
        self.bulk_insert(&vendors).await
    }

    pub async fn seed_customers(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let customers = CustomerGenerator::new().generate_batch(count, rng);
        self.bulk_insert(&customers).await
    }

    /// Seeds orders placed by existing customers.
    pub async fn seed_orders(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let customers = self.fetch_ids(Table::Customer).await?;
        let orders = OrderGenerator::new().orders(count, &customers, rng);
        self.bulk_insert(&orders).await
    }

    /// Seeds order items linking existing orders and products.
    pub async fn seed_order_items(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let orders = self.fetch_ids(Table::Order).await?;
        let products = self.fetch_ids(Table::Product).await?;
        let items = OrderGenerator::new().items(count, &orders, &products, rng);
        self.bulk_insert(&items).await
    }

    pub async fn seed_reviews(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<u64, SeedError> {
        let reviews = ReviewGenerator::new().generate_batch(count, rng);
        self.bulk_insert(&reviews).await
    }

    /// Loads every primary key of `table`.
    ///
    /// Fails with [`SeedError::EmptyParent`] when the table has no rows, since
    /// nothing could reference it.
    pub async fn fetch_ids(&mut self, table: Table) -> Result<ParentIds, SeedError> {
        let sql = format!("SELECT {} FROM {}", table.id_column(), table.name());
        let ids: Vec<i32> = sqlx::query_scalar(&sql).fetch_all(&mut self.conn).await?;

        debug!("Loaded {} ids from {}", ids.len(), table);
        ParentIds::new(table, ids).ok_or(SeedError::EmptyParent(table))
    }

    /// Writes `rows` in one transaction using multi-row INSERT statements.
    ///
    /// Either every row is committed or, on any failure, the transaction is
    /// rolled back and the error returned.
    pub async fn bulk_insert<R: InsertRow>(&mut self, rows: &[R]) -> Result<u64, SeedError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let chunk_size = rows_per_statement::<R>(self.batch_size);
        let mut tx = self.conn.begin().await?;

        match insert_chunks(&mut tx, rows, chunk_size).await {
            Ok(inserted) => {
                tx.commit().await?;
                Ok(inserted)
            }
            Err(e) => {
                warn!("Bulk insert into {} failed, rolling back: {}", R::TABLE, e);
                tx.rollback().await?;
                Err(e.into())
            }
        }
    }

    /// Gracefully closes the connection.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.close().await?;
        info!("Database connection closed");
        Ok(())
    }

    /// Returns the underlying connection for advanced usage.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

async fn insert_chunks<R: InsertRow>(
    conn: &mut PgConnection,
    rows: &[R],
    chunk_size: usize,
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in rows.chunks(chunk_size) {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(insert_prefix::<R>());
        query.push_values(chunk, |mut values, row| row.push_binds(&mut values));
        if let Some(clause) = R::ON_CONFLICT {
            query.push(" ").push(clause);
        }

        let result = query.build().execute(&mut *conn).await?;
        debug!(
            "Inserted {}/{} rows into {}",
            result.rows_affected(),
            chunk.len(),
            R::TABLE
        );
        inserted += result.rows_affected();
    }

    Ok(inserted)
}

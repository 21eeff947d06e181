//! Order and order item generation.

use rand::Rng;
use time::{Date, Duration, OffsetDateTime};

use super::{ParentIds, price_in};

/// Generated order ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOrder {
    pub date: Date,
    pub total_amount: f64,
    pub status: bool,
    pub customer_id: i32,
}

/// Generated order line ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

/// Generates orders and their line items.
#[derive(Debug)]
pub struct OrderGenerator {
    /// Latest possible order date. Dates are drawn from the Unix epoch up to here.
    latest: Date,
}

impl OrderGenerator {
    /// Creates a generator whose dates end today (UTC).
    pub fn new() -> Self {
        Self::until(OffsetDateTime::now_utc().date())
    }

    /// Creates a generator whose dates end at `latest`.
    pub fn until(latest: Date) -> Self {
        Self { latest }
    }

    /// Generates a single order for one of the given customers.
    pub fn order(&self, customers: &ParentIds, rng: &mut impl Rng) -> GeneratedOrder {
        GeneratedOrder {
            date: self.generate_date(rng),
            total_amount: price_in(100.0, 2000.0, rng),
            status: rng.gen_bool(0.5),
            customer_id: customers.pick(rng),
        }
    }

    pub fn orders(
        &self,
        count: usize,
        customers: &ParentIds,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOrder> {
        (0..count).map(|_| self.order(customers, rng)).collect()
    }

    /// Generates a single order line linking an order to a product.
    pub fn item(
        &self,
        orders: &ParentIds,
        products: &ParentIds,
        rng: &mut impl Rng,
    ) -> GeneratedOrderItem {
        GeneratedOrderItem {
            order_id: orders.pick(rng),
            product_id: products.pick(rng),
            quantity: rng.gen_range(1..=10),
            price: price_in(10.0, 1000.0, rng),
        }
    }

    pub fn items(
        &self,
        count: usize,
        orders: &ParentIds,
        products: &ParentIds,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOrderItem> {
        (0..count).map(|_| self.item(orders, products, rng)).collect()
    }

    fn generate_date(&self, rng: &mut impl Rng) -> Date {
        let epoch = OffsetDateTime::UNIX_EPOCH.date();
        let span = (self.latest - epoch).whole_days().max(0);
        epoch + Duration::days(rng.gen_range(0..=span))
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

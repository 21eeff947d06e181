//! Column mappings for generated rows.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

use crate::generators::{
    GeneratedCategory, GeneratedCustomer, GeneratedOrder, GeneratedOrderItem, GeneratedProduct,
    GeneratedReview, GeneratedVendor,
};
use crate::models::Table;

/// A generated row that can be written with a multi-row INSERT.
pub trait InsertRow {
    /// Target table.
    const TABLE: Table;

    /// Inserted columns, in the order [`InsertRow::push_binds`] binds them.
    const COLUMNS: &'static [&'static str];

    /// Clause appended after the VALUES list, if any.
    const ON_CONFLICT: Option<&'static str> = None;

    /// Binds this row's values, one per entry in [`InsertRow::COLUMNS`].
    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>);
}

impl InsertRow for GeneratedCategory {
    const TABLE: Table = Table::Category;
    const COLUMNS: &'static [&'static str] = &["category_name", "category_desc"];
    // Names are unique; re-seeding skips the ones already present.
    const ON_CONFLICT: Option<&'static str> = Some("ON CONFLICT DO NOTHING");

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values.push_bind(&self.name).push_bind(&self.description);
    }
}

impl InsertRow for GeneratedProduct {
    const TABLE: Table = Table::Product;
    const COLUMNS: &'static [&'static str] = &[
        "product_name",
        "product_brand",
        "product_quantity",
        "product_price",
        "product_cat_id",
    ];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(&self.name)
            .push_bind(&self.brand)
            .push_bind(self.quantity)
            .push_bind(self.price)
            .push_bind(self.category_id);
    }
}

impl InsertRow for GeneratedVendor {
    const TABLE: Table = Table::Vendor;
    // vendor_prod_id holds a category id despite its name
    const COLUMNS: &'static [&'static str] = &["vendor_name", "vendor_price", "vendor_prod_id"];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(&self.name)
            .push_bind(self.price)
            .push_bind(self.category_id);
    }
}

impl InsertRow for GeneratedCustomer {
    const TABLE: Table = Table::Customer;
    const COLUMNS: &'static [&'static str] = &[
        "cust_status",
        "cust_firstname",
        "cust_lastname",
        "cust_address",
        "cust_contact",
        "cust_payment_details",
    ];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(self.status.as_str())
            .push_bind(&self.first_name)
            .push_bind(&self.last_name)
            .push_bind(&self.address)
            .push_bind(self.contact)
            .push_bind(&self.payment_token);
    }
}

impl InsertRow for GeneratedOrder {
    const TABLE: Table = Table::Order;
    const COLUMNS: &'static [&'static str] = &[
        "order_date",
        "order_total_amount",
        "order_status",
        "order_cust_id",
    ];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(self.date)
            .push_bind(self.total_amount)
            .push_bind(self.status)
            .push_bind(self.customer_id);
    }
}

impl InsertRow for GeneratedOrderItem {
    const TABLE: Table = Table::OrderItem;
    const COLUMNS: &'static [&'static str] = &[
        "order_item_order_id",
        "order_item_product_id",
        "order_item_quantity",
        "order_item_price",
    ];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(self.order_id)
            .push_bind(self.product_id)
            .push_bind(self.quantity)
            .push_bind(self.price);
    }
}

impl InsertRow for GeneratedReview {
    const TABLE: Table = Table::Review;
    const COLUMNS: &'static [&'static str] = &[
        "review_desc",
        "review_time_spent",
        "review_customer_id",
        "review_product_name",
    ];

    fn push_binds<'a>(&'a self, values: &mut Separated<'_, 'a, Postgres, &'static str>) {
        values
            .push_bind(&self.description)
            .push_bind(&self.time_spent)
            .push_bind(self.customer_id)
            .push_bind(&self.product_name);
    }
}

/// Postgres accepts at most this many bind parameters per statement.
const MAX_BIND_PARAMS: usize = u16::MAX as usize;

/// Rows per INSERT statement for `R`, capped so the statement stays under the
/// bind parameter limit.
pub fn rows_per_statement<R: InsertRow>(batch_size: usize) -> usize {
    (MAX_BIND_PARAMS / R::COLUMNS.len()).min(batch_size).max(1)
}

/// Leading `INSERT INTO table (columns) ` fragment for `R`.
pub fn insert_prefix<R: InsertRow>() -> String {
    format!(
        "INSERT INTO {} ({}) ",
        R::TABLE.name(),
        R::COLUMNS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_prefix() {
        assert_eq!(
            insert_prefix::<GeneratedVendor>(),
            "INSERT INTO vendors (vendor_name, vendor_price, vendor_prod_id) "
        );
    }

    #[test]
    fn test_rows_per_statement_respects_bind_limit() {
        // 6 columns * 10_922 = 65_532 parameters
        assert_eq!(rows_per_statement::<GeneratedCustomer>(50_000), 10_922);
        assert_eq!(rows_per_statement::<GeneratedCustomer>(5000), 5000);
        assert_eq!(rows_per_statement::<GeneratedReview>(0), 1);
    }

    #[test]
    fn test_only_categories_skip_conflicts() {
        assert!(GeneratedCategory::ON_CONFLICT.is_some());
        assert!(GeneratedProduct::ON_CONFLICT.is_none());
        assert!(GeneratedVendor::ON_CONFLICT.is_none());
        assert!(GeneratedCustomer::ON_CONFLICT.is_none());
        assert!(GeneratedOrder::ON_CONFLICT.is_none());
        assert!(GeneratedOrderItem::ON_CONFLICT.is_none());
        assert!(GeneratedReview::ON_CONFLICT.is_none());
    }
}

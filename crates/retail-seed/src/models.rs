//! Tables of the retail schema and the enumerations stored in them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A table populated by the seeder.
///
/// Variants are declared in insertion order: every table only references
/// tables that come before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Category,
    Product,
    Vendor,
    Customer,
    Order,
    OrderItem,
    Review,
}

impl Table {
    /// All tables in dependency order (parents before children).
    pub const ALL: [Table; 7] = [
        Table::Category,
        Table::Product,
        Table::Vendor,
        Table::Customer,
        Table::Order,
        Table::OrderItem,
        Table::Review,
    ];

    /// SQL table name.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Category => "category",
            Table::Product => "products",
            Table::Vendor => "vendors",
            Table::Customer => "customer",
            Table::Order => "orders",
            Table::OrderItem => "order_items",
            Table::Review => "reviews",
        }
    }

    /// Primary key column.
    pub fn id_column(&self) -> &'static str {
        match self {
            Table::Category => "category_id",
            Table::Product => "product_id",
            Table::Vendor => "vendor_id",
            Table::Customer => "cust_id",
            Table::Order => "order_id",
            Table::OrderItem => "order_item_id",
            Table::Review => "review_id",
        }
    }

    /// Human readable plural used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Table::Category => "categories",
            Table::Product => "products",
            Table::Vendor => "vendors",
            Table::Customer => "customers",
            Table::Order => "orders",
            Table::OrderItem => "order items",
            Table::Review => "reviews",
        }
    }

    /// Tables whose primary keys this table references.
    pub fn parents(&self) -> &'static [Table] {
        match self {
            Table::Product | Table::Vendor => &[Table::Category],
            Table::Order => &[Table::Customer],
            Table::OrderItem => &[Table::Order, Table::Product],
            Table::Category | Table::Customer | Table::Review => &[],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Account status stored in `customer.cust_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }
}

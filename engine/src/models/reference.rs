//! Static reference data: sites, suppliers, products.
//!
//! Read-only inputs to quote creation. The lifecycle engine never
//! mutates these; quotes and orders snapshot the values they need
//! (site name, product name, unit cost) at creation time.

use serde::{Deserialize, Serialize};

/// A customer site that services are delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Unique site identifier
    pub id: String,

    /// Display name, denormalized onto quotes and orders
    pub name: String,

    /// Postal address
    pub address: String,

    /// Number of live services at the site
    pub services_count: u32,

    /// Primary contact name
    pub primary_contact: String,
}

/// A supplier of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique supplier identifier
    pub id: String,

    /// Company name
    pub name: String,

    /// Sales contact email
    pub contact_email: String,

    /// Contact phone number
    pub phone: String,
}

/// A product from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Supplying vendor (lookup key into the supplier list)
    pub supplier_id: String,

    /// Product name
    pub name: String,

    /// Short description
    pub description: String,

    /// Unit cost (i64 pence)
    pub unit_cost: i64,
}

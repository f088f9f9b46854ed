//! Demo seed data
//!
//! Fixtures for the CLI and integration tests. These mirror the demo
//! portal's dataset and deliberately exercise the engine's edge cases:
//! an already-approved quote with no dwell clock (converts on the first
//! tick), an inert `Draft` quote, a mid-pipeline order with no dwell
//! clock, an unrecognized `Engineer Scheduled` status, and a terminal
//! `Active` order. Seed values are taken as-is and not re-validated
//! against the creation-time invariants.

use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::models::order::{Order, OrderStatus};
use crate::models::quote::{Quote, QuoteItem, QuoteStatus};
use crate::models::reference::{Product, Site, Supplier};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Demo suppliers.
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "SUP-001".to_string(),
            name: "Cisco Systems".to_string(),
            contact_email: "sales@cisco.com".to_string(),
            phone: "0800 123 456".to_string(),
        },
        Supplier {
            id: "SUP-002".to_string(),
            name: "Yealink".to_string(),
            contact_email: "distro@yealink.com".to_string(),
            phone: "0800 999 888".to_string(),
        },
        Supplier {
            id: "SUP-003".to_string(),
            name: "Openreach".to_string(),
            contact_email: "provisioning@openreach.co.uk".to_string(),
            phone: "0800 111 222".to_string(),
        },
    ]
}

/// Demo product catalogue.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "PROD-001".to_string(),
            supplier_id: "SUP-003".to_string(),
            name: "Fibre 900 Connection".to_string(),
            description: "900Mbps downstream / 115Mbps upstream".to_string(),
            unit_cost: 4_500,
        },
        Product {
            id: "PROD-002".to_string(),
            supplier_id: "SUP-003".to_string(),
            name: "Fibre 300 Connection".to_string(),
            description: "300Mbps downstream / 48Mbps upstream".to_string(),
            unit_cost: 3_500,
        },
        Product {
            id: "PROD-003".to_string(),
            supplier_id: "SUP-001".to_string(),
            name: "Meraki MR36 AP".to_string(),
            description: "Wi-Fi 6 Access Point".to_string(),
            unit_cost: 25_000,
        },
        Product {
            id: "PROD-004".to_string(),
            supplier_id: "SUP-001".to_string(),
            name: "Meraki MX68 Gateway".to_string(),
            description: "Security & SD-WAN Appliance".to_string(),
            unit_cost: 45_000,
        },
        Product {
            id: "PROD-005".to_string(),
            supplier_id: "SUP-002".to_string(),
            name: "SIP-T54W IP Phone".to_string(),
            description: "Prime Business Phone".to_string(),
            unit_cost: 12_000,
        },
        Product {
            id: "PROD-006".to_string(),
            supplier_id: "SUP-002".to_string(),
            name: "CP960 Conference Phone".to_string(),
            description: "Optima HD IP Conference Phone".to_string(),
            unit_cost: 35_000,
        },
    ]
}

/// Demo customer sites.
pub fn sites() -> Vec<Site> {
    vec![
        Site {
            id: "SITE-LDN".to_string(),
            name: "London Main".to_string(),
            address: "1 Newgate St, London EC1A 7AJ".to_string(),
            services_count: 2,
            primary_contact: "Alice Smith".to_string(),
        },
        Site {
            id: "SITE-MAN".to_string(),
            name: "Manchester Branch".to_string(),
            address: "45 Mosley St, Manchester M2 3HZ".to_string(),
            services_count: 1,
            primary_contact: "Bob Jones".to_string(),
        },
        Site {
            id: "SITE-BIRM".to_string(),
            name: "Birmingham Hub".to_string(),
            address: "1 Colmore Row, Birmingham B3 2BJ".to_string(),
            services_count: 0,
            primary_contact: "David Miller".to_string(),
        },
        Site {
            id: "SITE-LEEDS".to_string(),
            name: "Leeds Warehouse".to_string(),
            address: "Sweet St, Leeds LS11 9AY".to_string(),
            services_count: 1,
            primary_contact: "Sarah Jenkins".to_string(),
        },
        Site {
            id: "SITE-GLASGOW".to_string(),
            name: "Glasgow Office".to_string(),
            address: "200 Renfield St, Glasgow G2 3PR".to_string(),
            services_count: 0,
            primary_contact: "Kevin Mccall".to_string(),
        },
        Site {
            id: "SITE-BRISTOL".to_string(),
            name: "Bristol Tech Park".to_string(),
            address: "Temple Way, Bristol BS2 0BU".to_string(),
            services_count: 0,
            primary_contact: "Emily White".to_string(),
        },
    ]
}

/// Demo quotes.
///
/// The approved quote has no dwell clock (it predates the simulation)
/// but still converts on the first tick: derivation keys on status, not
/// on the clock. The `Draft` quote is inert.
pub fn quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "Q-2023-001".to_string(),
            "Acme HQ".to_string(),
            "London Main".to_string(),
            date(2023, 10, 15),
            125_000,
            QuoteStatus::Approved,
            "Alice Smith".to_string(),
            vec![
                QuoteItem::new(
                    "qi-1".to_string(),
                    "PROD-001".to_string(),
                    "Fibre 900 Connection".to_string(),
                    1,
                    4_500,
                ),
                QuoteItem::new(
                    "qi-2".to_string(),
                    "PROD-004".to_string(),
                    "Meraki MX68 Gateway".to_string(),
                    2,
                    45_000,
                ),
            ],
            None,
        ),
        Quote::new(
            "Q-2023-002".to_string(),
            "Acme North".to_string(),
            "Manchester Branch".to_string(),
            date(2023, 10, 20),
            45_000,
            QuoteStatus::Other("Draft".to_string()),
            "Bob Jones".to_string(),
            vec![QuoteItem::new(
                "qi-3".to_string(),
                "PROD-005".to_string(),
                "SIP-T54W IP Phone".to_string(),
                5,
                12_000,
            )],
            None,
        ),
    ]
}

/// Demo orders. None carry a dwell clock, so none auto-advance.
pub fn orders() -> Vec<Order> {
    vec![
        Order::new(
            "ORD-8892".to_string(),
            Some("Q-2023-001".to_string()),
            OrderStatus::Processing,
            "London Main".to_string(),
            date(2023, 10, 18),
            None,
            vec!["Fibre 900".to_string(), "Static IP".to_string()],
            None,
        ),
        Order::new(
            "ORD-8899".to_string(),
            Some("Q-2023-999".to_string()),
            OrderStatus::Other("Engineer Scheduled".to_string()),
            "Leeds Warehouse".to_string(),
            date(2023, 10, 22),
            Some("2023-11-05 09:00".to_string()),
            vec!["Leased Line 1Gb".to_string()],
            None,
        ),
        Order::new(
            "ORD-9001".to_string(),
            None,
            OrderStatus::Active,
            "London Main".to_string(),
            date(2023, 9, 1),
            None,
            vec!["Cloud Voice Express".to_string()],
            None,
        ),
    ]
}

/// Demo invoices.
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice::new(
            "INV-2023-10".to_string(),
            None,
            None,
            "Oct 2023".to_string(),
            125_000,
            25_000,
            InvoiceStatus::Due,
            date(2023, 11, 1),
            "Direct Debit".to_string(),
        ),
        Invoice::new(
            "INV-2023-09".to_string(),
            None,
            None,
            "Sep 2023".to_string(),
            124_550,
            24_910,
            InvoiceStatus::Paid,
            date(2023, 10, 1),
            "Direct Debit".to_string(),
        ),
        Invoice::new(
            "INV-2023-08".to_string(),
            None,
            None,
            "Aug 2023".to_string(),
            124_550,
            24_910,
            InvoiceStatus::Overdue,
            date(2023, 9, 1),
            "Credit Card".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let quotes = quotes();
        let orders = orders();
        let invoices = invoices();

        // Building a store panics on duplicates
        crate::models::store::EntityStore::new(quotes, orders, invoices);
    }

    #[test]
    fn test_seed_invoices_satisfy_financial_identity() {
        for invoice in invoices() {
            assert_eq!(invoice.total(), invoice.amount() + invoice.tax());
        }
    }

    #[test]
    fn test_seed_products_reference_known_suppliers() {
        let suppliers = suppliers();
        for product in products() {
            assert!(
                suppliers.iter().any(|s| s.id == product.supplier_id),
                "product {} references unknown supplier",
                product.id
            );
        }
    }
}

//! # coffee-core: Order Engine for the Coffee Counter
//!
//! This crate holds the whole order-taking and billing logic of the counter:
//! free-text order parsing, the running order, loyalty and promotion
//! discounts, and fixed-width receipts. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Coffee Corner Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/counter (stdin / stdout)                   │   │
//! │  │        help ──► order line ──► done [customer] ──► close        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ order(text) / done(customer)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coffee-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌────────┐  │   │
//! │  │   │ catalog │ │  parse  │ │ discount │ │ receipt │ │  desk  │  │   │
//! │  │   │ Product │ │ "with"  │ │ loyalty  │ │ 60 cols │ │CashDesk│  │   │
//! │  │   │ Extra   │ │ extras  │ │ snack    │ │ total   │ │ state  │  │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └─────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • DETERMINISTIC                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Product/extra definitions and order lines
//! - [`catalog`] - The fixed product catalog
//! - [`parse`] - Free-text order parsing
//! - [`discount`] - Loyalty and snack promotion rules
//! - [`receipt`] - Receipt building and line formatting
//! - [`desk`] - The `CashDesk` order engine
//! - [`validation`] - Argument validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coffee_core::{CashDesk, Catalog};
//!
//! let mut desk = CashDesk::new(Catalog::reference());
//! let reply = desk.order("medium coffee with extra milk").unwrap();
//! assert_eq!(reply.to_string(), "OK :-)");
//!
//! let receipt = desk.done(None);
//! assert!(receipt.last().unwrap().starts_with("total "));
//! assert!(receipt.last().unwrap().ends_with(" 3.30 CHF"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod desk;
pub mod discount;
pub mod error;
pub mod money;
pub mod parse;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, ExtraEntry, ProductEntry};
pub use desk::{CashDesk, DeskState, OrderReply};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reserved word separating the product name from its extras.
pub const WITH_KEYWORD: &str = "with";

/// Fixed width of every receipt line, in characters.
///
/// Lines whose label and price already reach this width are not padded
/// and never truncated.
pub const RECEIPT_LINE_WIDTH: usize = 60;

/// Every `LOYALTY_INTERVAL`-th drink of a customer is free.
pub const LOYALTY_INTERVAL: u32 = 5;

/// The only product sold as a snack; everything else counts as a drink.
pub const SNACK_PRODUCT_NAME: &str = "bacon roll";

/// Currency printed after every receipt amount.
pub const CURRENCY_CODE: &str = "CHF";

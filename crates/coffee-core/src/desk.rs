//! # Cash Desk
//!
//! The order engine: owns the catalog, the running order and the loyalty
//! history, and exposes `order` / `done` to the counter.
//!
//! ## Order Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          order(text)                      order(text)                   │
//! │   ┌──────┐ accepted  ┌──────────────┐ ◄────────────┐                    │
//! │   │ Idle │ ────────► │ Accumulating │ ─────────────┘                    │
//! │   └──────┘           └──────────────┘                                   │
//! │      ▲                      │                                           │
//! │      └──────────────────────┘                                           │
//! │            done(customer): discounts, history, receipt, clear           │
//! │                                                                         │
//! │  done() while Idle returns no lines and leaves the history alone.       │
//! │  A rejected order line leaves everything unchanged.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! `CashDesk` is a plain single-threaded value. Callers sharing it wrap the
//! whole desk in one `Mutex`: `order` and `done` both read-modify-write the
//! order and the history together.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::discount::apply_discounts;
use crate::error::CoreResult;
use crate::parse::parse_order;
use crate::receipt::Receipt;
use crate::types::{ExtraDefinition, OrderLine, ProductDefinition};

// =============================================================================
// Order Reply
// =============================================================================

/// The counter's answer to one order line.
///
/// An unknown product or extra is an everyday outcome, not an error; the
/// `Display` text is what gets said back to the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderReply {
    Accepted,
    UnknownProduct { name: String },
    UnknownExtra { product: String, extra: String },
}

impl OrderReply {
    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderReply::Accepted)
    }
}

impl fmt::Display for OrderReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderReply::Accepted => write!(f, "OK :-)"),
            OrderReply::UnknownProduct { name } => {
                write!(f, "Sorry, we don't have any '{name}'")
            }
            OrderReply::UnknownExtra { product, extra } => {
                write!(f, "Sorry, cannot make {product} with '{extra}'")
            }
        }
    }
}

// =============================================================================
// Desk State
// =============================================================================

/// Observable state of the current order session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskState {
    /// No items on the current order.
    Idle,
    /// At least one item was accepted since the last `done`.
    Accumulating,
}

// =============================================================================
// Cash Desk
// =============================================================================

/// The coffee counter's till.
///
/// ## Invariants
/// - The catalog never changes after construction
/// - The current order only grows through fully accepted order lines
/// - Drink counts per customer only grow, keyed by lowercased name
#[derive(Debug, Clone)]
pub struct CashDesk {
    catalog: Catalog,
    current_order: Vec<OrderLine>,
    opened_at: Option<DateTime<Utc>>,
    drink_history: HashMap<String, u32>,
}

impl CashDesk {
    /// Creates an idle desk with an empty loyalty history.
    pub fn new(catalog: Catalog) -> Self {
        CashDesk {
            catalog,
            current_order: Vec::new(),
            opened_at: None,
            drink_history: HashMap::new(),
        }
    }

    /// Products on offer, in catalog order.
    pub fn products(&self) -> &[ProductDefinition] {
        self.catalog.products()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Items accepted since the last `done`.
    pub fn current_order(&self) -> &[OrderLine] {
        &self.current_order
    }

    /// When the first item of the current order was accepted.
    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    pub fn state(&self) -> DeskState {
        if self.current_order.is_empty() {
            DeskState::Idle
        } else {
            DeskState::Accumulating
        }
    }

    /// Drinks bought so far by a customer (0 for unknown or anonymous).
    pub fn drink_count(&self, customer: &str) -> u32 {
        customer_key(Some(customer))
            .and_then(|key| self.drink_history.get(&key).copied())
            .unwrap_or(0)
    }

    /// Adds one item to the current order.
    ///
    /// ## Flow
    /// ```text
    /// "medium coffee with extra milk"
    ///      │ parse_order
    ///      ▼
    /// catalog.find("medium coffee") ── none ──► UnknownProduct
    ///      │
    ///      ▼
    /// find_extra(each, in order) ───── none ──► UnknownExtra (nothing added)
    ///      │
    ///      ▼
    /// push OrderLine ─────────────────────────► Accepted
    /// ```
    ///
    /// ## Errors
    /// Only a blank line fails; unknown items come back as a reply.
    pub fn order(&mut self, text: &str) -> CoreResult<OrderReply> {
        let parsed = parse_order(text)?;

        let Some(definition) = self.catalog.find(&parsed.product) else {
            debug!(product = %parsed.product, "unknown product");
            return Ok(OrderReply::UnknownProduct {
                name: parsed.product,
            });
        };

        let mut extras: Vec<&ExtraDefinition> = Vec::with_capacity(parsed.extras.len());
        for requested in &parsed.extras {
            match definition.find_extra(requested) {
                Some(extra) => extras.push(extra),
                None => {
                    debug!(product = %definition.name(), extra = %requested, "unknown extra");
                    return Ok(OrderReply::UnknownExtra {
                        product: definition.name().to_string(),
                        extra: requested.clone(),
                    });
                }
            }
        }

        let line = OrderLine::from_definition(definition, &extras);
        debug!(product = %line.name, extras = line.extras.len(), "order line accepted");

        if self.current_order.is_empty() {
            self.opened_at = Some(Utc::now());
        }
        self.current_order.push(line);
        Ok(OrderReply::Accepted)
    }

    /// Finishes the current order and returns the printed receipt lines.
    ///
    /// Returns an empty vector when there is nothing to bill.
    pub fn done(&mut self, customer: Option<&str>) -> Vec<String> {
        self.close_order(customer)
            .map(|receipt| receipt.render())
            .unwrap_or_default()
    }

    /// Finishes the current order and returns the structured receipt.
    ///
    /// ## Steps
    /// 1. Apply loyalty and snack promotions to the order lines
    /// 2. Add this order's drinks to the customer's history
    /// 3. Build the receipt and clear the order
    pub fn close_order(&mut self, customer: Option<&str>) -> Option<Receipt> {
        if self.current_order.is_empty() {
            return None;
        }

        let key = customer_key(customer);
        let prior = key
            .as_ref()
            .and_then(|key| self.drink_history.get(key).copied())
            .unwrap_or(0);

        let mut lines = std::mem::take(&mut self.current_order);
        self.opened_at = None;
        let outcome = apply_discounts(&mut lines, prior);

        if let Some(key) = key.as_ref().filter(|_| outcome.drinks > 0) {
            self.drink_history.insert(key.clone(), prior.saturating_add(outcome.drinks));
        }

        let holder = customer
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let receipt = Receipt::from_order(&lines, holder);
        info!(
            customer = key.as_deref().unwrap_or("-"),
            items = lines.len(),
            free_drinks = outcome.free_drinks,
            free_extras = outcome.free_extras,
            total = %receipt.total,
            "order closed"
        );
        Some(receipt)
    }
}

/// History key for a customer; blank names are anonymous.
fn customer_key(customer: Option<&str>) -> Option<String> {
    customer
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_lowercase)
}

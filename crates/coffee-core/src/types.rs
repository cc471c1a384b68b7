//! # Domain Types
//!
//! Catalog definitions and the per-order values built from them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog side (immutable)           Order side (per order)              │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │ ProductDefinition   │ ─────────► │ OrderLine           │            │
//! │  │  name               │  copy of   │  name               │            │
//! │  │  price              │  name and  │  base_price         │            │
//! │  │  extras[]           │  price     │  extras[] (ordered) │            │
//! │  └─────────────────────┘            │  free               │            │
//! │  ┌─────────────────────┐            └─────────────────────┘            │
//! │  │ ExtraDefinition     │ ─────────► ┌─────────────────────┐            │
//! │  │  name, price        │            │ OrderedExtra        │            │
//! │  └─────────────────────┘            │  name, base_price   │            │
//! │                                     │  free               │            │
//! │                                     └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounts never touch a definition. They flip the `free` flag on the
//! order-side value, and `price()` reads zero from then on.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{names_match, validate_name, validate_price, validate_unique_names};
use crate::SNACK_PRODUCT_NAME;

// =============================================================================
// Extra Definition
// =============================================================================

/// An option that can be added to a product, e.g. "extra milk".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraDefinition {
    pub(crate) name: String,
    pub(crate) price: Money,
}

impl ExtraDefinition {
    /// Creates a validated extra definition.
    ///
    /// ## Errors
    /// Blank name or non-positive price.
    pub fn new(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_name("extra name", &name)?;
        validate_price("extra price", price)?;
        Ok(ExtraDefinition { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Product Definition
// =============================================================================

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDefinition {
    pub(crate) name: String,
    pub(crate) price: Money,
    pub(crate) extras: Vec<ExtraDefinition>,
}

impl ProductDefinition {
    /// Creates a validated product definition.
    ///
    /// ## Errors
    /// Blank name, non-positive price, or two extras with the same name.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        extras: Vec<ExtraDefinition>,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_name("product name", &name)?;
        validate_price("product price", price)?;
        validate_unique_names("extra name", extras.iter().map(ExtraDefinition::name))?;
        Ok(ProductDefinition {
            name,
            price,
            extras,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Possible extras, in catalog order.
    pub fn extras(&self) -> &[ExtraDefinition] {
        &self.extras
    }

    /// Finds a possible extra by name, ignoring case.
    pub fn find_extra(&self, name: &str) -> Option<&ExtraDefinition> {
        self.extras
            .iter()
            .find(|extra| names_match(&extra.name, name))
    }

    /// Whether this definition carries the given name, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

// =============================================================================
// Ordered Extra
// =============================================================================

/// An extra actually ordered on one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedExtra {
    pub name: String,
    pub base_price: Money,
    pub free: bool,
}

impl From<&ExtraDefinition> for OrderedExtra {
    fn from(def: &ExtraDefinition) -> Self {
        OrderedExtra {
            name: def.name.clone(),
            base_price: def.price,
            free: false,
        }
    }
}

impl OrderedExtra {
    /// Price charged for this extra.
    pub fn price(&self) -> Money {
        if self.free {
            Money::zero()
        } else {
            self.base_price
        }
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One product on the current order.
///
/// ## Price Freezing
/// Name and price are copied from the definition when the line is created.
/// The line owns its values; nothing it does reaches back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub base_price: Money,
    pub extras: Vec<OrderedExtra>,
    pub free: bool,
}

impl OrderLine {
    /// Builds an order line carrying exactly the chosen extras.
    pub fn from_definition(def: &ProductDefinition, extras: &[&ExtraDefinition]) -> Self {
        OrderLine {
            name: def.name.clone(),
            base_price: def.price,
            extras: extras.iter().map(|extra| OrderedExtra::from(*extra)).collect(),
            free: false,
        }
    }

    /// Price charged for the product itself, extras excluded.
    pub fn price(&self) -> Money {
        if self.free {
            Money::zero()
        } else {
            self.base_price
        }
    }

    /// Product price plus every extra price.
    pub fn line_total(&self) -> Money {
        self.price() + self.extras.iter().map(OrderedExtra::price).sum::<Money>()
    }

    /// Snacks are excluded from the loyalty count; every other line is a drink.
    pub fn is_snack(&self) -> bool {
        names_match(&self.name, SNACK_PRODUCT_NAME)
    }

    /// Index of the cheapest extra; the first one wins a price tie.
    pub fn cheapest_extra(&self) -> Option<usize> {
        self.extras
            .iter()
            .enumerate()
            .min_by_key(|(_, extra)| extra.base_price)
            .map(|(index, _)| index)
    }
}

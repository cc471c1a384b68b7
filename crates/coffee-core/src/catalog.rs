//! # Catalog
//!
//! The fixed, ordered list of products the counter sells.
//!
//! The catalog is handed to the engine once at construction and never
//! changes afterwards. It can be built from code, from the reference menu,
//! or from a JSON document of [`ProductEntry`] values:
//!
//! ```json
//! [
//!   { "name": "small coffee", "price_cents": 250,
//!     "extras": [{ "name": "extra milk", "price_cents": 30 }] },
//!   { "name": "bacon roll", "price_cents": 450 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{ExtraDefinition, ProductDefinition};
use crate::validation::validate_unique_names;

// =============================================================================
// Catalog Entries (wire format)
// =============================================================================

/// One extra as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraEntry {
    pub name: String,
    pub price_cents: i64,
}

/// One product as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub extras: Vec<ExtraEntry>,
}

impl ProductEntry {
    /// Validates the entry into a definition.
    pub fn into_definition(self) -> CoreResult<ProductDefinition> {
        let extras = self
            .extras
            .into_iter()
            .map(|extra| ExtraDefinition::new(extra.name, Money::from_cents(extra.price_cents)))
            .collect::<CoreResult<Vec<_>>>()?;
        ProductDefinition::new(self.name, Money::from_cents(self.price_cents), extras)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only product catalog; product names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<ProductDefinition>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate product names.
    pub fn new(products: Vec<ProductDefinition>) -> CoreResult<Self> {
        validate_unique_names("product name", products.iter().map(ProductDefinition::name))?;
        Ok(Catalog { products })
    }

    /// Builds a catalog from deserialized entries.
    pub fn from_entries(entries: Vec<ProductEntry>) -> CoreResult<Self> {
        let products = entries
            .into_iter()
            .map(ProductEntry::into_definition)
            .collect::<CoreResult<Vec<_>>>()?;
        Catalog::new(products)
    }

    /// Parses a JSON array of [`ProductEntry`].
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<ProductEntry> = serde_json::from_str(json)?;
        Catalog::from_entries(entries)
    }

    /// The house menu: three coffee sizes sharing one extra list, a bacon
    /// roll and an orange juice.
    pub fn reference() -> Self {
        let coffee_extras = || {
            vec![
                ExtraDefinition {
                    name: "extra milk".to_string(),
                    price: Money::from_cents(30),
                },
                ExtraDefinition {
                    name: "foamed milk".to_string(),
                    price: Money::from_cents(50),
                },
                ExtraDefinition {
                    name: "special roast coffee".to_string(),
                    price: Money::from_cents(90),
                },
            ]
        };
        let product = |name: &str, cents: i64, extras: Vec<ExtraDefinition>| ProductDefinition {
            name: name.to_string(),
            price: Money::from_cents(cents),
            extras,
        };

        // S/M/L coffees are separate products
        Catalog {
            products: vec![
                product("small coffee", 250, coffee_extras()),
                product("medium coffee", 300, coffee_extras()),
                product("large coffee", 350, coffee_extras()),
                product("bacon roll", 450, Vec::new()),
                product("orange juice", 395, Vec::new()),
            ],
        }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[ProductDefinition] {
        &self.products
    }

    /// Finds a product by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ProductDefinition> {
        self.products.iter().find(|product| product.is_named(name))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

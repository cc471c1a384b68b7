//! # Receipt
//!
//! Turns a closed order into fixed-width receipt lines.
//!
//! ## Line Layout
//! ```text
//! medium coffee ..................................... 3.00 CHF
//!    extra milk *free* .............................. 0.00 CHF
//! bacon roll ........................................ 4.50 CHF
//! total ............................................. 7.50 CHF
//! └──── label ────┘└──── '.' padding to 60 ────┘└─ amount ─┘
//! ```
//!
//! - Extras are indented by three spaces under their product.
//! - `*free* ` follows the label whenever the whole-unit part of the amount
//!   is 0, which also covers a plain 0.30 extra.
//! - Lines already at or past the width get no padding and are never cut.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::types::OrderLine;
use crate::{CURRENCY_CODE, RECEIPT_LINE_WIDTH};

const EXTRA_INDENT: &str = "   ";
const FREE_MARKER: &str = "*free* ";
const TOTAL_LABEL: &str = "total";

/// One printed receipt row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub label: String,
    pub amount: Money,
}

impl ReceiptLine {
    fn new(label: impl Into<String>, amount: Money) -> Self {
        ReceiptLine {
            label: label.into(),
            amount,
        }
    }

    /// Renders the row at the fixed receipt width.
    pub fn render(&self) -> String {
        format_receipt_line(&self.label, self.amount)
    }
}

/// A finalized order.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Loyalty card holder, if one was named.
    pub customer: Option<String>,
    /// Product and extra rows in entry order; the total row is not included.
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Builds the receipt for already discounted order lines.
    pub fn from_order(order: &[OrderLine], customer: Option<String>) -> Self {
        let mut lines = Vec::new();
        let mut total = Money::zero();

        for item in order {
            lines.push(ReceiptLine::new(item.name.as_str(), item.price()));
            total += item.price();

            for extra in &item.extras {
                lines.push(ReceiptLine::new(
                    format!("{EXTRA_INDENT}{}", extra.name),
                    extra.price(),
                ));
                total += extra.price();
            }
        }

        Receipt {
            customer,
            lines,
            total,
            issued_at: Utc::now(),
        }
    }

    /// All printed rows, the total row last.
    pub fn render(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(ReceiptLine::render)
            .chain(std::iter::once(format_receipt_line(TOTAL_LABEL, self.total)))
            .collect()
    }
}

/// Formats one receipt row, e.g. `"total ..... 3.00 CHF"` padded to 60.
///
/// ## Example
/// ```rust
/// use coffee_core::money::Money;
/// use coffee_core::receipt::format_receipt_line;
///
/// let line = format_receipt_line("medium coffee", Money::from_cents(300));
/// assert_eq!(line.chars().count(), 60);
/// assert!(line.starts_with("medium coffee ...."));
/// assert!(line.ends_with(". 3.00 CHF"));
/// ```
pub fn format_receipt_line(label: &str, amount: Money) -> String {
    let mut head = format!("{label} ");
    if amount.whole_units() == 0 {
        head.push_str(FREE_MARKER);
    }
    let price = format!(" {amount} {CURRENCY_CODE}");

    let used = head.chars().count() + price.chars().count();
    let padding = ".".repeat(RECEIPT_LINE_WIDTH.saturating_sub(used));

    format!("{head}{padding}{price}")
}

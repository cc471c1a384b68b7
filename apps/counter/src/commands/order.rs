//! # Order Commands
//!
//! Adds order lines and prints receipts.

use std::io::Write;

use tracing::info;

use crate::error::AppResult;
use crate::state::SharedDesk;

/// Passes an order line to the desk and prints its reply.
pub fn take_order<W: Write>(desk: &SharedDesk, text: &str, out: &mut W) -> AppResult<()> {
    let reply = desk.with_desk_mut(|desk| desk.order(text))?;
    writeln!(out, "{reply}")?;
    Ok(())
}

/// Closes the current order and prints the receipt.
///
/// ## Output
/// ```text
/// Dear hans, here's your order:
/// medium coffee ..................................... 3.00 CHF
/// total ............................................. 3.00 CHF
/// ```
pub fn finish_order<W: Write>(
    desk: &SharedDesk,
    customer: Option<&str>,
    out: &mut W,
) -> AppResult<()> {
    let receipt = desk.with_desk_mut(|desk| desk.done(customer));

    if receipt.is_empty() {
        writeln!(out, "Eeh, the current order is empty :-/")?;
        return Ok(());
    }

    info!(customer = customer.unwrap_or("-"), lines = receipt.len(), "receipt printed");

    match customer {
        Some(name) => writeln!(out, "Dear {name}, here's your order:")?,
        None => writeln!(out, "Here's your order:")?,
    }
    for line in &receipt {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::{CashDesk, Catalog};

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_take_order_prints_reply() {
        let desk = SharedDesk::new(CashDesk::new(Catalog::reference()));
        let mut out = Vec::new();

        take_order(&desk, "small coffee", &mut out).unwrap();
        take_order(&desk, "espresso", &mut out).unwrap();

        assert_eq!(
            output(out),
            "OK :-)\nSorry, we don't have any 'espresso'\n"
        );
    }

    #[test]
    fn test_finish_empty_order() {
        let desk = SharedDesk::new(CashDesk::new(Catalog::reference()));
        let mut out = Vec::new();

        finish_order(&desk, Some("hans"), &mut out).unwrap();
        assert_eq!(output(out), "Eeh, the current order is empty :-/\n");
    }

    #[test]
    fn test_finish_prints_greeting_and_receipt() {
        let desk = SharedDesk::new(CashDesk::new(Catalog::reference()));
        let mut out = Vec::new();
        take_order(&desk, "medium coffee", &mut Vec::new()).unwrap();

        finish_order(&desk, Some("hans"), &mut out).unwrap();
        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Dear hans, here's your order:");
        assert!(lines[1].starts_with("medium coffee "));
        assert!(lines[2].starts_with("total "));
        assert!(lines[2].ends_with(" 3.00 CHF"));
    }
}

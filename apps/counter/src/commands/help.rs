//! # Help Command
//!
//! Prints the recognized commands followed by the product list.

use std::io::{self, Write};

use coffee_core::{ProductDefinition, CURRENCY_CODE, WITH_KEYWORD};

/// Writes the help text for the given products.
pub fn write_help<W: Write>(out: &mut W, products: &[ProductDefinition]) -> io::Result<()> {
    writeln!(out, "Recognized commands:")?;
    writeln!(out, "\t<product name> [{WITH_KEYWORD} extra1, [extra2], ...]")?;
    writeln!(out, "\t\tadd product to the current order - optionally with extras")?;
    writeln!(out, "\t\tsee the product list and possible extras below")?;
    writeln!(out, "\t\tnote that '{WITH_KEYWORD}' is a reserved keyword ;-)")?;
    writeln!(out, "\tdone [customer name]")?;
    writeln!(
        out,
        "\t\tfinish the current order and print receipt - provide customer name to record the order on the loyalty card ;-)"
    )?;
    writeln!(out, "\tclose")?;
    writeln!(out, "\t\tclose the shop (for today ;-) and return to the shell")?;

    writeln!(out, "Available products:")?;
    for product in products {
        writeln!(out, "\t{} ({} {CURRENCY_CODE})", product.name(), product.price())?;
        if !product.extras().is_empty() {
            writeln!(out, "\t\tpossible extras:")?;
            for extra in product.extras() {
                writeln!(out, "\t\t{} ({} {CURRENCY_CODE})", extra.name(), extra.price())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::Catalog;

    #[test]
    fn test_help_lists_products_and_extras() {
        let mut out = Vec::new();
        write_help(&mut out, Catalog::reference().products()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Recognized commands:\n"));
        assert!(text.contains("\tsmall coffee (2.50 CHF)\n"));
        assert!(text.contains("\t\tspecial roast coffee (0.90 CHF)\n"));
        assert!(text.contains("\torange juice (3.95 CHF)\n"));
        assert_eq!(text.matches("possible extras:").count(), 3);
    }
}

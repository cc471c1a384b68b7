//! # Discount Rules
//!
//! The two promotions applied when an order is closed.
//!
//! ## Rule Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    close_order(customer)                                │
//! │                                                                         │
//! │  Order lines ──► split into drinks / snacks ("bacon roll")              │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  1. LOYALTY: every 5th drink of a customer is free                      │
//! │     free = multiples of 5 in [prior, prior + drinks], excluding 0       │
//! │     most expensive drinks go free first (stable on ties)                │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  2. SNACK PROMOTION: one free extra per snack                           │
//! │     only drinks that carry extras are candidates                        │
//! │     candidates ordered by their cheapest extra, highest first           │
//! │     each chosen drink gets its own cheapest extra for free              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The milestone range is inclusive at both ends, so a customer whose
//! stored count already sits on a multiple of 5 gets that milestone again
//! on the next order.

use tracing::debug;

use crate::types::OrderLine;
use crate::LOYALTY_INTERVAL;

/// What the discount pass did to an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// Drinks on the order; this is what the loyalty history grows by.
    pub drinks: u32,
    pub free_drinks: u32,
    pub free_extras: u32,
}

/// Number of loyalty milestones reached by an order.
///
/// ## Example
/// ```rust
/// use coffee_core::discount::milestones_reached;
///
/// assert_eq!(milestones_reached(4, 1), 1); // the 5th drink
/// assert_eq!(milestones_reached(0, 3), 0);
/// assert_eq!(milestones_reached(3, 8), 2); // 5 and 10
/// ```
pub fn milestones_reached(prior: u32, drinks: u32) -> u32 {
    let free = (prior..=prior.saturating_add(drinks))
        .filter(|count| *count > 0 && count % LOYALTY_INTERVAL == 0)
        .count();
    u32::try_from(free).unwrap_or(u32::MAX)
}

/// Runs both promotions over the order lines.
///
/// `prior_drinks` is the customer's stored drink count (0 for anonymous).
pub fn apply_discounts(lines: &mut [OrderLine], prior_drinks: u32) -> DiscountOutcome {
    let drinks: Vec<usize> = (0..lines.len()).filter(|&i| !lines[i].is_snack()).collect();
    let snacks = lines.len() - drinks.len();

    let mut outcome = DiscountOutcome {
        drinks: u32::try_from(drinks.len()).unwrap_or(u32::MAX),
        ..DiscountOutcome::default()
    };

    if drinks.is_empty() {
        return outcome;
    }

    outcome.free_drinks = apply_drink_loyalty(lines, &drinks, prior_drinks);

    if snacks > 0 {
        outcome.free_extras = apply_snack_extra_promotion(lines, &drinks, snacks);
    }

    outcome
}

/// Makes the most expensive drinks free, one per milestone.
fn apply_drink_loyalty(lines: &mut [OrderLine], drinks: &[usize], prior: u32) -> u32 {
    let free_count = milestones_reached(prior, u32::try_from(drinks.len()).unwrap_or(u32::MAX));
    if free_count == 0 {
        return 0;
    }

    let mut by_price = drinks.to_vec();
    // sort_by is stable: equal prices keep entry order
    by_price.sort_by(|&a, &b| lines[b].base_price.cmp(&lines[a].base_price));

    let mut granted = 0;
    for &index in by_price.iter().take(free_count as usize) {
        lines[index].free = true;
        granted += 1;
        debug!(product = %lines[index].name, "loyalty drink granted");
    }
    granted
}

/// Gives one free extra per snack to drinks carrying extras.
fn apply_snack_extra_promotion(lines: &mut [OrderLine], drinks: &[usize], snacks: usize) -> u32 {
    // (line index, index of its cheapest extra)
    let mut candidates: Vec<(usize, usize)> = drinks
        .iter()
        .filter_map(|&index| lines[index].cheapest_extra().map(|extra| (index, extra)))
        .collect();

    if candidates.is_empty() {
        return 0;
    }

    candidates.sort_by(|&(a, ea), &(b, eb)| {
        lines[b].extras[eb]
            .base_price
            .cmp(&lines[a].extras[ea].base_price)
    });

    let mut granted = 0;
    for &(index, extra) in candidates.iter().take(snacks) {
        let line = &mut lines[index];
        line.extras[extra].free = true;
        granted += 1;
        debug!(product = %line.name, extra = %line.extras[extra].name, "snack extra granted");
    }
    granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Money;
    use crate::types::ExtraDefinition;

    fn line(name: &str, extras: &[&str]) -> OrderLine {
        let catalog = Catalog::reference();
        let def = catalog.find(name).unwrap();
        let extras: Vec<&ExtraDefinition> =
            extras.iter().map(|e| def.find_extra(e).unwrap()).collect();
        OrderLine::from_definition(def, &extras)
    }

    #[test]
    fn test_milestones_reached() {
        assert_eq!(milestones_reached(0, 1), 0);
        assert_eq!(milestones_reached(0, 5), 1);
        assert_eq!(milestones_reached(4, 1), 1);
        assert_eq!(milestones_reached(2, 3), 1);
        assert_eq!(milestones_reached(4, 6), 2);
        assert_eq!(milestones_reached(6, 3), 0);
    }

    #[test]
    fn test_milestones_near_max_count() {
        // u32::MAX is a multiple of 5
        assert_eq!(milestones_reached(u32::MAX - 1, 5), 1);
        assert_eq!(milestones_reached(u32::MAX, 1), 1);
    }

    #[test]
    fn test_milestone_on_prior_count_counts_again() {
        // prior already sits on 5, range [5, 6]
        assert_eq!(milestones_reached(5, 1), 1);
    }

    #[test]
    fn test_loyalty_picks_most_expensive_drink() {
        let mut lines = vec![
            line("orange juice", &[]),
            line("small coffee", &[]),
            line("large coffee", &[]),
        ];
        let outcome = apply_discounts(&mut lines, 2);

        assert_eq!(outcome.drinks, 3);
        assert_eq!(outcome.free_drinks, 1);
        assert!(lines[0].free);
        assert!(!lines[1].free);
        assert!(!lines[2].free);
    }

    #[test]
    fn test_loyalty_tie_keeps_entry_order() {
        let mut lines = vec![
            line("medium coffee", &[]),
            line("small coffee", &[]),
            line("medium coffee", &["extra milk"]),
        ];
        apply_discounts(&mut lines, 4);

        assert!(lines[0].free);
        assert!(!lines[2].free);
    }

    #[test]
    fn test_loyalty_multiple_milestones() {
        let mut lines: Vec<OrderLine> = (0..6).map(|_| line("small coffee", &[])).collect();
        lines.push(line("large coffee", &[]));
        let outcome = apply_discounts(&mut lines, 4);

        // [4, 11] reaches 5 and 10
        assert_eq!(outcome.free_drinks, 2);
        assert!(lines[6].free);
        assert!(lines[0].free);
        assert_eq!(lines.iter().filter(|l| l.free).count(), 2);
    }

    #[test]
    fn test_snacks_do_not_count_as_drinks() {
        let mut lines = vec![line("bacon roll", &[]), line("bacon roll", &[])];
        let outcome = apply_discounts(&mut lines, 4);

        assert_eq!(outcome, DiscountOutcome::default());
        assert!(lines.iter().all(|l| !l.free));
    }

    #[test]
    fn test_snack_grants_cheapest_extra() {
        let mut lines = vec![
            line("medium coffee", &["special roast coffee", "extra milk"]),
            line("bacon roll", &[]),
        ];
        let outcome = apply_discounts(&mut lines, 0);

        assert_eq!(outcome.free_extras, 1);
        assert!(!lines[0].extras[0].free);
        assert!(lines[0].extras[1].free);
        assert_eq!(lines[0].line_total(), Money::from_cents(390));
    }

    #[test]
    fn test_snack_prefers_drink_with_priciest_cheapest_extra() {
        let mut lines = vec![
            line("small coffee", &["extra milk", "special roast coffee"]),
            line("large coffee", &["foamed milk"]),
            line("medium coffee", &["special roast coffee"]),
            line("bacon roll", &[]),
            line("bacon roll", &[]),
        ];
        let outcome = apply_discounts(&mut lines, 0);

        assert_eq!(outcome.free_extras, 2);
        assert!(lines[2].extras[0].free);
        assert!(lines[1].extras[0].free);
        assert!(lines[0].extras.iter().all(|e| !e.free));
    }

    #[test]
    fn test_snack_promotion_limited_by_candidates() {
        let mut lines = vec![
            line("orange juice", &[]),
            line("small coffee", &["foamed milk"]),
            line("bacon roll", &[]),
            line("bacon roll", &[]),
        ];
        let outcome = apply_discounts(&mut lines, 0);
        assert_eq!(outcome.free_extras, 1);
        assert!(lines[1].extras[0].free);
    }

    #[test]
    fn test_no_extras_still_keeps_loyalty_discount() {
        let mut lines = vec![line("orange juice", &[]), line("bacon roll", &[])];
        let outcome = apply_discounts(&mut lines, 4);

        assert_eq!(outcome.free_drinks, 1);
        assert_eq!(outcome.free_extras, 0);
        assert!(lines[0].free);
        assert!(!lines[1].free);
    }

    #[test]
    fn test_free_extra_needs_a_snack() {
        let mut lines = vec![line("medium coffee", &["extra milk"])];
        let outcome = apply_discounts(&mut lines, 0);
        assert_eq!(outcome.free_extras, 0);
        assert!(!lines[0].extras[0].free);
    }
}

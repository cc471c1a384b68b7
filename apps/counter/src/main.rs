//! # Coffee Counter Entry Point
//!
//! ```text
//! $ coffee-counter
//! Welcome to Charlene's Coffee Corner
//! Type 'help' to get help
//! coffeeshop> medium coffee with extra milk
//! OK :-)
//! coffeeshop> done hans
//! Dear hans, here's your order:
//! medium coffee ..................................... 3.00 CHF
//!    extra milk *free* .............................. 0.30 CHF
//! total ............................................. 3.30 CHF
//! coffeeshop> close
//! Bye ;-)
//! ```

fn main() -> Result<(), coffee_counter_lib::error::AppError> {
    // The actual setup is in lib.rs for testability
    coffee_counter_lib::run()
}

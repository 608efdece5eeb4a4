//! Rental transaction engine module
//!
//! Home of the one workflow with real invariants: the atomic
//! debit-flip-insert state transition behind rental creation.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewRental, RentalOutcome, RentalService, RentalUpdate};

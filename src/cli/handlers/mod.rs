//! Command handlers for CLI operations
//!
//! Handlers perform the storage work for a validated request, separated
//! from parsing and printing.

pub mod users;

pub use users::UserCommandHandler;

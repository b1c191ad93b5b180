//! Fund Domain
//!
//! This crate defines the Golden Visa investment-fund record — the read-only
//! input every downstream derivation works over — and the catalog port it is
//! served through.
//!
//! # Key Concepts
//!
//! - **Fund**: a listed investment vehicle with optional financial attributes
//! - **Catalog**: the hosted backend the directory reads fund records from,
//!   modeled as the [`FundCatalog`] port with swappable adapters
//! - **Disclosure**: for fee fields, `Some(0)` means "no fee charged" while
//!   `None` means "fee undisclosed" — the two are never interchangeable
//!
//! # Fee Semantics
//!
//! A fund that charges no subscription fee advertises that fact; a fund that
//! simply has not published its fee must not be displayed as free. Every
//! consumer of this model (formatters, comparison resolvers, classifiers)
//! preserves the distinction.

pub mod adapters;
pub mod error;
pub mod fund;
pub mod ports;

pub use adapters::InMemoryFundCatalog;
pub use error::FundError;
pub use fund::{Fund, RedemptionTerms};
pub use ports::FundCatalog;

//! Core Kernel - Foundational types and utilities for the fund directory
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Slug-based fund identifiers
//! - Compact EUR display with precise decimal arithmetic
//! - Port infrastructure for swappable data sources
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use error::CoreError;
pub use identifiers::{FundId, IdError, COMPARISON_SEPARATOR};
pub use money::{format_currency_value, format_currency_value_or, NOT_DISCLOSED};
pub use ports::PortError;

//! Domain types for activity disaggregation.
//!
//! This module provides the value objects the split engine operates on:
//!
//! - [`Transaction`]: a single financial flow with optional pre-set codes
//! - [`SectorRef`]: a resolved sector descriptor (vocabulary + code)
//! - [`RecipientCountry`], [`RecipientRegion`], [`Sector`]: weighted items
//! - [`Activity`]: transactions plus the dimension lists that apply to them
//! - [`Weighted`]: shared access to an item's percentage

mod activity;
mod transaction;
mod weighted;

// Re-export all types
pub use activity::{Activity, ActivityBuilder};
pub use transaction::{SectorRef, Transaction};
pub use weighted::{RecipientCountry, RecipientRegion, Sector, Weighted};

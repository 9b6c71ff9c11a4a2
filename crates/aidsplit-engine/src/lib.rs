//! # Aidsplit Engine
//!
//! Proportional disaggregation of IATI-style activity records.
//!
//! An activity attaches percentage-weighted dimensions to its transactions:
//! recipient countries, recipient regions, and sector classifications. This
//! crate expands each transaction into the cross-product of those
//! dimensions, scaling value multiplicatively, so downstream consumers get
//! flat single-dimension-per-row records that sum back to the original
//! total with no double counting.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: No I/O, no caching, no shared mutable state; every
//!   call computes fresh records from explicit inputs
//! - **Clone per branch**: Expansion never mutates a prior-stage record, so
//!   records from different branches never alias
//! - **Deterministic order**: Output follows input order at every level -
//!   transaction, country, region, vocabulary first-seen, sector
//!
//! ## The split, stage by stage
//!
//! 1. Seed one record per transaction, pre-set codes intact
//! 2. Cross-product against normalized countries (empty list = no-op)
//! 3. Cross-product against normalized regions
//! 4. Cross-product against each sector vocabulary group independently -
//!    two vocabularies of 2 sectors each yield 4 records, not 2, because
//!    vocabularies are simultaneous classifications, not alternatives
//!
//! Weights are rescaled to sum to 100 per group first, so a declared 30/40
//! split produces 3/7 and 4/7 shares. A group with no usable weights is
//! passed through verbatim, which is how a single unweighted item attaches
//! its code without scaling.
//!
//! ## Example
//!
//! ```rust
//! use aidsplit_core::{Activity, RecipientCountry, Transaction};
//! use aidsplit_engine::split_activity;
//! use rust_decimal_macros::dec;
//!
//! let activity = Activity::builder()
//!     .add_transaction(Transaction::new(dec!(1000)))
//!     .add_recipient_country(RecipientCountry::new("FR").with_percentage(dec!(50)))
//!     .add_recipient_country(RecipientCountry::new("GB").with_percentage(dec!(50)))
//!     .build()?;
//!
//! let records = split_activity(&activity);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].value, dec!(500));
//! # Ok::<(), aidsplit_core::SplitError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`normalize`] - Percentage normalization and vocabulary grouping
//! - [`split`] - Cross-product expansion into [`SplitRecord`]s
//! - [`present`] - Projection onto the stable JSON field set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod normalize;
pub mod present;
pub mod split;

// Re-export the main entry points at crate root
pub use normalize::{group_sectors_by_vocabulary, normalize_percentages, SectorGroup};
pub use present::{flatten, split_activity_flat, split_activity_json, FlatSector, FlatTransaction};
pub use split::{split_activity, SplitRecord};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use aidsplit_engine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::normalize::{group_sectors_by_vocabulary, normalize_percentages, SectorGroup};
    pub use crate::present::{
        flatten, split_activity_flat, split_activity_json, FlatSector, FlatTransaction,
    };
    pub use crate::split::{split_activity, SplitRecord};

    // Re-export the domain types callers build inputs with
    pub use aidsplit_core::prelude::*;
}

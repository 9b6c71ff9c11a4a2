//! # Aidsplit Core
//!
//! Domain types for proportional disaggregation of IATI-style activity
//! records.
//!
//! Aid-reporting data attaches multiple percentage-weighted dimensions to a
//! single financial flow: "50% Country A, 50% Country B" and, independently,
//! "70% Health, 30% Education". This crate models those inputs; the
//! companion `aidsplit-engine` crate expands them into flat, one-dimension-
//! per-row records whose values sum back to the original total.
//!
//! ## Design Philosophy
//!
//! - **Plain value objects**: No I/O, no computed state, no interior
//!   mutability
//! - **Absence is not zero**: Percentages are `Option<Decimal>` because a
//!   missing weight (sole item takes the full value) means something
//!   different from an explicit `0` (item contributes nothing)
//! - **Validate at the boundary**: [`ActivityBuilder`] rejects negative
//!   percentages; everything downstream is total
//!
//! ## Example
//!
//! ```rust
//! use aidsplit_core::{Activity, RecipientCountry, Transaction};
//! use rust_decimal_macros::dec;
//!
//! let activity = Activity::builder()
//!     .add_transaction(Transaction::new(dec!(1000)))
//!     .add_recipient_country(RecipientCountry::new("FR").with_percentage(dec!(50)))
//!     .add_recipient_country(RecipientCountry::new("GB").with_percentage(dec!(50)))
//!     .build()?;
//! # Ok::<(), aidsplit_core::SplitError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{SplitError, SplitResult};

// Re-export main types
pub use types::{
    Activity, ActivityBuilder, RecipientCountry, RecipientRegion, Sector, SectorRef, Transaction,
    Weighted,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use aidsplit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{SplitError, SplitResult};
    pub use crate::types::{
        Activity, ActivityBuilder, RecipientCountry, RecipientRegion, Sector, SectorRef,
        Transaction, Weighted,
    };

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = SplitError::invalid_activity("empty");
        assert!(err.to_string().contains("empty"));
    }
}

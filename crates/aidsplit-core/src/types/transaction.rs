//! Transactions and resolved sector references.

use super::Sector;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved sector descriptor attached to a transaction or split record.
///
/// Unlike [`Sector`], a reference carries no percentage: it records which
/// sector a value has already been attributed to, not how value should be
/// divided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorRef {
    /// Classification scheme the code belongs to.
    pub vocabulary: Option<String>,

    /// Sector code within the vocabulary.
    pub code: Option<String>,
}

impl SectorRef {
    /// Creates an empty sector reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reference resolving the given weighted sector item.
    #[must_use]
    pub fn from_sector(sector: &Sector) -> Self {
        Self {
            vocabulary: sector.vocabulary.clone(),
            code: sector.code.clone(),
        }
    }

    /// Sets the vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = Some(vocabulary.into());
        self
    }

    /// Sets the code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A single financial flow before disaggregation.
///
/// A transaction may arrive with dimension codes already attached by the
/// reporting organisation. Those pre-set codes survive the split unchanged
/// for any dimension the owning activity declares no weighted items for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Monetary value of the flow.
    pub value: Decimal,

    /// Pre-set recipient country code, if any.
    pub recipient_country_code: Option<String>,

    /// Pre-set recipient region code, if any.
    pub recipient_region_code: Option<String>,

    /// Pre-set sector references, if any.
    pub sectors: Vec<SectorRef>,
}

impl Transaction {
    /// Creates a transaction with the given value and no dimension codes.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Sets the pre-set recipient country code.
    #[must_use]
    pub fn with_recipient_country(mut self, code: impl Into<String>) -> Self {
        self.recipient_country_code = Some(code.into());
        self
    }

    /// Sets the pre-set recipient region code.
    #[must_use]
    pub fn with_recipient_region(mut self, code: impl Into<String>) -> Self {
        self.recipient_region_code = Some(code.into());
        self
    }

    /// Appends a pre-set sector reference.
    #[must_use]
    pub fn with_sector(mut self, sector: SectorRef) -> Self {
        self.sectors.push(sector);
        self
    }
}

//! Percentage-weighted dimension items.
//!
//! An activity declares how its value is distributed across recipient
//! countries, recipient regions, and sector classifications by attaching
//! percentage weights to each. A weight is `Option<Decimal>`: absence is
//! semantically distinct from an explicit zero. A single item with no
//! weight means "the full value, unscaled"; an explicit zero contributes
//! nothing and dilutes its siblings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Access to the percentage weight of a dimension item.
///
/// Implemented by all three dimension item types so a single normalization
/// routine can serve them.
pub trait Weighted {
    /// Returns the declared percentage, if any.
    fn percentage(&self) -> Option<Decimal>;

    /// Replaces the declared percentage.
    fn set_percentage(&mut self, percentage: Option<Decimal>);
}

/// A recipient country with an optional share of the activity's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientCountry {
    /// ISO country code (opaque to the engine).
    pub code: Option<String>,

    /// Share of value in percent, 0-100.
    pub percentage: Option<Decimal>,
}

impl RecipientCountry {
    /// Creates a country item with the given code and no percentage.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            percentage: None,
        }
    }

    /// Sets the percentage share.
    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

impl Weighted for RecipientCountry {
    fn percentage(&self) -> Option<Decimal> {
        self.percentage
    }

    fn set_percentage(&mut self, percentage: Option<Decimal>) {
        self.percentage = percentage;
    }
}

/// A recipient region with an optional share of the activity's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientRegion {
    /// Region code (opaque to the engine).
    pub code: Option<String>,

    /// Share of value in percent, 0-100.
    pub percentage: Option<Decimal>,
}

impl RecipientRegion {
    /// Creates a region item with the given code and no percentage.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            percentage: None,
        }
    }

    /// Sets the percentage share.
    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

impl Weighted for RecipientRegion {
    fn percentage(&self) -> Option<Decimal> {
        self.percentage
    }

    fn set_percentage(&mut self, percentage: Option<Decimal>) {
        self.percentage = percentage;
    }
}

/// A sector classification with an optional share of the activity's value.
///
/// Sectors carry a vocabulary: the classification scheme the code belongs
/// to. Percentages are only meaningful relative to siblings under the same
/// vocabulary, so normalization and splitting treat each vocabulary as an
/// independent dimension. An absent vocabulary forms its own group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Classification scheme this code belongs to.
    pub vocabulary: Option<String>,

    /// Sector code within the vocabulary (opaque to the engine).
    pub code: Option<String>,

    /// Share of value in percent, 0-100.
    pub percentage: Option<Decimal>,
}

impl Sector {
    /// Creates a sector item with the given code, no vocabulary and no
    /// percentage.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            vocabulary: None,
            code: Some(code.into()),
            percentage: None,
        }
    }

    /// Sets the vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = Some(vocabulary.into());
        self
    }

    /// Sets the percentage share.
    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

impl Weighted for Sector {
    fn percentage(&self) -> Option<Decimal> {
        self.percentage
    }

    fn set_percentage(&mut self, percentage: Option<Decimal>) {
        self.percentage = percentage;
    }
}

//! Activities: the unit of configuration for a split.

use super::{RecipientCountry, RecipientRegion, Sector, Transaction};
use crate::error::{SplitError, SplitResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An activity: a set of transactions plus the weighted dimension lists
/// that apply uniformly to every one of them.
///
/// Activities are read-only inputs to the split engine. They hold no
/// computed state; disaggregation produces fresh records on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Financial flows to disaggregate.
    pub transactions: Vec<Transaction>,

    /// Weighted sector classifications, possibly across several
    /// vocabularies.
    pub sectors: Vec<Sector>,

    /// Weighted recipient countries.
    pub recipient_countries: Vec<RecipientCountry>,

    /// Weighted recipient regions.
    pub recipient_regions: Vec<RecipientRegion>,
}

impl Activity {
    /// Creates a new activity builder.
    #[must_use]
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::new()
    }
}

/// Builder for constructing an [`Activity`].
///
/// # Validation
///
/// `build` rejects negative percentages on any dimension item. Percentages
/// above 100 and weights that do not sum to 100 are accepted: the engine
/// normalizes them.
#[derive(Debug, Clone, Default)]
pub struct ActivityBuilder {
    transactions: Vec<Transaction>,
    sectors: Vec<Sector>,
    recipient_countries: Vec<RecipientCountry>,
    recipient_regions: Vec<RecipientRegion>,
}

impl ActivityBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction.
    #[must_use]
    pub fn add_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Appends several transactions.
    #[must_use]
    pub fn add_transactions(mut self, transactions: impl IntoIterator<Item = Transaction>) -> Self {
        self.transactions.extend(transactions);
        self
    }

    /// Appends a weighted sector.
    #[must_use]
    pub fn add_sector(mut self, sector: Sector) -> Self {
        self.sectors.push(sector);
        self
    }

    /// Appends several weighted sectors.
    #[must_use]
    pub fn add_sectors(mut self, sectors: impl IntoIterator<Item = Sector>) -> Self {
        self.sectors.extend(sectors);
        self
    }

    /// Appends a weighted recipient country.
    #[must_use]
    pub fn add_recipient_country(mut self, country: RecipientCountry) -> Self {
        self.recipient_countries.push(country);
        self
    }

    /// Appends several weighted recipient countries.
    #[must_use]
    pub fn add_recipient_countries(
        mut self,
        countries: impl IntoIterator<Item = RecipientCountry>,
    ) -> Self {
        self.recipient_countries.extend(countries);
        self
    }

    /// Appends a weighted recipient region.
    #[must_use]
    pub fn add_recipient_region(mut self, region: RecipientRegion) -> Self {
        self.recipient_regions.push(region);
        self
    }

    /// Appends several weighted recipient regions.
    #[must_use]
    pub fn add_recipient_regions(
        mut self,
        regions: impl IntoIterator<Item = RecipientRegion>,
    ) -> Self {
        self.recipient_regions.extend(regions);
        self
    }

    /// Builds the activity.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidPercentage`] if any dimension item
    /// carries a negative percentage.
    pub fn build(self) -> SplitResult<Activity> {
        for country in &self.recipient_countries {
            check_percentage("country", country.code.as_deref(), country.percentage)?;
        }
        for region in &self.recipient_regions {
            check_percentage("region", region.code.as_deref(), region.percentage)?;
        }
        for sector in &self.sectors {
            check_percentage("sector", sector.code.as_deref(), sector.percentage)?;
        }

        Ok(Activity {
            transactions: self.transactions,
            sectors: self.sectors,
            recipient_countries: self.recipient_countries,
            recipient_regions: self.recipient_regions,
        })
    }
}

fn check_percentage(
    dimension: &str,
    code: Option<&str>,
    percentage: Option<Decimal>,
) -> SplitResult<()> {
    match percentage {
        Some(pct) if pct < Decimal::ZERO => {
            Err(SplitError::invalid_percentage(dimension, code, pct))
        }
        _ => Ok(()),
    }
}

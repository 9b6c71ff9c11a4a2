//! The cross-product split.
//!
//! Disaggregation is staged: country, then region, then sector. Each stage
//! with at least one weighted item replaces the running record set with its
//! full cross-product against the normalized items, scaling value
//! multiplicatively; an empty dimension passes records through unchanged.
//! Sector vocabularies fan out as independent dimensions, so two
//! vocabularies each claim the full value rather than sharing one split.

use crate::normalize::{group_sectors_by_vocabulary, normalize_percentages};
use aidsplit_core::{Activity, SectorRef, Transaction, Weighted};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fully disaggregated share of a transaction.
///
/// Exactly one record exists per (transaction, country choice, region
/// choice, sector choice per vocabulary) combination. Records are
/// independently owned values: expansion clones at every branch, so
/// siblings never alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    /// This combination's share of the transaction value.
    pub value: Decimal,

    /// Resolved recipient country code, or the transaction's pre-set code
    /// if the activity declared no countries.
    pub recipient_country_code: Option<String>,

    /// Resolved recipient region code, or the transaction's pre-set code
    /// if the activity declared no regions.
    pub recipient_region_code: Option<String>,

    /// The single resolved sector, or the transaction's pre-set sector
    /// references if the activity declared no sectors.
    pub sectors: Vec<SectorRef>,
}

impl SplitRecord {
    /// Seeds a record from a transaction, carrying its value and pre-set
    /// dimension codes unchanged.
    #[must_use]
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            value: transaction.value,
            recipient_country_code: transaction.recipient_country_code.clone(),
            recipient_region_code: transaction.recipient_region_code.clone(),
            sectors: transaction.sectors.clone(),
        }
    }

    /// Returns a clone with the value scaled by `pct / 100`, or unscaled if
    /// the percentage is absent (the sole-unweighted-item case).
    fn scaled(&self, percentage: Option<Decimal>) -> Self {
        let mut branch = self.clone();
        if let Some(pct) = percentage {
            branch.value = branch.value * pct / Decimal::ONE_HUNDRED;
        }
        branch
    }
}

/// Disaggregates an activity into one record per dimension combination.
///
/// Output order is deterministic: transaction order outermost, then country
/// order, then region order, then vocabulary first-seen order, then sector
/// order within vocabulary - all as supplied, since normalization preserves
/// order.
///
/// Value is conserved per stage: the records fanned out from one parent sum
/// back to the parent's value whenever the stage's normalized weights sum
/// to 100. The exception is a group whose weights are all zero or absent:
/// it is left unnormalized, and each explicit zero yields a zero-value
/// record.
#[must_use]
pub fn split_activity(activity: &Activity) -> Vec<SplitRecord> {
    let mut records: Vec<SplitRecord> = activity
        .transactions
        .iter()
        .map(SplitRecord::from_transaction)
        .collect();

    // Split by recipient country
    if !activity.recipient_countries.is_empty() {
        let countries = normalize_percentages(&activity.recipient_countries);
        let mut expanded = Vec::with_capacity(records.len() * countries.len());
        for record in &records {
            for country in &countries {
                let mut branch = record.scaled(country.percentage());
                branch.recipient_country_code = country.code.clone();
                expanded.push(branch);
            }
        }
        records = expanded;
    }

    // Split by recipient region
    if !activity.recipient_regions.is_empty() {
        let regions = normalize_percentages(&activity.recipient_regions);
        let mut expanded = Vec::with_capacity(records.len() * regions.len());
        for record in &records {
            for region in &regions {
                let mut branch = record.scaled(region.percentage());
                branch.recipient_region_code = region.code.clone();
                expanded.push(branch);
            }
        }
        records = expanded;
    }

    // Split by sector, once per vocabulary group
    if !activity.sectors.is_empty() {
        let groups = group_sectors_by_vocabulary(&activity.sectors);
        let fan_out: usize = groups.iter().map(|g| g.sectors.len()).sum();
        let mut expanded = Vec::with_capacity(records.len() * fan_out);
        for record in &records {
            for group in &groups {
                for sector in &group.sectors {
                    let mut branch = record.scaled(sector.percentage());
                    branch.sectors = vec![SectorRef::from_sector(sector)];
                    expanded.push(branch);
                }
            }
        }
        records = expanded;
    }

    records
}

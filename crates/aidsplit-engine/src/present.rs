//! Projection of split records onto the stable output field set.
//!
//! Downstream consumers compare split output structurally, so the field
//! names here - `value`, `recipient_country_code`, `recipient_region_code`,
//! `sectors` with `vocabulary`/`code` elements - are a wire contract.
//! Nothing is computed in this layer; it is a pure field mapping.

use crate::split::{split_activity, SplitRecord};
use aidsplit_core::{Activity, SplitError, SplitResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serialized form of a sector attached to a flat record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatSector {
    /// Classification scheme the code belongs to.
    pub vocabulary: Option<String>,

    /// Sector code within the vocabulary.
    pub code: Option<String>,
}

/// One flat, single-dimension-per-row output record.
///
/// Field declaration order is the serialization order and must not change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatTransaction {
    /// This record's share of the original transaction value.
    pub value: Decimal,

    /// Resolved recipient country code.
    pub recipient_country_code: Option<String>,

    /// Resolved recipient region code. Always present as a key, null when
    /// no region applies.
    pub recipient_region_code: Option<String>,

    /// Zero or one resolved sectors (zero only when the activity declared
    /// no sectors and the transaction carried none).
    pub sectors: Vec<FlatSector>,
}

impl From<&SplitRecord> for FlatTransaction {
    fn from(record: &SplitRecord) -> Self {
        Self {
            value: record.value,
            recipient_country_code: record.recipient_country_code.clone(),
            recipient_region_code: record.recipient_region_code.clone(),
            sectors: record
                .sectors
                .iter()
                .map(|s| FlatSector {
                    vocabulary: s.vocabulary.clone(),
                    code: s.code.clone(),
                })
                .collect(),
        }
    }
}

/// Projects split records onto the flat output shape, preserving order.
#[must_use]
pub fn flatten(records: &[SplitRecord]) -> Vec<FlatTransaction> {
    records.iter().map(FlatTransaction::from).collect()
}

/// Splits an activity and returns the flat output records.
#[must_use]
pub fn split_activity_flat(activity: &Activity) -> Vec<FlatTransaction> {
    flatten(&split_activity(activity))
}

/// Splits an activity and serializes the result to a JSON array.
///
/// # Errors
///
/// Returns [`SplitError::Serialization`] if JSON encoding fails.
pub fn split_activity_json(activity: &Activity) -> SplitResult<serde_json::Value> {
    serde_json::to_value(split_activity_flat(activity))
        .map_err(|e| SplitError::serialization(e.to_string()))
}

//! Percentage normalization.
//!
//! Declared weights rarely arrive summing to exactly 100: reporting
//! organisations publish 30/40 splits, rounded thirds, or no percentage at
//! all. Before expansion, every dimension group is rescaled so the present
//! weights sum to 100, preserving each item's share of the declared total.

use aidsplit_core::{Sector, Weighted};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rescales a group of weighted items so present percentages sum to 100.
///
/// The sum treats an absent percentage as 0. If the total is zero - no item
/// carries a usable weight - the items are returned verbatim, absent
/// percentages included. This is the escape valve that lets a single item
/// with no explicit percentage act as a 100% share downstream.
///
/// If the total is positive, every item with a present percentage is
/// rescaled to `pct / total * 100`. An item with an absent percentage in
/// such a group stays absent: its contribution is ill-defined in the source
/// data, and the engine deliberately passes the defect through rather than
/// guessing (see the crate-level notes on degenerate weights).
///
/// Order is preserved; inputs are never mutated.
#[must_use]
pub fn normalize_percentages<T>(items: &[T]) -> Vec<T>
where
    T: Weighted + Clone,
{
    let total: Decimal = items.iter().filter_map(Weighted::percentage).sum();

    let mut normalized = items.to_vec();
    if total.is_zero() {
        return normalized;
    }

    for item in &mut normalized {
        if let Some(pct) = item.percentage() {
            item.set_percentage(Some(pct / total * Decimal::ONE_HUNDRED));
        }
    }

    normalized
}

/// Sectors sharing one vocabulary, normalized as a unit.
///
/// Groups appear in the order their vocabulary was first seen in the input,
/// which the splitter relies on for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorGroup {
    /// The shared vocabulary. An absent vocabulary forms its own group.
    pub vocabulary: Option<String>,

    /// The group's sectors with normalized percentages, in input order.
    pub sectors: Vec<Sector>,
}

/// Partitions sectors by vocabulary and normalizes each partition.
///
/// Sector percentages are only meaningful relative to siblings under the
/// same classification scheme, so each vocabulary is rescaled
/// independently. Vocabulary keys keep first-seen order; sectors keep input
/// order within their group.
#[must_use]
pub fn group_sectors_by_vocabulary(sectors: &[Sector]) -> Vec<SectorGroup> {
    let mut groups: Vec<SectorGroup> = Vec::new();

    for sector in sectors {
        match groups.iter_mut().find(|g| g.vocabulary == sector.vocabulary) {
            Some(group) => group.sectors.push(sector.clone()),
            None => groups.push(SectorGroup {
                vocabulary: sector.vocabulary.clone(),
                sectors: vec![sector.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.sectors = normalize_percentages(&group.sectors);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidsplit_core::RecipientCountry;
    use rust_decimal_macros::dec;

    #[test]
    fn test_already_normalized() {
        let items = vec![
            RecipientCountry::new("FR").with_percentage(dec!(50)),
            RecipientCountry::new("GB").with_percentage(dec!(50)),
        ];

        let normalized = normalize_percentages(&items);

        assert_eq!(normalized[0].percentage, Some(dec!(50)));
        assert_eq!(normalized[1].percentage, Some(dec!(50)));
    }

    #[test]
    fn test_rescales_to_100() {
        // 30/40 declared: shares are 30/70 and 40/70 of the total, not 30%
        // and 40% literally.
        let items = vec![
            RecipientCountry::new("FR").with_percentage(dec!(30)),
            RecipientCountry::new("GB").with_percentage(dec!(40)),
        ];

        let normalized = normalize_percentages(&items);

        let fr = normalized[0].percentage.unwrap();
        let gb = normalized[1].percentage.unwrap();
        assert!((fr - dec!(42.857142857142857)).abs() < dec!(0.000001));
        assert!((gb - dec!(57.142857142857142)).abs() < dec!(0.000001));
        assert!((fr + gb - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_zero_total_returned_verbatim() {
        let items = vec![
            RecipientCountry::new("FR").with_percentage(dec!(0)),
            RecipientCountry::new("GB"),
        ];

        let normalized = normalize_percentages(&items);

        assert_eq!(normalized[0].percentage, Some(Decimal::ZERO));
        assert_eq!(normalized[1].percentage, None);
    }

    #[test]
    fn test_single_unweighted_item_untouched() {
        let items = vec![RecipientCountry::new("GB")];

        let normalized = normalize_percentages(&items);

        assert_eq!(normalized[0].percentage, None);
        assert_eq!(normalized[0].code.as_deref(), Some("GB"));
    }

    #[test]
    fn test_absent_stays_absent_when_total_positive() {
        // Mixed present/absent with a positive total: the present weight is
        // rescaled, the absent one passes through untouched.
        let items = vec![
            RecipientCountry::new("FR").with_percentage(dec!(50)),
            RecipientCountry::new("GB"),
        ];

        let normalized = normalize_percentages(&items);

        assert_eq!(normalized[0].percentage, Some(dec!(100)));
        assert_eq!(normalized[1].percentage, None);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let items = vec![
            RecipientCountry::new("FR").with_percentage(dec!(30)),
            RecipientCountry::new("GB").with_percentage(dec!(40)),
        ];

        let _ = normalize_percentages(&items);

        assert_eq!(items[0].percentage, Some(dec!(30)));
        assert_eq!(items[1].percentage, Some(dec!(40)));
    }

    #[test]
    fn test_grouping_keeps_first_seen_vocabulary_order() {
        let sectors = vec![
            Sector::new("Henry").with_vocabulary("cats"),
            Sector::new("Rover").with_vocabulary("dogs"),
            Sector::new("Linda").with_vocabulary("cats"),
        ];

        let groups = group_sectors_by_vocabulary(&sectors);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].vocabulary.as_deref(), Some("cats"));
        assert_eq!(
            groups[0]
                .sectors
                .iter()
                .map(|s| s.code.as_deref().unwrap())
                .collect::<Vec<_>>(),
            vec!["Henry", "Linda"]
        );
        assert_eq!(groups[1].vocabulary.as_deref(), Some("dogs"));
    }

    #[test]
    fn test_groups_normalized_independently() {
        let sectors = vec![
            Sector::new("Henry").with_vocabulary("cats").with_percentage(dec!(25)),
            Sector::new("Linda").with_vocabulary("cats").with_percentage(dec!(25)),
            Sector::new("Rover").with_vocabulary("dogs").with_percentage(dec!(40)),
        ];

        let groups = group_sectors_by_vocabulary(&sectors);

        // cats: 25/25 rescales to 50/50; dogs: 40 alone rescales to 100.
        assert_eq!(groups[0].sectors[0].percentage, Some(dec!(50)));
        assert_eq!(groups[0].sectors[1].percentage, Some(dec!(50)));
        assert_eq!(groups[1].sectors[0].percentage, Some(dec!(100)));
    }

    #[test]
    fn test_absent_vocabulary_is_own_group() {
        let sectors = vec![
            Sector::new("11120").with_percentage(dec!(100)),
            Sector::new("Henry").with_vocabulary("cats").with_percentage(dec!(100)),
        ];

        let groups = group_sectors_by_vocabulary(&sectors);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].vocabulary, None);
        assert_eq!(groups[1].vocabulary.as_deref(), Some("cats"));
    }

    #[test]
    fn test_empty_sector_list() {
        let groups = group_sectors_by_vocabulary(&[]);
        assert!(groups.is_empty());
    }
}

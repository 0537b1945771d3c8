use super::model::{LaunchDataset, LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Payload range predicate
// ---------------------------------------------------------------------------

/// Inclusive payload mass window `[lo, hi]` in kilograms.
///
/// An inverted range (`lo > hi`) is not an error; it matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The full payload extent of a dataset, used as the slider default.
    pub fn of_dataset(dataset: &LaunchDataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.lo <= payload_kg && payload_kg <= self.hi
    }

    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }
}

// ---------------------------------------------------------------------------
// Record filtering
// ---------------------------------------------------------------------------

/// Launches from the selected site(s), in dataset order.
pub fn records_for_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |rec| site.matches(&rec.site))
}

/// Launches from the selected site(s) whose payload lies inside `range`.
pub fn filtered_records<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records_for_site(dataset, site).filter(move |rec| range.contains(rec.payload_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 1000.0);
        assert!(range.contains(500.0));
        assert!(range.contains(1000.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(1000.1));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PayloadRange::new(1000.0, 500.0);
        assert!(range.is_inverted());
        assert!(!range.contains(750.0));
        assert!(!range.contains(500.0));
        assert!(!range.contains(1000.0));
    }

    #[test]
    fn test_filtered_records_by_site_and_range() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteA", 1500.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("SiteB", 800.0, Outcome::Success, "v1.1"),
        ])
        .unwrap();

        let site = SiteSelection::Site("SiteA".into());
        let hits: Vec<f64> = filtered_records(&ds, &site, PayloadRange::new(0.0, 2000.0))
            .map(|r| r.payload_kg)
            .collect();
        assert_eq!(hits, vec![500.0, 1500.0]);

        let all = SiteSelection::All;
        assert_eq!(
            filtered_records(&ds, &all, PayloadRange::of_dataset(&ds)).count(),
            3
        );
    }
}

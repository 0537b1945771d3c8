use std::fmt;

// ---------------------------------------------------------------------------
// Column names – kept verbatim so exported course datasets load unchanged
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

/// Every column a dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER];

/// Dropdown value that stands for "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map the raw `class` value (0 or 1) to an outcome.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// The numeric class, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_kg: f64,
    pub outcome: Outcome,
    /// Only used to colour scatter points.
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(site: &str, payload_kg: f64, outcome: Outcome, booster_category: &str) -> Self {
        Self {
            site: site.to_string(),
            payload_kg,
            outcome,
            booster_category: booster_category.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – dropdown value
// ---------------------------------------------------------------------------

/// The value of the site dropdown: either the `ALL` sentinel or one site.
///
/// A `Site` does not have to exist in the dataset; filtering against an
/// unknown site simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record launched from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed payload bounds and site set.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    /// Distinct sites in order of first appearance.
    sites: Vec<String>,
}

impl LaunchDataset {
    /// Build the cached scalars from the loaded records.
    ///
    /// Returns `None` for an empty record list, since the payload bounds
    /// would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut min_payload = first.payload_kg;
        let mut max_payload = first.payload_kg;
        let mut sites: Vec<String> = Vec::new();

        for rec in &records {
            min_payload = min_payload.min(rec.payload_kg);
            max_payload = max_payload.max(rec.payload_kg);
            if !sites.iter().any(|s| *s == rec.site) {
                sites.push(rec.site.clone());
            }
        }

        Some(LaunchDataset {
            records,
            min_payload,
            max_payload,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Dropdown options: the `ALL` sentinel followed by every site.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.sites.iter().map(|s| SiteSelection::Site(s.clone())))
            .collect()
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// False for any dataset built by `from_records`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("SiteB", 800.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteB", 9600.0, Outcome::Failure, "FT"),
            LaunchRecord::new("SiteA", 0.0, Outcome::Failure, "v1.0"),
        ])
        .unwrap()
    }

    #[test]
    fn test_payload_bounds() {
        let ds = sample();
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_sites_keep_first_appearance_order() {
        let ds = sample();
        assert_eq!(ds.sites(), ["SiteB".to_string(), "SiteA".to_string()]);
        assert_eq!(
            ds.site_options(),
            vec![
                SiteSelection::All,
                SiteSelection::Site("SiteB".into()),
                SiteSelection::Site("SiteA".into()),
            ]
        );
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(LaunchDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn test_site_selection() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::Site("A".into()).matches("B"));
        assert_eq!(SiteSelection::All.to_string(), "ALL");
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.label(), "Failure");
    }
}

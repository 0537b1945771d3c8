use std::collections::BTreeMap;

use super::filter::{filtered_records, records_for_site, PayloadRange};
use super::model::{LaunchDataset, LaunchRecord, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// SuccessSummary – pie chart table
// ---------------------------------------------------------------------------

/// Category label → count, in display order, plus the chart title.
///
/// Labels with a zero count are never present.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessSummary {
    pub title: String,
    pub slices: Vec<(String, usize)>,
}

impl SuccessSummary {
    /// Count for a label, `None` when the label is absent.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Pie chart data for the site dropdown.
///
/// * `All` – successful launches grouped by site, sites in order of first
///   successful launch.
/// * `Site(s)` – launches of `s` split into "Success" / "Failure", larger
///   count first. An outcome that never occurred is omitted.
pub fn site_success_summary(dataset: &LaunchDataset, site: &SiteSelection) -> SuccessSummary {
    match site {
        SiteSelection::All => {
            let mut slices: Vec<(String, usize)> = Vec::new();
            for rec in dataset.records().iter().filter(|r| r.outcome.is_success()) {
                match slices.iter_mut().find(|(s, _)| *s == rec.site) {
                    Some((_, n)) => *n += 1,
                    None => slices.push((rec.site.clone(), 1)),
                }
            }
            SuccessSummary {
                title: "All Successes per Launch Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (successes, failures) = records_for_site(dataset, site).fold(
                (0usize, 0usize),
                |(s, f), rec| match rec.outcome {
                    Outcome::Success => (s + 1, f),
                    Outcome::Failure => (s, f + 1),
                },
            );

            let mut slices: Vec<(String, usize)> = [
                (Outcome::Success, successes),
                (Outcome::Failure, failures),
            ]
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .map(|(o, n)| (o.label().to_string(), n))
            .collect();
            // Stable: ties keep Success first.
            slices.sort_by(|a, b| b.1.cmp(&a.1));

            SuccessSummary {
                title: format!("All Successes per {name}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ScatterView – payload vs. outcome table
// ---------------------------------------------------------------------------

/// Launches inside the payload window, plus the chart title.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterView {
    pub title: String,
    pub records: Vec<LaunchRecord>,
}

impl ScatterView {
    /// Scatter points `[payload, class]` grouped by booster version category.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<[f64; 2]>> {
        let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for rec in &self.records {
            groups
                .entry(rec.booster_category.as_str())
                .or_default()
                .push([rec.payload_kg, f64::from(rec.outcome.class())]);
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Scatter chart data: launches of the selected site(s) with
/// `range.lo <= payload <= range.hi`. An inverted range yields an empty view.
pub fn payload_correlation_view(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterView {
    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => format!("Correlation between Payload and Success for {name}"),
    };

    ScatterView {
        title,
        records: filtered_records(dataset, site, range).cloned().collect(),
    }
}

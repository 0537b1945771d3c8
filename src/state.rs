use std::sync::Arc;

use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::aggregate::{
    payload_correlation_view, site_success_summary, ScatterView, SuccessSummary,
};
use crate::data::filter::PayloadRange;
use crate::data::model::{LaunchDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Dashboard state / interaction controller
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Holds the two input slots (site dropdown, payload slider) and the two
/// chart tables derived from them. The UI calls `on_site_selected` /
/// `on_payload_range` when a widget changes and draws `pie` / `scatter`.
pub struct DashboardState {
    dataset: Arc<LaunchDataset>,

    /// Site dropdown value (`ALL` initially).
    pub selected_site: SiteSelection,

    /// Payload slider value (full dataset extent initially).
    pub payload_range: PayloadRange,

    /// Current pie chart table.
    pub pie: SuccessSummary,

    /// Current scatter chart table.
    pub scatter: ScatterView,

    /// Slider bounds and marks.
    pub slider: SliderConfig,

    site_colors: ColorMap,
    outcome_colors: ColorMap,
    booster_colors: ColorMap,
}

impl DashboardState {
    /// Build the initial state: all sites, full payload range, both charts computed.
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig) -> Self {
        let selected_site = SiteSelection::All;
        let payload_range = PayloadRange::of_dataset(&dataset);
        let pie = site_success_summary(&dataset, &selected_site);
        let scatter = payload_correlation_view(&dataset, &selected_site, payload_range);

        let site_colors = ColorMap::new(dataset.sites().iter().cloned());
        // Red for failures, cyan for successes.
        let outcome_colors = ColorMap::new([Outcome::Failure.label(), Outcome::Success.label()]);
        let mut boosters: Vec<&str> = dataset
            .records()
            .iter()
            .map(|r| r.booster_category.as_str())
            .collect();
        boosters.sort_unstable();
        let booster_colors = ColorMap::new(boosters);

        Self {
            dataset,
            selected_site,
            payload_range,
            pie,
            scatter,
            slider,
            site_colors,
            outcome_colors,
            booster_colors,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    // -- Pure handlers --

    /// Pie chart table for a dropdown value.
    pub fn pie_chart(&self, site: &SiteSelection) -> SuccessSummary {
        site_success_summary(&self.dataset, site)
    }

    /// Scatter chart table for a dropdown value and slider range.
    pub fn scatter_chart(&self, site: &SiteSelection, range: PayloadRange) -> ScatterView {
        payload_correlation_view(&self.dataset, site, range)
    }

    // -- Input slot changes --

    /// Dropdown changed: both charts depend on the site.
    pub fn on_site_selected(&mut self, site: SiteSelection) {
        log::debug!("site selected: {site}");
        self.pie = self.pie_chart(&site);
        self.scatter = self.scatter_chart(&site, self.payload_range);
        self.selected_site = site;
    }

    /// Slider moved: only the scatter chart depends on the range.
    pub fn on_payload_range(&mut self, range: PayloadRange) {
        log::debug!("payload range: {}..={} kg", range.lo, range.hi);
        self.payload_range = range;
        self.scatter = self.scatter_chart(&self.selected_site, range);
    }

    // -- Colours --

    /// Colour of a pie slice: per site for `ALL`, per outcome otherwise.
    pub fn slice_color(&self, label: &str) -> Color32 {
        match self.selected_site {
            SiteSelection::All => self.site_colors.color_for(label),
            SiteSelection::Site(_) => self.outcome_colors.color_for(label),
        }
    }

    /// Colour of a scatter series; stable regardless of the current filter.
    pub fn booster_color(&self, category: &str) -> Color32 {
        self.booster_colors.color_for(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn state() -> DashboardState {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteA", 1500.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("SiteB", 800.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("SiteB", 6000.0, Outcome::Failure, "FT"),
        ])
        .unwrap();
        DashboardState::new(Arc::new(ds), SliderConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let st = state();
        assert_eq!(st.selected_site, SiteSelection::All);
        assert_eq!(st.payload_range, PayloadRange::new(500.0, 6000.0));
        assert_eq!(st.pie.title, "All Successes per Launch Site");
        assert_eq!(st.pie.total(), 2);
        assert_eq!(st.scatter.len(), 4);
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let mut st = state();
        st.on_site_selected(SiteSelection::Site("SiteB".into()));

        assert_eq!(st.pie.title, "All Successes per SiteB");
        assert_eq!(st.pie.get("Success"), Some(1));
        assert_eq!(st.pie.get("Failure"), Some(1));
        assert_eq!(st.scatter.len(), 2);
        assert!(st.scatter.records.iter().all(|r| r.site == "SiteB"));
    }

    #[test]
    fn test_range_change_updates_scatter_only() {
        let mut st = state();
        let pie_before = st.pie.clone();

        st.on_payload_range(PayloadRange::new(0.0, 1000.0));
        assert_eq!(st.pie, pie_before);
        assert_eq!(st.scatter.len(), 2);

        // Site change keeps the current range.
        st.on_site_selected(SiteSelection::Site("SiteA".into()));
        assert_eq!(st.scatter.len(), 1);
        assert_eq!(st.scatter.records[0].payload_kg, 500.0);
    }

    #[test]
    fn test_inverted_range_empties_scatter() {
        let mut st = state();
        st.on_payload_range(PayloadRange::new(5000.0, 1000.0));
        assert!(st.scatter.is_empty());
    }

    #[test]
    fn test_handlers_are_pure() {
        let st = state();
        let site = SiteSelection::Site("SiteA".into());
        assert_eq!(st.pie_chart(&site), st.pie_chart(&site));
        assert_eq!(st.selected_site, SiteSelection::All);
    }

    #[test]
    fn test_colors() {
        let mut st = state();
        assert_ne!(st.slice_color("SiteA"), st.slice_color("SiteB"));
        assert_ne!(st.booster_color("FT"), st.booster_color("v1.0"));
        st.on_site_selected(SiteSelection::Site("SiteA".into()));
        assert_ne!(st.slice_color("Success"), st.slice_color("Failure"));
    }
}

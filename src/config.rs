use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed settings of the dashboard. There are no CLI flags or config files;
/// `Default` is the configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset read once at startup.
    pub data_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub slider: SliderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            slider: SliderConfig::default(),
        }
    }
}

/// Payload range slider bounds, in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick labels shown under the sliders.
    pub marks: Vec<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            marks: vec![0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0],
        }
    }
}

impl SliderConfig {
    /// Caption listing the marks, e.g. `0 · 2500 · 5000 · 7500 · 10000`.
    pub fn marks_caption(&self) -> String {
        self.marks
            .iter()
            .map(|m| format!("{m:.0}"))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

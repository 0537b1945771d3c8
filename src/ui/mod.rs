//! egui rendering of the dashboard: input widgets and the two charts.
pub mod panels;
pub mod plot;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::PayloadRange;
use crate::data::model::SiteSelection;
use crate::state::DashboardState;

/// Heading colour of the dashboard title.
const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Left side panel – input widgets
// ---------------------------------------------------------------------------

/// Render the left panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let options = state.dataset().site_options();
    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selected_site.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &options {
                if ui
                    .selectable_label(state.selected_site == *opt, opt.label())
                    .clicked()
                {
                    picked = Some(opt.clone());
                }
            }
        });
    if let Some(site) = picked {
        if site != state.selected_site {
            state.on_site_selected(site);
        }
    }

    ui.add_space(12.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let slider = state.slider.clone();
    let mut lo = state.payload_range.lo;
    let mut hi = state.payload_range.hi;
    // Only user edits are stepped and clamped; the dataset extent shown
    // initially must survive an untouched frame.
    ui.add(
        egui::Slider::new(&mut lo, slider.min..=slider.max)
            .step_by(slider.step)
            .clamping(egui::SliderClamping::Edits)
            .text("from"),
    );
    ui.add(
        egui::Slider::new(&mut hi, slider.min..=slider.max)
            .step_by(slider.step)
            .clamping(egui::SliderClamping::Edits)
            .text("to"),
    );
    ui.small(slider.marks_caption());

    let range = PayloadRange::new(lo, hi);
    if range != state.payload_range {
        state.on_payload_range(range);
    }
    if range.is_inverted() {
        ui.label(RichText::new("Lower bound is above upper bound").color(Color32::RED));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard title and dataset summary.
pub fn top_bar(ui: &mut Ui, title: &str, state: &DashboardState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).size(32.0).strong().color(TITLE_COLOR));
    });
    ui.horizontal(|ui: &mut Ui| {
        let ds = state.dataset();
        ui.label(format!(
            "{} launches loaded from {} sites, {} in payload range",
            ds.len(),
            ds.sites().len(),
            state.scatter.len()
        ));
    });
}

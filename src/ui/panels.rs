use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = state.store.dataset();
    let years: Vec<i32> = dataset.years.iter().copied().collect();
    let bounds = dataset.magnitude_bounds;

    // ---- Year selector ----
    ui.strong("Year");
    let current_year = state.criteria.year;
    let mut picked_year = None;
    egui::ComboBox::from_id_salt("year")
        .selected_text(current_year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for &year in &years {
                if ui
                    .selectable_label(current_year == year, year.to_string())
                    .clicked()
                {
                    picked_year = Some(year);
                }
            }
        });
    if let Some(year) = picked_year {
        if let Err(e) = state.set_year(year) {
            log::warn!("Ignoring year selection: {e}");
        }
    }
    ui.add_space(8.0);

    // ---- Magnitude range ----
    ui.strong("Magnitude range");
    let mut low = state.criteria.magnitude.low;
    let mut high = state.criteria.magnitude.high;
    if ui
        .add(egui::Slider::new(&mut low, bounds.low..=bounds.high).step_by(0.1).text("min"))
        .changed()
    {
        state.set_magnitude_low(low);
    }
    if ui
        .add(egui::Slider::new(&mut high, bounds.low..=bounds.high).step_by(0.1).text("max"))
        .changed()
    {
        state.set_magnitude_high(high);
    }
    if ui.small_button("Full range").clicked() {
        state.set_magnitude_low(bounds.low);
        state.set_magnitude_high(bounds.high);
    }

    ui.separator();
    ui.label(format!("Selection: {}", state.criteria));
    ui.label(
        RichText::new(format!(
            "{} of {} records match",
            state.visible_indices.len(),
            state.store.dataset().len()
        ))
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let dataset = state.store.dataset();
        let source = state
            .store
            .source()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(format!(
            "{source}: {} records loaded, {} dropped while cleaning",
            dataset.len(),
            dataset.dropped_rows
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open earthquake data")
        .add_filter("Supported files", &["csv", "tsv", "tab", "json", "parquet", "pq"])
        .add_filter("CSV / TSV", &["csv", "tsv", "tab"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::catalog::Catalog;
use crate::data::sections::SectionFilter;
use crate::state::{AppState, SelectionAction};

// ---------------------------------------------------------------------------
// Left side panel – zone tabs and level filter
// ---------------------------------------------------------------------------

/// Render the left panel: zone tabs, level selector and progress controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Knowledge Zones");
    ui.separator();

    // Clone what we need so we can mutate state inside the loop.
    let zones = state.catalog.registry.zones().to_vec();
    let selected = state.selection.selected_zone.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 140.0).max(120.0))
        .show(ui, |ui: &mut Ui| {
            for zone in &zones {
                let count = state.catalog.registry.courses_in(zone).len();
                let text = RichText::new(format!("{zone}  ({count})"))
                    .color(state.zone_colors.color_for(zone));
                if ui.selectable_label(selected == *zone, text).clicked() {
                    state.close_course();
                    state.dispatch(SelectionAction::SelectZone(zone.clone()));
                }
            }
        });

    ui.separator();

    // ---- Level selector ----
    ui.strong("Level");
    let current = state.selection.section_filter.clone();
    egui::ComboBox::from_id_salt("section_filter")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in SectionFilter::options() {
                if ui
                    .selectable_label(current == option, option.label())
                    .clicked()
                {
                    state.dispatch(SelectionAction::SetSectionFilter(option));
                }
            }
        });

    ui.separator();

    // ---- Progress ----
    let viewed = state.progress.viewed().len();
    ui.label(format!("{viewed} trainings completed"));
    if ui
        .add_enabled(viewed > 0, egui::Button::new("Reset progress"))
        .clicked()
    {
        state.clear_progress();
    }
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

        ui.label(format!(
            "{} courses loaded, {} shown",
            state.catalog.courses.len(),
            state
                .view
                .sections
                .iter()
                .map(|s| s.courses.len())
                .sum::<usize>()
        ));

        if let Some(tab) = state.selection.tab_param() {
            ui.separator();
            ui.label(RichText::new(format!("?tab={tab}")).monospace().weak());
        }

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
        .set_title("Open course spreadsheet")
        .add_filter("Supported files", &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json"])
        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match Catalog::load(&path) {
            Ok(catalog) => state.set_catalog(catalog),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

use eframe::egui;

use crate::config::AcademyConfig;
use crate::data::catalog::Catalog;
use crate::progress::ViewedTrainings;
use crate::state::{AppState, SelectionAction};
use crate::ui::{courses, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AcademyApp {
    pub state: AppState,
}

impl AcademyApp {
    /// Build the app from settings: load progress, the catalog, then apply
    /// the initial tab.
    pub fn new(config: &AcademyConfig, initial_tab: Option<String>) -> Self {
        let mut state = AppState {
            related_limit: config.related_limit,
            hero_from_first_course: config.hero_from_first_course,
            ..AppState::default()
        };

        match config.progress_file() {
            Ok(path) => state.progress = ViewedTrainings::load(&path),
            Err(e) => log::warn!("Viewed trainings will not be saved: {e}"),
        }

        state.set_catalog(Catalog::load_or_default(&config.spreadsheet_path));
        state.dispatch(SelectionAction::ApplyTabParam(initial_tab));
        Self { state }
    }
}

impl eframe::App for AcademyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: zones and level filter ----
        egui::SidePanel::left("zone_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: listing or course detail ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.open_course.is_some() {
                courses::course_detail(ui, &mut self.state);
            } else {
                courses::zone_listing(ui, &mut self.state);
            }
        });
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::BadgeVariant;
use crate::data::model::Course;
use crate::data::zones::ALL_TRAININGS;
use crate::progress::ViewedTrainings;
use crate::state::AppState;

const CARD_WIDTH: f32 = 260.0;

// ---------------------------------------------------------------------------
// Zone listing (central panel)
// ---------------------------------------------------------------------------

/// Render the selected zone: heading, description and section buckets.
pub fn zone_listing(ui: &mut Ui, state: &mut AppState) {
    let view = &state.view;

    if view.selected_zone == ALL_TRAININGS {
        ui.heading(RichText::new(&state.catalog.hero.title).size(26.0));
        ui.label(state.catalog.hero.description.as_str());
        ui.add_space(12.0);
    }

    ui.heading(format!("{} Courses", view.selected_zone));
    ui.label(RichText::new(&view.description).weak());
    ui.separator();

    if view.sections.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No courses found  (File → Open…)");
        });
        return;
    }

    // Opening a course mutates state, so remember the click and apply it
    // after the listing is drawn.
    let mut clicked: Option<Course> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for bucket in &view.sections {
                ui.add_space(8.0);
                ui.strong(RichText::new(&bucket.label).size(18.0));
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    for course in &bucket.courses {
                        if course_card(ui, course, &state.progress, "View Course") {
                            clicked = Some(course.clone());
                        }
                    }
                });
            }
        });

    if let Some(course) = clicked {
        state.open_course(course);
    }
}

// ---------------------------------------------------------------------------
// Course detail
// ---------------------------------------------------------------------------

/// Render the open course with its related trainings.
pub fn course_detail(ui: &mut Ui, state: &mut AppState) {
    let Some(course) = state.open_course.clone() else {
        return;
    };

    if ui.button("⬅ Back to All Trainings").clicked() {
        state.close_course();
        return;
    }
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        badges(ui, &course, &state.progress);
    });
    ui.heading(RichText::new(&course.title).size(26.0));
    ui.horizontal(|ui: &mut Ui| {
        if !course.knowledge_zone.is_empty() {
            ui.label(RichText::new(&course.knowledge_zone).weak());
        }
        ui.label(RichText::new(format!("/academy/training/{}", course.slug())).monospace().weak());
    });
    ui.add_space(8.0);
    ui.label(course.description.as_str());
    ui.separator();

    let related: Vec<Course> = state.related_to_open().into_iter().cloned().collect();
    if related.is_empty() {
        return;
    }

    ui.strong(RichText::new("Related Trainings").size(18.0));
    let mut clicked: Option<Course> = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for other in &related {
            if course_card(ui, other, &state.progress, "View Training") {
                clicked = Some(other.clone());
            }
        }
    });

    if let Some(other) = clicked {
        state.open_course(other);
    }
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// Draw one course card. Returns `true` when its button was clicked.
fn course_card(ui: &mut Ui, course: &Course, progress: &ViewedTrainings, action: &str) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                badges(ui, course, progress);
            });
            ui.strong(course.title.as_str());
            ui.label(RichText::new(&course.description).weak());
            ui.add_space(4.0);
            clicked = ui.button(action).clicked();
        });
    });
    clicked
}

/// Level badge (raw section text) and the "Completed" marker.
fn badges(ui: &mut Ui, course: &Course, progress: &ViewedTrainings) {
    if !course.section.is_empty() {
        let color = BadgeVariant::for_section(&course.section).color();
        ui.label(RichText::new(&course.section).color(color).strong());
    }
    if progress.has_viewed(&course.id) {
        ui.label(RichText::new("✔ Completed").color(Color32::LIGHT_GREEN));
    }
}

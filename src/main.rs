use academy_catalog::app::AcademyApp;
use academy_catalog::config::AcademyConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AcademyConfig::load_or_default().unwrap_or_else(|e| {
        log::error!("Failed to load settings, using defaults: {e}");
        AcademyConfig::default()
    });
    // Optional first argument plays the role of the `tab` URL parameter.
    let initial_tab = std::env::args().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Academy – Course Catalog",
        options,
        Box::new(move |_cc| Ok(Box::new(AcademyApp::new(&config, initial_tab)))),
    )
}

// Day Grid Application
// Main entry point

use daygrid::ui_egui::PlannerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Day Grid");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_min_inner_size([680.0, 520.0])
            .with_title("Day Grid"),
        ..Default::default()
    };
    eframe::run_native(
        "Day Grid",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)))),
    )
}

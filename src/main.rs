use std::path::PathBuf;

use eframe::egui;
use laptop_finder::app::LaptopFinderApp;
use laptop_finder::config;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Laptop Finder",
        options,
        Box::new(|_cc| {
            Ok(Box::new(LaptopFinderApp::new(PathBuf::from(
                config::DEFAULT_DATA_FILE,
            ))))
        }),
    )
}

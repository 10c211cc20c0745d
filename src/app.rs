use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;

use crate::config;
use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LaptopFinderApp {
    pub state: AppState,
}

impl LaptopFinderApp {
    /// Start the app and kick off loading `data_file` in the background.
    pub fn new(data_file: PathBuf) -> Self {
        let mut state = AppState::default();
        state.begin_load(data_file);
        Self { state }
    }
}

impl eframe::App for LaptopFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.poll_load() {
            ctx.request_repaint();
        }
        if self.state.loading {
            ctx.request_repaint_after(Duration::from_millis(config::LOAD_POLL_MS));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: facets ----
        egui::SidePanel::left("filter_panel")
            .default_width(config::SIDE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::result_panel(ui, &self.state);
        });
    }
}

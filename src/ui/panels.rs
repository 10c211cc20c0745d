use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config;
use crate::data::facet::Facet;
use crate::state::{AppState, ResultView};

// ---------------------------------------------------------------------------
// Left side panel – facet checkboxes
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Filters");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Reset all").clicked() {
                state.reset_all();
            }
        });
    });
    ui.separator();

    if state.dataset.is_none() {
        if state.loading {
            ui.horizontal(|ui: &mut Ui| {
                ui.spinner();
                ui.label("Loading catalogue…");
            });
        } else {
            ui.label("No catalogue loaded.");
        }
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for facet in Facet::ALL {
                facet_section(ui, state, facet);
            }
        });
}

/// One collapsible group of checkboxes.
fn facet_section(ui: &mut Ui, state: &mut AppState, facet: Facet) {
    let options = config::facet_options(facet);
    let header_text = format!(
        "{}  ({}/{})",
        facet.label(),
        state.selected_count(facet),
        options.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(facet.key())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if state.selected_count(facet) > 0 && ui.small_button("Clear").clicked() {
                state.clear_facet(facet);
            }

            for (index, &(value, label)) in options.iter().enumerate() {
                let mut checked = state.is_selected(facet, value);
                let text = format!("{label}  ({})", state.option_count(facet, index));
                if ui.checkbox(&mut checked, text).changed() {
                    state.set_option(facet, value, checked);
                }
            }
        });
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
            if ui
                .add_enabled(state.source.is_some() && !state.loading, egui::Button::new("Reload"))
                .clicked()
            {
                if let Some(path) = state.source.clone() {
                    state.begin_load(path);
                }
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export visible…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.dataset.is_some() {
            ui.label(state.count_label());
            ui.separator();
        }

        ui.selectable_value(&mut state.view, ResultView::Cards, "Cards");
        ui.selectable_value(&mut state.view, ResultView::Table, "Table");

        if state.loading {
            ui.separator();
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open laptop catalogue")
        .add_filter("Supported files", &["csv", "txt", "json"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.begin_load(path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export visible laptops")
        .add_filter("CSV", &["csv"])
        .set_file_name("laptops.csv")
        .save_file();

    if let Some(path) = file {
        match state.export_visible(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{columns, Record};
use crate::state::{AppState, ResultView};

const PRICE_COLOR: Color32 = Color32::from_rgb(0x0f, 0x96, 0x9c);

// ---------------------------------------------------------------------------
// Result list (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered laptops in the central panel.
pub fn result_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.heading("Open a catalogue to browse laptops  (File → Open…)");
            }
        });
        return;
    }

    ui.heading(state.count_label());
    ui.separator();

    match state.view {
        ResultView::Cards => cards(ui, state),
        ResultView::Table => table(ui, state),
    }
}

fn cards(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for record in state.visible_records() {
                egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(record.title()).heading());

                    let category = record.get(columns::JOB_CATEGORY);
                    let color = state
                        .color_map
                        .as_ref()
                        .map_or(Color32::GRAY, |cm| cm.color_for(category));
                    ui.label(RichText::new(category).italics().color(color));

                    ui.label(spec_line(record));
                    ui.label(RichText::new(price_line(record)).strong().color(PRICE_COLOR));

                    ui.horizontal(|ui: &mut Ui| {
                        if let Some(url) = record.buy_url() {
                            ui.hyperlink_to("Buy", url);
                        }
                        ui.hyperlink_to("▶ Reviews", record.review_url());
                    });
                });
                ui.add_space(6.0);
            }
        });
}

const TABLE_COLUMNS: [(&str, &str); 8] = [
    ("Category", columns::JOB_CATEGORY),
    ("CPU", columns::CPU),
    ("RAM", columns::RAM),
    ("Storage", columns::STORAGE),
    ("Display", columns::DISPLAY),
    ("Battery", columns::BATTERY),
    ("Range", columns::PRICE_RANGE),
    ("Price (ILS)", columns::PRICE_ILS),
];

fn table(ui: &mut Ui, state: &AppState) {
    let records: Vec<&Record> = state.visible_records().collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto(), TABLE_COLUMNS.len())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Laptop");
            });
            for (name, _) in TABLE_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
            header.col(|ui: &mut Ui| {
                ui.strong("Links");
            });
        })
        .body(|body| {
            body.rows(22.0, records.len(), |mut row| {
                let record = records[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(record.title());
                });
                for (_, column) in TABLE_COLUMNS {
                    row.col(|ui: &mut Ui| {
                        ui.label(record.get(column));
                    });
                }
                row.col(|ui: &mut Ui| {
                    if let Some(url) = record.buy_url() {
                        ui.hyperlink_to("Buy", url);
                    }
                    ui.hyperlink_to("Reviews", record.review_url());
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Card text
// ---------------------------------------------------------------------------

fn or_na(s: &str) -> &str {
    if s.is_empty() {
        "N/A"
    } else {
        s
    }
}

/// `CPU • RAM RAM • Storage`, with `N/A` for blanks.
pub fn spec_line(record: &Record) -> String {
    format!(
        "{} • {} RAM • {}",
        or_na(record.get(columns::CPU)),
        or_na(record.get(columns::RAM)),
        or_na(record.get(columns::STORAGE))
    )
}

pub fn price_line(record: &Record) -> String {
    format!("{} ILS", record.get(columns::PRICE_ILS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_line_fills_blanks() {
        let r: Record = [(columns::CPU, "Intel Core i7"), (columns::RAM, "16GB")]
            .into_iter()
            .collect();
        assert_eq!(spec_line(&r), "Intel Core i7 • 16GB RAM • N/A");
        assert_eq!(spec_line(&Record::default()), "N/A • N/A RAM • N/A");
    }

    #[test]
    fn price_line_keeps_raw_text() {
        let r: Record = [(columns::PRICE_ILS, "4,999")].into_iter().collect();
        assert_eq!(price_line(&r), "4,999 ILS");
    }
}

use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::ui::charts::format_usd;

const COLUMNS: [&str; 8] = [
    "Year",
    "Seniority",
    "Contract",
    "Company size",
    "Role",
    "Remote",
    "Country",
    "Salary (USD)",
];

/// Striped, row-virtualised table of the filtered records.
pub fn detail_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Detailed data");
    if state.visible_indices.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(400.0)
        .columns(Column::auto().at_least(60.0), COLUMNS.len() - 1)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.year.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.seniority);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.contract_type);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.company_size);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.role);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.remote_type);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.residence_country_code);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_usd(rec.salary_usd));
                });
            });
        });
}

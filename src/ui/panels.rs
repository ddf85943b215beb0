use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FilterField;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible section per filterable
/// column, with All/None buttons and per-value checkboxes.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the option lists so we can mutate state inside the loop.
    let years: Vec<i32> = dataset.years.iter().copied().collect();
    let seniorities: Vec<String> = dataset.seniorities.iter().cloned().collect();
    let contract_types: Vec<String> = dataset.contract_types.iter().cloned().collect();
    let company_sizes: Vec<String> = dataset.company_sizes.iter().cloned().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            year_section(ui, state, &years);
            string_section(ui, state, FilterField::Seniority, &seniorities);
            string_section(ui, state, FilterField::ContractType, &contract_types);
            string_section(ui, state, FilterField::CompanySize, &company_sizes);
        });
}

/// Collapsing header with selected/total counts, All/None buttons and a
/// caller-supplied body of value checkboxes.
fn section_frame(
    ui: &mut Ui,
    state: &mut AppState,
    field: FilterField,
    n_selected: usize,
    n_total: usize,
    body: impl FnOnce(&mut Ui, &mut AppState),
) {
    let header_text = format!("{}  ({n_selected}/{n_total})", field.label());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(field.label())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(field);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(field);
                }
            });
            body(ui, state);
        });
}

fn year_section(ui: &mut Ui, state: &mut AppState, years: &[i32]) {
    let n_selected = state.filters.years.len();
    section_frame(
        ui,
        state,
        FilterField::Year,
        n_selected,
        years.len(),
        |ui, state| {
            for &year in years {
                let mut checked = state.filters.years.contains(&year);
                if ui.checkbox(&mut checked, year.to_string()).changed() {
                    state.toggle_year(year);
                }
            }
        },
    );
}

fn string_section(ui: &mut Ui, state: &mut AppState, field: FilterField, values: &[String]) {
    let selected = match field {
        FilterField::Year => return,
        FilterField::Seniority => &state.filters.seniorities,
        FilterField::ContractType => &state.filters.contract_types,
        FilterField::CompanySize => &state.filters.company_sizes,
    };
    let n_selected = selected.len();

    section_frame(ui, state, field, n_selected, values.len(), |ui, state| {
        for value in values {
            let selected = match field {
                FilterField::Year => unreachable!(),
                FilterField::Seniority => &state.filters.seniorities,
                FilterField::ContractType => &state.filters.contract_types,
                FilterField::CompanySize => &state.filters.company_sizes,
            };
            let mut checked = selected.contains(value);
            if ui.checkbox(&mut checked, value).changed() {
                state.toggle_value(field, value);
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
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} match the filters",
                ds.len(),
                state.visible_indices.len()
            ));
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
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} salary records spanning {:?}",
                    dataset.len(),
                    dataset.years
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use crate::color::ColorMap;
use crate::data::aggregate::{build_tables, AggregationTables};
use crate::data::filter::{filtered_indices, FilterField, FilterSelection};
use crate::data::metrics::{summarize, MetricsSummary};
use crate::data::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `visible_indices`, `summary` and `tables` are caches of pure functions
/// of (dataset, filters); `recompute` refreshes all three in one pass
/// after every filter change.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<SalaryDataset>,

    /// Per-column filter selections.
    pub filters: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPI scalars over the visible records (cached).
    pub summary: MetricsSummary,

    /// The four chart tables over the visible records (cached).
    pub tables: AggregationTables,

    /// Colours for the work-arrangement proportion chart.
    pub arrangement_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterSelection::default(),
            visible_indices: Vec::new(),
            summary: MetricsSummary::default(),
            tables: AggregationTables::default(),
            arrangement_colors: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: select every filter value and derive
    /// the initial subset, metrics and tables.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.filters = FilterSelection::all_of(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Recompute every derived result after a filter change.
    pub fn recompute(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.filters);
        self.summary = summarize(ds, &self.visible_indices);
        self.tables = build_tables(ds, &self.visible_indices);
        self.arrangement_colors =
            ColorMap::new(self.tables.work_arrangements.iter().map(|c| c.label.as_str()));
    }

    /// Toggle a single year in the year filter.
    pub fn toggle_year(&mut self, year: i32) {
        if !self.filters.years.remove(&year) {
            self.filters.years.insert(year);
        }
        self.recompute();
    }

    /// Toggle a single value in one of the string-valued filters.
    pub fn toggle_value(&mut self, field: FilterField, value: &str) {
        let selected = match field {
            FilterField::Year => return,
            FilterField::Seniority => &mut self.filters.seniorities,
            FilterField::ContractType => &mut self.filters.contract_types,
            FilterField::CompanySize => &mut self.filters.company_sizes,
        };
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.recompute();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, field: FilterField) {
        if let Some(ds) = self.dataset.take() {
            self.filters.select_all(field, &ds);
            self.dataset = Some(ds);
            self.recompute();
        }
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, field: FilterField) {
        self.filters.select_none(field);
        self.recompute();
    }
}

use std::collections::BTreeSet;

use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per filterable column
// ---------------------------------------------------------------------------

/// The four filterable columns, in the order their widgets appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Year,
    Seniority,
    ContractType,
    CompanySize,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Year,
        FilterField::Seniority,
        FilterField::ContractType,
        FilterField::CompanySize,
    ];

    /// Human-readable widget heading.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Year => "Year",
            FilterField::Seniority => "Seniority",
            FilterField::ContractType => "Contract type",
            FilterField::CompanySize => "Company size",
        }
    }
}

/// Allowed-value sets per filterable column, fixed shape.
///
/// A record passes when its value for every column is a member of the
/// corresponding set. An emptied set admits nothing: there is no implicit
/// "empty means all" fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contract_types: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection with every distinct value of every column allowed, the
    /// state a freshly loaded dataset starts in.
    pub fn all_of(dataset: &SalaryDataset) -> Self {
        FilterSelection {
            years: dataset.years.clone(),
            seniorities: dataset.seniorities.clone(),
            contract_types: dataset.contract_types.clone(),
            company_sizes: dataset.company_sizes.clone(),
        }
    }

    /// Select every value of one column.
    pub fn select_all(&mut self, field: FilterField, dataset: &SalaryDataset) {
        match field {
            FilterField::Year => self.years = dataset.years.clone(),
            FilterField::Seniority => self.seniorities = dataset.seniorities.clone(),
            FilterField::ContractType => self.contract_types = dataset.contract_types.clone(),
            FilterField::CompanySize => self.company_sizes = dataset.company_sizes.clone(),
        }
    }

    /// Clear one column's selection entirely.
    pub fn select_none(&mut self, field: FilterField) {
        match field {
            FilterField::Year => self.years.clear(),
            FilterField::Seniority => self.seniorities.clear(),
            FilterField::ContractType => self.contract_types.clear(),
            FilterField::CompanySize => self.company_sizes.clear(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current selection, in the
/// dataset's original order.
///
/// Logical AND across the four columns, set membership within a column.
/// Any empty set short-circuits to an empty result.
pub fn filtered_indices(dataset: &SalaryDataset, selection: &FilterSelection) -> Vec<usize> {
    if selection.years.is_empty()
        || selection.seniorities.is_empty()
        || selection.contract_types.is_empty()
        || selection.company_sizes.is_empty()
    {
        return Vec::new();
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.years.contains(&rec.year)
                && selection.seniorities.contains(&rec.seniority)
                && selection.contract_types.contains(&rec.contract_type)
                && selection.company_sizes.contains(&rec.company_size)
        })
        .map(|(i, _)| i)
        .collect()
}

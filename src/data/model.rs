use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single salary observation (one row of the source table).
///
/// Field names are the column-name contract shared by all loaders: a CSV
/// header, JSON object key or Parquet column must use exactly these names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Survey year.
    pub year: i32,
    /// Seniority tier label (e.g. "Junior", "Senior").
    pub seniority: String,
    /// Employment contract kind.
    pub contract_type: String,
    /// Company size category (small/medium/large).
    pub company_size: String,
    /// Job title.
    pub role: String,
    /// Work arrangement (on-site / hybrid / remote).
    pub remote_type: String,
    /// ISO3 country code of residence.
    pub residence_country_code: String,
    /// Annualized salary normalized to USD. Non-negative, checked at load.
    pub salary_usd: f64,
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset with the distinct values of each filterable
/// column precomputed. Immutable after load; filtering never touches it.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// All records (rows), in source order.
    pub records: Vec<SalaryRecord>,
    /// Distinct survey years, sorted.
    pub years: BTreeSet<i32>,
    /// Distinct seniority labels, sorted.
    pub seniorities: BTreeSet<String>,
    /// Distinct contract kinds, sorted.
    pub contract_types: BTreeSet<String>,
    /// Distinct company sizes, sorted.
    pub company_sizes: BTreeSet<String>,
}

impl SalaryDataset {
    /// Build the per-column distinct-value sets from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contract_types = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            seniorities.insert(rec.seniority.clone());
            contract_types.insert(rec.contract_type.clone());
            company_sizes.insert(rec.company_size.clone());
        }

        SalaryDataset {
            records,
            years,
            seniorities,
            contract_types,
            company_sizes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use std::collections::BTreeMap;

use super::model::SalaryDataset;

/// Number of roles shown in the top-roles chart.
pub const TOP_ROLES_LIMIT: usize = 10;

/// Number of equal-width buckets in the salary histogram.
pub const DISTRIBUTION_BUCKETS: usize = 30;

/// The role whose per-country averages feed the regional chart.
pub const REGIONAL_ROLE: &str = "Data Scientist";

// ---------------------------------------------------------------------------
// Table row types
// ---------------------------------------------------------------------------

/// (category, mean salary) pair for the averaged tables.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverage {
    pub label: String,
    pub mean_salary: f64,
}

/// (category, occurrence count) pair for the proportion table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// One histogram bucket, the half-open interval `[lower, upper)`.
/// The last bucket of a distribution is closed at the subset maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// The four derived tables feeding the chart grid, recomputed together on
/// every filter change. Each is empty when the subset is empty.
#[derive(Debug, Clone, Default)]
pub struct AggregationTables {
    /// Top roles by mean salary, ascending by mean (largest drawn topmost).
    pub top_roles: Vec<CategoryAverage>,
    /// Salary histogram buckets, ascending by bound.
    pub salary_distribution: Vec<SalaryBucket>,
    /// Work-arrangement counts, first-seen subset order.
    pub work_arrangements: Vec<CategoryCount>,
    /// Mean salary of the fixed regional role per ISO3 country, sorted by
    /// country code. Empty when no record has that role.
    pub data_scientist_by_country: Vec<CategoryAverage>,
}

/// Build all four tables for the records at `indices`.
pub fn build_tables(dataset: &SalaryDataset, indices: &[usize]) -> AggregationTables {
    AggregationTables {
        top_roles: top_roles_by_mean_salary(dataset, indices),
        salary_distribution: salary_distribution(dataset, indices),
        work_arrangements: work_arrangement_counts(dataset, indices),
        data_scientist_by_country: regional_average_for_role(dataset, indices, REGIONAL_ROLE),
    }
}

// ---------------------------------------------------------------------------
// (a) Top roles by mean salary
// ---------------------------------------------------------------------------

/// Mean salary per role, keeping the [`TOP_ROLES_LIMIT`] highest means.
///
/// Ties (both at the cut-off and in the final order) are broken
/// alphabetically by role name, which makes the chart deterministic.
pub fn top_roles_by_mean_salary(dataset: &SalaryDataset, indices: &[usize]) -> Vec<CategoryAverage> {
    // BTreeMap keys are sorted, so equal means stay in alphabetical order
    // through the stable sorts below.
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let entry = groups.entry(rec.role.as_str()).or_insert((0.0, 0));
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }

    let mut means: Vec<CategoryAverage> = groups
        .into_iter()
        .map(|(role, (sum, count))| CategoryAverage {
            label: role.to_string(),
            mean_salary: sum / count as f64,
        })
        .collect();

    // Descending cut-off first: the stable sort keeps equal means in the
    // map's alphabetical order, so ties at the boundary keep the
    // alphabetically-first roles.
    means.sort_by(|a, b| b.mean_salary.total_cmp(&a.mean_salary));
    means.truncate(TOP_ROLES_LIMIT);
    // Re-sort ascending rather than reversing, which would flip tied
    // groups to reverse-alphabetical order.
    means.sort_by(|a, b| {
        a.mean_salary
            .total_cmp(&b.mean_salary)
            .then_with(|| a.label.cmp(&b.label))
    });
    means
}

// ---------------------------------------------------------------------------
// (b) Salary distribution
// ---------------------------------------------------------------------------

/// Partition the subset's salaries into [`DISTRIBUTION_BUCKETS`] equal-width
/// buckets spanning `[min, max]`.
///
/// Buckets are half-open `[lo, hi)`, except the last which is closed so the
/// maximum is counted. A degenerate span (`min == max`, which includes the
/// one-record case) collapses to a single bucket holding every record.
pub fn salary_distribution(dataset: &SalaryDataset, indices: &[usize]) -> Vec<SalaryBucket> {
    if indices.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &i in indices {
        let v = dataset.records[i].salary_usd;
        min = min.min(v);
        max = max.max(v);
    }

    if min == max {
        return vec![SalaryBucket {
            lower: min,
            upper: max,
            count: indices.len(),
        }];
    }

    let width = (max - min) / DISTRIBUTION_BUCKETS as f64;
    let mut counts = [0usize; DISTRIBUTION_BUCKETS];
    for &i in indices {
        let v = dataset.records[i].salary_usd;
        // Clamping folds v == max (and any float rounding above it) into
        // the last bucket, keeping the total count conserved.
        let bucket = (((v - min) / width) as usize).min(DISTRIBUTION_BUCKETS - 1);
        counts[bucket] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(b, &count)| SalaryBucket {
            lower: min + b as f64 * width,
            upper: min + (b + 1) as f64 * width,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// (c) Work-arrangement proportions
// ---------------------------------------------------------------------------

/// Occurrence counts by `remote_type`, in first-seen subset order.
/// The UI turns these into percentages of the subset total.
pub fn work_arrangement_counts(dataset: &SalaryDataset, indices: &[usize]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for &i in indices {
        let value = &dataset.records[i].remote_type;
        match counts.iter_mut().find(|c| &c.label == value) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                label: value.clone(),
                count: 1,
            }),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// (d) Regional average for a fixed role
// ---------------------------------------------------------------------------

/// Mean salary per residence country for records whose `role` equals
/// `role`, sorted by ISO3 code. Empty when nothing matches.
pub fn regional_average_for_role(
    dataset: &SalaryDataset,
    indices: &[usize],
    role: &str,
) -> Vec<CategoryAverage> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        if rec.role != role {
            continue;
        }
        let entry = groups
            .entry(rec.residence_country_code.as_str())
            .or_insert((0.0, 0));
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(country, (sum, count))| CategoryAverage {
            label: country.to_string(),
            mean_salary: sum / count as f64,
        })
        .collect()
}

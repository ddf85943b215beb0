use std::collections::HashMap;

use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Summary metrics (the KPI strip)
// ---------------------------------------------------------------------------

/// Scalar KPIs over the current filtered subset.
///
/// For an empty subset every field is a sentinel (`0`, `0`, `0`, `""`)
/// rather than an error; callers check `record_count` before treating the
/// numbers as meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSummary {
    pub mean_salary: f64,
    pub max_salary: f64,
    pub record_count: usize,
    pub most_frequent_role: String,
}

/// Compute the summary metrics for the records at `indices`.
///
/// `most_frequent_role` is the stable mode: highest occurrence count, ties
/// broken by earliest first appearance in subset order.
pub fn summarize(dataset: &SalaryDataset, indices: &[usize]) -> MetricsSummary {
    if indices.is_empty() {
        return MetricsSummary::default();
    }

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    // role → (occurrence count, position of first occurrence)
    let mut role_counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (pos, &i) in indices.iter().enumerate() {
        let rec = &dataset.records[i];
        sum += rec.salary_usd;
        max = max.max(rec.salary_usd);
        role_counts
            .entry(rec.role.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, pos));
    }

    let most_frequent_role = role_counts
        .into_iter()
        .max_by_key(|&(_, (count, first_seen))| (count, std::cmp::Reverse(first_seen)))
        .map(|(role, _)| role.to_string())
        .unwrap_or_default();

    MetricsSummary {
        mean_salary: sum / indices.len() as f64,
        max_salary: max,
        record_count: indices.len(),
        most_frequent_role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SalaryRecord;

    fn record(role: &str, salary_usd: f64) -> SalaryRecord {
        SalaryRecord {
            year: 2023,
            seniority: "Senior".to_string(),
            contract_type: "Full-time".to_string(),
            company_size: "Large".to_string(),
            role: role.to_string(),
            remote_type: "Remote".to_string(),
            residence_country_code: "USA".to_string(),
            salary_usd,
        }
    }

    #[test]
    fn empty_subset_yields_the_zero_sentinel() {
        let ds = SalaryDataset::from_records(Vec::new());
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.mean_salary, 0.0);
        assert_eq!(summary.max_salary, 0.0);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.most_frequent_role, "");
    }

    #[test]
    fn mean_and_max_over_a_subset() {
        let ds = SalaryDataset::from_records(vec![
            record("Data Analyst", 40_000.0),
            record("Data Analyst", 60_000.0),
            record("Data Engineer", 200_000.0),
        ]);
        // Restrict to the analysts.
        let summary = summarize(&ds, &[0, 1]);
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.mean_salary, 50_000.0);
        assert_eq!(summary.max_salary, 60_000.0);
        assert_eq!(summary.most_frequent_role, "Data Analyst");
    }

    #[test]
    fn mean_sits_between_min_and_max() {
        let ds = SalaryDataset::from_records(vec![
            record("A", 31_000.0),
            record("B", 77_500.0),
            record("C", 123_456.0),
            record("D", 99_000.0),
        ]);
        let indices: Vec<usize> = (0..ds.len()).collect();
        let summary = summarize(&ds, &indices);
        assert!(31_000.0 <= summary.mean_salary);
        assert!(summary.mean_salary <= summary.max_salary);
        assert_eq!(summary.max_salary, 123_456.0);
    }

    #[test]
    fn mode_prefers_the_higher_count() {
        let ds = SalaryDataset::from_records(vec![
            record("Data Engineer", 1.0),
            record("Data Scientist", 1.0),
            record("Data Scientist", 1.0),
        ]);
        let summary = summarize(&ds, &[0, 1, 2]);
        assert_eq!(summary.most_frequent_role, "Data Scientist");
    }

    #[test]
    fn mode_tie_goes_to_first_seen() {
        let ds = SalaryDataset::from_records(vec![
            record("Data Scientist", 1.0),
            record("Data Engineer", 1.0),
            record("Data Engineer", 1.0),
            record("Data Scientist", 1.0),
        ]);
        let summary = summarize(&ds, &[0, 1, 2, 3]);
        assert_eq!(summary.most_frequent_role, "Data Scientist");

        // The subset order decides, not the dataset order.
        let summary = summarize(&ds, &[1, 0, 2, 3]);
        assert_eq!(summary.most_frequent_role, "Data Engineer");
    }
}

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{SalaryDataset, SalaryRecord};

/// Schema violations caught while loading, before the core ever sees the
/// data. These are terminal for the load attempt, never recovered from.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid salary_usd ({value}); expected a non-negative number")]
    InvalidSalary { row: usize, value: f64 },
    #[error("column '{column}' has unsupported type {datatype}")]
    UnsupportedColumnType { column: String, datatype: String },
    #[error("row {row}: year {value} out of range")]
    YearOutOfRange { row: usize, value: i64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the eight contract column names
/// * `.json`    – records-oriented array of objects
/// * `.parquet` – flat scalar columns with the contract names
pub fn load_file(path: &Path) -> Result<SalaryDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    validate(&records)?;
    Ok(SalaryDataset::from_records(records))
}

/// Fail fast on values no well-formed dataset contains.
fn validate(records: &[SalaryRecord]) -> Result<()> {
    for (row, rec) in records.iter().enumerate() {
        // Negated comparison so NaN (which serde parses cleanly into f64)
        // is rejected along with negative values.
        if !(rec.salary_usd >= 0.0) {
            return Err(SchemaError::InvalidSalary {
                row,
                value: rec.salary_usd,
            }
            .into());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the eight columns of [`SalaryRecord`],
/// one record per data row. Column order is free; extra columns are
/// ignored.
fn load_csv(path: &Path) -> Result<Vec<SalaryRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<SalaryRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "year": 2024,
///     "seniority": "Senior",
///     "contract_type": "Full-time",
///     "company_size": "Large",
///     "role": "Data Scientist",
///     "remote_type": "Remote",
///     "residence_country_code": "USA",
///     "salary_usd": 150000.0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<SalaryRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<SalaryRecord> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of salary records.
///
/// Expected schema: one flat scalar column per [`SalaryRecord`] field —
/// `year` as Int32/Int64, `salary_usd` as Float32/Float64, the rest Utf8.
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<SalaryRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let year = int_column(&batch, "year")?;
        let seniority = string_column(&batch, "seniority")?;
        let contract_type = string_column(&batch, "contract_type")?;
        let company_size = string_column(&batch, "company_size")?;
        let role = string_column(&batch, "role")?;
        let remote_type = string_column(&batch, "remote_type")?;
        let residence = string_column(&batch, "residence_country_code")?;
        let salary = float_column(&batch, "salary_usd")?;

        for row in 0..batch.num_rows() {
            let year = i32::try_from(year[row]).map_err(|_| SchemaError::YearOutOfRange {
                row,
                value: year[row],
            })?;
            records.push(SalaryRecord {
                year,
                seniority: seniority[row].clone(),
                contract_type: contract_type[row].clone(),
                company_size: company_size[row].clone(),
                role: role[row].clone(),
                remote_type: remote_type[row].clone(),
                residence_country_code: residence[row].clone(),
                salary_usd: salary[row],
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| SchemaError::MissingColumn(name))?;
    let col = batch.column(idx);
    if col.null_count() > 0 {
        bail!("column '{name}' contains null values");
    }
    Ok(col)
}

fn unsupported(name: &str, col: &Arc<dyn Array>) -> anyhow::Error {
    SchemaError::UnsupportedColumnType {
        column: name.to_string(),
        datatype: format!("{:?}", col.data_type()),
    }
    .into()
}

/// Extract an integer column (Int32 or Int64) as `Vec<i64>`.
fn int_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<i64>> {
    let col = column(batch, name)?;
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.values().to_vec())
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.values().iter().map(|&v| v as i64).collect())
    } else {
        Err(unsupported(name, col))
    }
}

/// Extract a float column (Float32 or Float64) as `Vec<f64>`.
fn float_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<f64>> {
    let col = column(batch, name)?;
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.values().to_vec())
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.values().iter().map(|&v| v as f64).collect())
    } else {
        Err(unsupported(name, col))
    }
}

/// Extract a string column (Utf8 or LargeUtf8) as `Vec<String>`.
fn string_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<String>> {
    let col = column(batch, name)?;
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        Ok(arr.iter().map(|v| v.unwrap_or("").to_string()).collect())
    } else if let Some(arr) = col.as_any().downcast_ref::<LargeStringArray>() {
        Ok(arr.iter().map(|v| v.unwrap_or("").to_string()).collect())
    } else {
        Err(unsupported(name, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field, Schema};
    use parquet::arrow::ArrowWriter;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    /// Write a one-row parquet file with the contract columns and the
    /// given year value.
    fn write_temp_parquet(name: &str, year: i64) -> std::path::PathBuf {
        let schema = Arc::new(Schema::new(vec![
            Field::new("year", DataType::Int64, false),
            Field::new("seniority", DataType::Utf8, false),
            Field::new("contract_type", DataType::Utf8, false),
            Field::new("company_size", DataType::Utf8, false),
            Field::new("role", DataType::Utf8, false),
            Field::new("remote_type", DataType::Utf8, false),
            Field::new("residence_country_code", DataType::Utf8, false),
            Field::new("salary_usd", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![year])),
                Arc::new(StringArray::from(vec!["Senior"])),
                Arc::new(StringArray::from(vec!["Full-time"])),
                Arc::new(StringArray::from(vec!["Large"])),
                Arc::new(StringArray::from(vec!["Data Scientist"])),
                Arc::new(StringArray::from(vec!["Remote"])),
                Arc::new(StringArray::from(vec!["USA"])),
                Arc::new(Float64Array::from(vec![150_000.0])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(name);
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn csv_round_trip() {
        let path = write_temp(
            "salary_scope_loader_test.csv",
            "year,seniority,contract_type,company_size,role,remote_type,residence_country_code,salary_usd\n\
             2023,Senior,Full-time,Large,Data Scientist,Remote,USA,150000\n\
             2022,Junior,Contract,Small,Data Analyst,On-site,BRA,32000.5\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].role, "Data Scientist");
        assert_eq!(ds.records[1].salary_usd, 32_000.5);
        assert_eq!(ds.years.len(), 2);
    }

    #[test]
    fn json_records_orient() {
        let path = write_temp(
            "salary_scope_loader_test.json",
            r#"[{"year":2024,"seniority":"Mid","contract_type":"Full-time",
                 "company_size":"Medium","role":"Data Engineer","remote_type":"Hybrid",
                 "residence_country_code":"DEU","salary_usd":90000.0}]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].residence_country_code, "DEU");
    }

    #[test]
    fn negative_salary_is_rejected() {
        let path = write_temp(
            "salary_scope_loader_negative.csv",
            "year,seniority,contract_type,company_size,role,remote_type,residence_country_code,salary_usd\n\
             2023,Senior,Full-time,Large,Data Scientist,Remote,USA,-1\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid salary_usd"));
    }

    #[test]
    fn nan_salary_is_rejected() {
        let path = write_temp(
            "salary_scope_loader_nan.csv",
            "year,seniority,contract_type,company_size,role,remote_type,residence_country_code,salary_usd\n\
             2023,Senior,Full-time,Large,Data Scientist,Remote,USA,NaN\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid salary_usd"));
    }

    #[test]
    fn missing_column_is_rejected() {
        let path = write_temp(
            "salary_scope_loader_missing.csv",
            "year,seniority,contract_type,company_size,role,remote_type,salary_usd\n\
             2023,Senior,Full-time,Large,Data Scientist,Remote,100\n",
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn parquet_round_trip() {
        let path = write_temp_parquet("salary_scope_loader_test.parquet", 2024);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].year, 2024);
        assert_eq!(ds.records[0].role, "Data Scientist");
        assert_eq!(ds.records[0].salary_usd, 150_000.0);
    }

    #[test]
    fn parquet_year_out_of_i32_range_is_rejected() {
        let path = write_temp_parquet("salary_scope_loader_bigyear.parquet", i64::MAX);
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("salary_scope_loader_test.xlsx", "");
        assert!(load_file(&path).is_err());
    }
}

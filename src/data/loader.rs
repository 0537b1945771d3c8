use std::fs::File;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{DataLoadError, Result};
use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER, COL_CLASS, COL_PAYLOAD, COL_SITE,
    REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the four required columns (extra columns ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names, numeric payload/class columns
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    let dataset = LaunchDataset::from_records(records).ok_or(DataLoadError::Empty)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..={} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cell validation shared by all formats
// ---------------------------------------------------------------------------

fn invalid(row: usize, column: &str, value: impl ToString) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn payload_from_f64(value: f64, row: usize) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(row, COL_PAYLOAD, value))
    }
}

/// `class` must be exactly 0 or 1 (integers written as floats are accepted).
fn outcome_from_f64(value: f64, row: usize) -> Result<Outcome> {
    let outcome = if value.fract() == 0.0 {
        Outcome::from_class(value as i64)
    } else {
        None
    };
    outcome.ok_or_else(|| invalid(row, COL_CLASS, value))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let class_idx = column(COL_CLASS)?;
    let booster_idx = column(COL_BOOSTER)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_text = cell(payload_idx);
        let payload = payload_text
            .parse::<f64>()
            .map_err(|_| invalid(row_no, COL_PAYLOAD, payload_text))
            .and_then(|v| payload_from_f64(v, row_no))?;

        let class_text = cell(class_idx);
        let outcome = class_text
            .parse::<f64>()
            .map_err(|_| invalid(row_no, COL_CLASS, class_text))
            .and_then(|v| outcome_from_f64(v, row_no))?;

        records.push(LaunchRecord::new(
            cell(site_idx),
            payload,
            outcome,
            cell(booster_idx),
        ));
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| DataLoadError::Malformed("expected top-level JSON array".into()))?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| DataLoadError::Malformed(format!("row {i} is not a JSON object")))?;

        // A key missing from any row means the column is missing.
        if let Some(col) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
            return Err(DataLoadError::MissingColumn(col.to_string()));
        }

        let site = json_string(&obj[COL_SITE], i, COL_SITE)?;
        let booster = json_string(&obj[COL_BOOSTER], i, COL_BOOSTER)?;

        let payload_val = &obj[COL_PAYLOAD];
        let payload = payload_val
            .as_f64()
            .ok_or_else(|| invalid(i, COL_PAYLOAD, payload_val))
            .and_then(|v| payload_from_f64(v, i))?;

        let class_val = &obj[COL_CLASS];
        let class = match class_val {
            JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            other => other.as_f64(),
        };
        let outcome = class
            .ok_or_else(|| invalid(i, COL_CLASS, class_val))
            .and_then(|v| outcome_from_f64(v, i))?;

        records.push(LaunchRecord {
            site,
            payload_kg: payload,
            outcome,
            booster_category: booster,
        });
    }

    Ok(records)
}

fn json_string(val: &JsonValue, row: usize, col: &str) -> Result<String> {
    match val {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(invalid(row, col, other)),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launches from a Parquet file written by Pandas or Polars.
///
/// Payload may be any float/int column, `class` an int, float or boolean
/// column, site and booster category Utf8 or LargeUtf8.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    // Checked up front so a file without row groups still reports the column.
    let schema = builder.schema();
    if let Some(col) = REQUIRED_COLUMNS
        .iter()
        .find(|c| schema.index_of(c).is_err())
    {
        return Err(DataLoadError::MissingColumn(col.to_string()));
    }

    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let site_col = batch_column(&batch, COL_SITE)?;
        let payload_col = batch_column(&batch, COL_PAYLOAD)?;
        let class_col = batch_column(&batch, COL_CLASS)?;
        let booster_col = batch_column(&batch, COL_BOOSTER)?;

        for row in 0..batch.num_rows() {
            // Row numbers continue across batches.
            let row_no = records.len();

            let site = arrow_string(site_col, row)
                .ok_or_else(|| invalid(row_no, COL_SITE, describe_cell(site_col, row)))?;
            let booster = arrow_string(booster_col, row)
                .ok_or_else(|| invalid(row_no, COL_BOOSTER, describe_cell(booster_col, row)))?;
            let payload = arrow_f64(payload_col, row)
                .ok_or_else(|| invalid(row_no, COL_PAYLOAD, describe_cell(payload_col, row)))
                .and_then(|v| payload_from_f64(v, row_no))?;
            let outcome = arrow_f64(class_col, row)
                .ok_or_else(|| invalid(row_no, COL_CLASS, describe_cell(class_col, row)))
                .and_then(|v| outcome_from_f64(v, row_no))?;

            records.push(LaunchRecord {
                site,
                payload_kg: payload,
                outcome,
                booster_category: booster,
            });
        }
    }

    Ok(records)
}

// -- Arrow helpers --

fn batch_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .schema()
        .index_of(name)
        .map(|idx| batch.column(idx))
        .map_err(|_| DataLoadError::MissingColumn(name.to_string()))
}

/// Read a numeric (or boolean) cell as `f64`. `None` for nulls and other types.
fn arrow_f64(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => any.downcast_ref::<Int64Array>().map(|a| a.value(row) as f64),
        DataType::Int32 => any.downcast_ref::<Int32Array>().map(|a| a.value(row) as f64),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map(|a| if a.value(row) { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn arrow_string(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row).to_string()),
        DataType::LargeUtf8 => any
            .downcast_ref::<LargeStringArray>()
            .map(|a| a.value(row).to_string()),
        _ => None,
    }
}

fn describe_cell(col: &ArrayRef, row: usize) -> String {
    if col.is_null(row) {
        "<null>".to_string()
    } else {
        format!("<{:?}>", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn temp_with(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = temp_with(
            ".csv",
            &format!(
                "{HEADER}\n\
                 1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
                 2,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1\n\
                 3,KSC LC-39A,1,9600,F9 FT B1029.1,FT\n"
            ),
        );

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);

        let first = &ds.records()[0];
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category, "v1.0");
    }

    #[test]
    fn test_csv_missing_column() {
        let file = temp_with(
            ".csv",
            "Launch Site,class,Payload Mass (kg)\nCCAFS LC-40,0,0.0\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(c) if c == COL_BOOSTER));
    }

    #[test]
    fn test_csv_invalid_class() {
        let file = temp_with(
            ".csv",
            &format!("{HEADER}\n1,CCAFS LC-40,2,0.0,F9 v1.0  B0003,v1.0\n"),
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidValue { row: 0, ref column, .. } if column == COL_CLASS
        ));
    }

    #[test]
    fn test_csv_negative_payload() {
        let file = temp_with(
            ".csv",
            &format!("{HEADER}\n1,CCAFS LC-40,1,-5,F9 v1.0  B0003,v1.0\n"),
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidValue { ref column, .. } if column == COL_PAYLOAD
        ));
    }

    #[test]
    fn test_csv_header_only_is_empty() {
        let file = temp_with(".csv", &format!("{HEADER}\n"));
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::Empty
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("spacex_launch_dash.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_with(".xlsx", "");
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::UnsupportedFormat(ext) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_load_json() {
        let file = temp_with(
            ".json",
            r#"[
                {"Launch Site": "SiteA", "Payload Mass (kg)": 500, "class": 1, "Booster Version Category": "v1.0"},
                {"Launch Site": "SiteB", "Payload Mass (kg)": 800.5, "class": false, "Booster Version Category": "FT"}
            ]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].outcome, Outcome::Success);
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);
        assert_eq!(ds.max_payload(), 800.5);
    }

    #[test]
    fn test_json_missing_key() {
        let file = temp_with(
            ".json",
            r#"[{"Launch Site": "SiteA", "Payload Mass (kg)": 500, "class": 1}]"#,
        );
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::MissingColumn(_)
        ));
    }

    #[test]
    fn test_json_not_an_array() {
        let file = temp_with(".json", r#"{"Launch Site": []}"#);
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::Malformed(_)
        ));
    }

    #[test]
    fn test_load_parquet() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["SiteA", "SiteA", "SiteB"])),
                Arc::new(Float64Array::from(vec![500.0, 1500.0, 800.0])),
                Arc::new(Int64Array::from(vec![1, 0, 1])),
                Arc::new(StringArray::from(vec!["v1.0", "v1.0", "v1.1"])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites(), ["SiteA", "SiteB"]);
        assert_eq!(ds.min_payload(), 500.0);
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_parquet_missing_column() {
        let schema = Arc::new(Schema::new(vec![Field::new(COL_SITE, DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["SiteA"]))],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".pq").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::MissingColumn(c) if c == COL_PAYLOAD
        ));
    }

    #[test]
    fn test_parquet_without_rows_reports_missing_column() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_CLASS, DataType::Int64, false),
        ]));

        // No batches written: the file has a schema but no row groups.
        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.close().unwrap();

        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::MissingColumn(c) if c == COL_PAYLOAD
        ));
    }

    #[test]
    fn test_parquet_without_rows_but_full_schema_is_empty() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
        ]));

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.close().unwrap();

        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::Empty
        ));
    }
}

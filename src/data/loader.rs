use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray,
};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{EarthquakeDataset, EarthquakeRecord, TsunamiFlag};

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = ["magnitude", "depth", "Year", "latitude", "longitude", "tsunami"];

/// Optional free-text location column.
pub const PLACE_COLUMN: &str = "place";

/// Cell contents read as "no value", in addition to the empty string.
const MISSING_MARKERS: [&str; 8] = ["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None"];

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed parquet file: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("reading arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedColumnType { column: String, data_type: String },
    #[error("row {row}: '{value}' in column '{column}' is not a number")]
    MalformedRow {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("{0}")]
    InvalidStructure(String),
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("no complete earthquake records in the input")]
    NoRecords,
}

type Result<T> = std::result::Result<T, DataLoadError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and clean an earthquake table.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`             – comma separated, header row
/// * `.tsv` / `.tab`    – tab separated, header row
/// * `.json`            – `[{ "magnitude": 6.5, "Year": 2016, ... }, ...]`
/// * `.parquet` / `.pq` – flat numeric/string columns
pub fn load_file(path: &Path) -> Result<EarthquakeDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv_reader(open(path)?, b','),
        "tsv" | "tab" => load_csv_reader(open(path)?, b'\t'),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
    }?;

    log::info!(
        "Loaded {} earthquake records from {} (years {:?}, magnitude {})",
        dataset.len(),
        path.display(),
        dataset.years,
        dataset.magnitude_bounds
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cleaning: shared by every format
// ---------------------------------------------------------------------------

/// One source row before cleaning; `None` marks an empty/null cell.
#[derive(Debug)]
struct RawRow {
    magnitude: Option<f64>,
    depth: Option<f64>,
    year: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    tsunami: Option<f64>,
    place: Option<String>,
}

impl RawRow {
    /// Drop rows missing a required value; `Year` is truncated to an integer.
    fn clean(self) -> Option<EarthquakeRecord> {
        Some(EarthquakeRecord {
            year: self.year?.trunc() as i32,
            magnitude: self.magnitude?,
            depth: self.depth?,
            latitude: self.latitude?,
            longitude: self.longitude?,
            tsunami: TsunamiFlag::from_indicator(self.tsunami),
            place: self.place.filter(|p| !p.trim().is_empty()),
        })
    }
}

fn finish(rows: Vec<RawRow>, has_place: bool) -> Result<EarthquakeDataset> {
    let total = rows.len();
    let records: Vec<EarthquakeRecord> = rows.into_iter().filter_map(RawRow::clean).collect();
    let dropped = total - records.len();

    if records.is_empty() {
        return Err(DataLoadError::NoRecords);
    }
    if dropped > 0 {
        log::warn!("Dropped {dropped} of {total} rows with missing required values");
    }
    Ok(EarthquakeDataset::from_records(records, has_place, dropped))
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Parse a numeric cell. Empty, null-like and non-finite cells are missing;
/// anything else that is not a number fails the load.
fn parse_number(row: usize, column: &'static str, cell: Option<&str>) -> Result<Option<f64>> {
    let Some(cell) = cell.map(str::trim).filter(|c| !is_missing(c)) else {
        return Ok(None);
    };
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        Ok(_) => Ok(None),
        Err(_) => Err(DataLoadError::MalformedRow {
            row,
            column,
            value: cell.to_string(),
        }),
    }
}

/// The tsunami flag only ever compares against `1`. Boolean text counts as
/// `1`/`0`; any other unparseable cell reads as "No".
fn parse_indicator(cell: Option<&str>) -> Option<f64> {
    let cell = cell?.trim();
    if cell.eq_ignore_ascii_case("true") {
        Some(1.0)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(0.0)
    } else {
        cell.parse::<f64>().ok()
    }
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DelimitedRow {
    magnitude: Option<String>,
    depth: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    tsunami: Option<String>,
    #[serde(default)]
    place: Option<String>,
}

impl DelimitedRow {
    fn into_raw(self, row: usize) -> Result<RawRow> {
        Ok(RawRow {
            magnitude: parse_number(row, "magnitude", self.magnitude.as_deref())?,
            depth: parse_number(row, "depth", self.depth.as_deref())?,
            year: parse_number(row, "Year", self.year.as_deref())?,
            latitude: parse_number(row, "latitude", self.latitude.as_deref())?,
            longitude: parse_number(row, "longitude", self.longitude.as_deref())?,
            tsunami: parse_indicator(self.tsunami.as_deref()),
            place: self.place,
        })
    }
}

/// Header row with column names; `row` numbers in errors count data rows from 1.
pub fn load_csv_reader<R: io::Read>(reader: R, delimiter: u8) -> Result<EarthquakeDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has_column(*c)) {
        return Err(DataLoadError::MissingColumn(missing.to_string()));
    }
    let has_place = has_column(PLACE_COLUMN);

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<DelimitedRow>().enumerate() {
        rows.push(result?.into_raw(i + 1)?);
    }
    finish(rows, has_place)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "magnitude": 7.8, "depth": 22.0, "Year": 2016, "latitude": -0.37,
///     "longitude": -79.94, "tsunami": 1, "place": "Muisne, Ecuador" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<EarthquakeDataset> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_json_str(&text)
}

fn load_json_str(text: &str) -> Result<EarthquakeDataset> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataLoadError::InvalidStructure("expected a top-level JSON array".into()))?;

    let objects: Vec<&Map<String, JsonValue>> = records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            rec.as_object()
                .ok_or_else(|| DataLoadError::InvalidStructure(format!("row {} is not a JSON object", i + 1)))
        })
        .collect::<Result<_>>()?;

    if objects.is_empty() {
        return Err(DataLoadError::NoRecords);
    }

    let columns: BTreeSet<&str> = objects.iter().flat_map(|o| o.keys().map(String::as_str)).collect();
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !columns.contains(*c)) {
        return Err(DataLoadError::MissingColumn(missing.to_string()));
    }
    let has_place = columns.contains(PLACE_COLUMN);

    let rows = objects
        .iter()
        .enumerate()
        .map(|(i, obj)| -> Result<RawRow> {
            let row = i + 1;
            Ok(RawRow {
                magnitude: json_number(row, "magnitude", obj.get("magnitude"))?,
                depth: json_number(row, "depth", obj.get("depth"))?,
                year: json_number(row, "Year", obj.get("Year"))?,
                latitude: json_number(row, "latitude", obj.get("latitude"))?,
                longitude: json_number(row, "longitude", obj.get("longitude"))?,
                tsunami: json_number(row, "tsunami", obj.get("tsunami")).ok().flatten(),
                place: obj.get(PLACE_COLUMN).and_then(json_text),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    finish(rows, has_place)
}

fn json_number(row: usize, column: &'static str, val: Option<&JsonValue>) -> Result<Option<f64>> {
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_f64().filter(|v| v.is_finite())),
        Some(JsonValue::Bool(b)) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        Some(JsonValue::String(s)) => parse_number(row, column, Some(s)),
        Some(other) => Err(DataLoadError::MalformedRow {
            row,
            column,
            value: other.to_string(),
        }),
    }
}

fn json_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// Numeric columns may be Float64/Float32/Int64/Int32 (or Utf8 holding
/// numbers); `tsunami` may also be Boolean. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<EarthquakeDataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;

    let schema = builder.schema().clone();
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| schema.index_of(*c).is_err()) {
        return Err(DataLoadError::MissingColumn(missing.to_string()));
    }
    let has_place = schema.index_of(PLACE_COLUMN).is_ok();

    let mut rows = Vec::new();
    for batch_result in builder.build()? {
        let batch = batch_result?;
        let magnitude = column(&batch, "magnitude")?;
        let depth = column(&batch, "depth")?;
        let year = column(&batch, "Year")?;
        let latitude = column(&batch, "latitude")?;
        let longitude = column(&batch, "longitude")?;
        let tsunami = column(&batch, "tsunami")?;
        let place = batch.column_by_name(PLACE_COLUMN);

        for i in 0..batch.num_rows() {
            let row = rows.len() + 1;
            rows.push(RawRow {
                magnitude: arrow_number(magnitude, i, row, "magnitude")?,
                depth: arrow_number(depth, i, row, "depth")?,
                year: arrow_number(year, i, row, "Year")?,
                latitude: arrow_number(latitude, i, row, "latitude")?,
                longitude: arrow_number(longitude, i, row, "longitude")?,
                tsunami: arrow_number(tsunami, i, row, "tsunami").ok().flatten(),
                place: place.and_then(|col| arrow_text(col, i)),
            });
        }
    }

    finish(rows, has_place)
}

// -- Arrow helpers --

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
}

/// Extract a numeric cell from a flat Arrow column.
fn arrow_number(col: &ArrayRef, i: usize, row: usize, column: &'static str) -> Result<Option<f64>> {
    if col.is_null(i) {
        return Ok(None);
    }
    let any = col.as_any();
    let value = if let Some(arr) = any.downcast_ref::<Float64Array>() {
        arr.value(i)
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        arr.value(i) as f64
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        arr.value(i) as f64
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        arr.value(i) as f64
    } else if let Some(arr) = any.downcast_ref::<BooleanArray>() {
        if arr.value(i) { 1.0 } else { 0.0 }
    } else if let Some(text) = arrow_text(col, i) {
        return parse_number(row, column, Some(&text));
    } else {
        return Err(DataLoadError::UnsupportedColumnType {
            column: column.to_string(),
            data_type: format!("{:?}", col.data_type()),
        });
    };
    Ok(Some(value).filter(|v| v.is_finite()))
}

fn arrow_text(col: &ArrayRef, i: usize) -> Option<String> {
    if col.is_null(i) {
        return None;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<StringArray>() {
        Some(arr.value(i).to_string())
    } else {
        any.downcast_ref::<LargeStringArray>()
            .map(|arr| arr.value(i).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    const CSV: &str = "\
magnitude,depth,Year,latitude,longitude,tsunami,place
7.0,14.0,2020,38.1,142.8,1,\"off the coast, Japan\"
6.5,,2020,10.0,120.0,0,Luzon
5.0,33.0,2020.0,-5.2,151.7,0,
6.0,10.0,2021,36.4,70.7,0,Hindu Kush
";

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn write_parquet(batch: &RecordBatch) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.as_file().try_clone().unwrap(), batch.schema(), None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        file
    }

    #[test]
    fn cleans_csv_rows() {
        let ds = load_csv_reader(CSV.as_bytes(), b',').unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.dropped_rows, 1);
        assert!(ds.has_place);

        let first = &ds.records[0];
        assert_eq!(first.year, 2020);
        assert_eq!(first.tsunami, TsunamiFlag::Yes);
        assert_eq!(first.place.as_deref(), Some("off the coast, Japan"));

        // `2020.0` is cast to an integer year; an empty place is absent.
        assert_eq!(ds.records[1].year, 2020);
        assert_eq!(ds.records[1].place, None);
        assert_eq!(ds.records[2].tsunami, TsunamiFlag::No);
    }

    #[test]
    fn place_column_is_optional() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n6.1,10,2019,1,2,0\n";
        let ds = load_csv_reader(csv.as_bytes(), b',').unwrap();
        assert!(!ds.has_place);
        assert_eq!(ds.records[0].place, None);
    }

    #[test]
    fn tab_separated() {
        let tsv = "Year\tmagnitude\tdepth\tlatitude\tlongitude\ttsunami\n2018\t7.5\t25\t-6.1\t142.7\t1\n";
        let ds = load_csv_reader(tsv.as_bytes(), b'\t').unwrap();
        assert_eq!(ds.records[0].magnitude, 7.5);
        assert_eq!(ds.records[0].tsunami, TsunamiFlag::Yes);
    }

    #[test]
    fn boolean_tsunami_text() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n\
                   7.1,10,2019,1,2,True\n6.2,10,2019,1,2,false\n6.3,10,2019,1,2,TRUE\n";
        let ds = load_csv_reader(csv.as_bytes(), b',').unwrap();
        let flags: Vec<_> = ds.records.iter().map(|r| r.tsunami).collect();
        assert_eq!(flags, vec![TsunamiFlag::Yes, TsunamiFlag::No, TsunamiFlag::Yes]);
    }

    #[test]
    fn null_markers_count_as_missing() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n\
                   NaN,10,2019,1,2,0\n6.2,10,NA,1,2,0\n6.3,10,2019,1,2,\n";
        let ds = load_csv_reader(csv.as_bytes(), b',').unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped_rows, 2);
        assert_eq!(ds.records[0].tsunami, TsunamiFlag::No);
    }

    #[test]
    fn missing_required_column() {
        let csv = "magnitude,depth,latitude,longitude,tsunami\n6.1,10,1,2,0\n";
        let err = load_csv_reader(csv.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(ref c) if c == "Year"));
    }

    #[test]
    fn malformed_number_is_fatal() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n6.1,10,2019,1,2,0\nstrong,10,2019,1,2,0\n";
        let err = load_csv_reader(csv.as_bytes(), b',').unwrap_err();
        match err {
            DataLoadError::MalformedRow { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "magnitude");
                assert_eq!(value, "strong");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_rows_are_fatal() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n6.1,10,2019\n";
        let err = load_csv_reader(csv.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn all_rows_dropped_is_fatal() {
        let csv = "magnitude,depth,Year,latitude,longitude,tsunami\n,10,2019,1,2,0\n";
        let err = load_csv_reader(csv.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, DataLoadError::NoRecords));
    }

    #[test]
    fn missing_file() {
        let err = load_file(Path::new("/nonexistent/earthquake.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn unsupported_extension() {
        let file = write_temp(".xlsx", CSV);
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ref e) if e == "xlsx"));
    }

    #[test]
    fn loading_twice_is_identical() {
        let file = write_temp(".csv", CSV);
        let a = load_file(file.path()).unwrap();
        let b = load_file(file.path()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn json_records() {
        let json = r#"[
            {"magnitude": 7.8, "depth": 22.0, "Year": 2016, "latitude": -0.37,
             "longitude": -79.94, "tsunami": 1, "place": "Muisne, Ecuador"},
            {"magnitude": 6.4, "depth": null, "Year": 2016, "latitude": 1.0,
             "longitude": 2.0, "tsunami": 0},
            {"magnitude": "6.9", "depth": 10, "Year": 2017.0, "latitude": 1.0,
             "longitude": 2.0, "tsunami": true}
        ]"#;
        let file = write_temp(".json", json);
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dropped_rows, 1);
        assert_eq!(ds.records[0].place.as_deref(), Some("Muisne, Ecuador"));
        assert_eq!(ds.records[1].year, 2017);
        assert_eq!(ds.records[1].magnitude, 6.9);
        assert_eq!(ds.records[1].tsunami, TsunamiFlag::Yes);
    }

    #[test]
    fn json_requires_array() {
        let err = load_json_str(r#"{"magnitude": 7.0}"#).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidStructure(_)));
        let err = load_json_str(r#"[{"magnitude": 7.0, "depth": 1}]"#).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(_)));
    }

    #[test]
    fn parquet_columns() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("magnitude", DataType::Float64, true),
            Field::new("depth", DataType::Float64, true),
            Field::new("Year", DataType::Int64, true),
            Field::new("latitude", DataType::Float64, true),
            Field::new("longitude", DataType::Float64, true),
            Field::new("tsunami", DataType::Int32, true),
            Field::new("place", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![Some(6.6), Some(7.1), None])),
                Arc::new(Float64Array::from(vec![10.0, 35.5, 5.0])),
                Arc::new(Int64Array::from(vec![2019, 2020, 2020])),
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
                Arc::new(Float64Array::from(vec![4.0, 5.0, 6.0])),
                Arc::new(Int32Array::from(vec![0, 1, 0])),
                Arc::new(StringArray::from(vec![Some("Crete"), None, Some("Fiji")])),
            ],
        )
        .unwrap();

        let file = write_parquet(&batch);
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dropped_rows, 1);
        assert_eq!(ds.records[0].place.as_deref(), Some("Crete"));
        assert_eq!(ds.records[1].year, 2020);
        assert_eq!(ds.records[1].tsunami, TsunamiFlag::Yes);
        assert_eq!(ds.records[1].place, None);
    }

    #[test]
    fn parquet_missing_column() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("magnitude", DataType::Float64, true),
            Field::new("depth", DataType::Float64, true),
            Field::new("latitude", DataType::Float64, true),
            Field::new("longitude", DataType::Float64, true),
            Field::new("tsunami", DataType::Int64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![6.6])),
                Arc::new(Float64Array::from(vec![10.0])),
                Arc::new(Float64Array::from(vec![1.0])),
                Arc::new(Float64Array::from(vec![4.0])),
                Arc::new(Int64Array::from(vec![0])),
            ],
        )
        .unwrap();

        let file = write_parquet(&batch);
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(ref c) if c == "Year"));
    }
}

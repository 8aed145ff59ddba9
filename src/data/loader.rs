use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Float64Type, Int32Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{self, MarketDataset, MarketRow, SchemaError, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a market dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the market columns (recommended)
/// * `.json`    – `[{ "SALES_YEAR": 2024, "COUNTRY_OR_TERRITORY": "USA", ... }, ...]`
/// * `.parquet` – one column per market field
///
/// Every row is validated once here; the pipeline trusts the result.
pub fn load_file(path: &Path) -> Result<MarketDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if rows.is_empty() {
        return Err(SchemaError::EmptyDataset.into());
    }
    let dataset = MarketDataset::from_rows(rows);
    log::info!(
        "Loaded {} rows from {}: {} years, {} countries, {} tire sizes",
        dataset.len(),
        path.display(),
        dataset.years.len(),
        dataset.countries.len(),
        dataset.tire_sizes.len()
    );
    Ok(dataset)
}

fn check_row(row: MarketRow, index: usize) -> Result<MarketRow> {
    let row = row.normalize();
    row.validate(index)?;
    Ok(row)
}

fn check_columns(present: &[&str]) -> Result<(), SchemaError> {
    for required in REQUIRED_COLUMNS {
        if !present.contains(&required) {
            return Err(SchemaError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the upper-case column names, one market row
/// per record. Empty optional cells (brand, design, price, fitments) are
/// missing values.
fn load_csv(path: &Path) -> Result<Vec<MarketRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(&headers.iter().collect::<Vec<_>>())?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<MarketRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(check_row(row, row_no)?);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "SALES_YEAR": 2024, "COUNTRY_OR_TERRITORY": "USA", "TIRE_SIZE": "225/65R17", ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<MarketRow>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&text).context("Expected top-level JSON array")?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            check_columns(&obj.keys().map(String::as_str).collect::<Vec<_>>())?;
            let row: MarketRow =
                serde_json::from_value(rec).with_context(|| format!("JSON row {i}"))?;
            check_row(row, i)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per market field.
///
/// Numeric columns may be stored as any integer or float type and text
/// columns as any string type; everything is cast to the row schema.
/// Works with files written by **Pandas**, **Polars** and
/// [`super::export::write_parquet`].
fn load_parquet(path: &Path) -> Result<Vec<MarketRow>> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let schema = builder.schema().clone();
    check_columns(&schema.fields().iter().map(|f| f.name().as_str()).collect::<Vec<_>>())?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let cols = BatchColumns::new(&batch)?;
        for i in 0..batch.num_rows() {
            let index = rows.len();
            let row = cols.row(i).with_context(|| format!("Row {index}"))?;
            rows.push(check_row(row, index)?);
        }
    }
    Ok(rows)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()).into())
}

fn f64_column(batch: &RecordBatch, name: &str) -> Result<Float64Array> {
    let cast = arrow::compute::cast(column(batch, name)?, &DataType::Float64)
        .with_context(|| format!("casting '{name}' to Float64"))?;
    cast.as_primitive_opt::<Float64Type>()
        .cloned()
        .with_context(|| format!("'{name}' is not numeric"))
}

fn i32_column(batch: &RecordBatch, name: &str) -> Result<Int32Array> {
    let cast = arrow::compute::cast(column(batch, name)?, &DataType::Int32)
        .with_context(|| format!("casting '{name}' to Int32"))?;
    cast.as_primitive_opt::<Int32Type>()
        .cloned()
        .with_context(|| format!("'{name}' is not an integer"))
}

fn str_column(batch: &RecordBatch, name: &str) -> Result<StringArray> {
    let cast = arrow::compute::cast(column(batch, name)?, &DataType::Utf8)
        .with_context(|| format!("casting '{name}' to Utf8"))?;
    cast.as_string_opt::<i32>()
        .cloned()
        .with_context(|| format!("'{name}' is not text"))
}

/// The batch's columns, cast once to the row schema's types.
struct BatchColumns {
    sales_year: Int32Array,
    country: StringArray,
    tire_size: StringArray,
    total_industry_sales: Float64Array,
    goodyear_sales: Float64Array,
    som_of_brand: Float64Array,
    competitor_brand: StringArray,
    competitor_brand_sales: Float64Array,
    competitor_som: Float64Array,
    competitor_pattern: StringArray,
    competitor_pattern_sales: Float64Array,
    brand_name: StringArray,
    design_name: StringArray,
    sales_price_usd: Float64Array,
    brand_type: StringArray,
    lux_suv_carparc: Float64Array,
    total_carparc: Float64Array,
    lux_suv_ratio: Float64Array,
    top_5_fitments: StringArray,
}

impl BatchColumns {
    fn new(batch: &RecordBatch) -> Result<Self> {
        Ok(Self {
            sales_year: i32_column(batch, model::SALES_YEAR)?,
            country: str_column(batch, model::COUNTRY_OR_TERRITORY)?,
            tire_size: str_column(batch, model::TIRE_SIZE)?,
            total_industry_sales: f64_column(batch, model::TOTAL_INDUSTRY_SALES)?,
            goodyear_sales: f64_column(batch, model::GOODYEAR_SALES)?,
            som_of_brand: f64_column(batch, model::SOM_OF_BRAND)?,
            competitor_brand: str_column(batch, model::COMPETITOR_BRAND)?,
            competitor_brand_sales: f64_column(batch, model::COMPETITOR_BRAND_SALES)?,
            competitor_som: f64_column(batch, model::COMPETITOR_SOM_OF_BRAND)?,
            competitor_pattern: str_column(batch, model::COMPETITOR_PATTERN)?,
            competitor_pattern_sales: f64_column(batch, model::COMPETITOR_PATTERN_SALES)?,
            brand_name: str_column(batch, model::BRAND_NAME)?,
            design_name: str_column(batch, model::DESIGN_NAME)?,
            sales_price_usd: f64_column(batch, model::SALES_PRICE_IN_USD)?,
            brand_type: str_column(batch, model::BRAND_TYPE)?,
            lux_suv_carparc: f64_column(batch, model::LUX_SUV_CARPARC)?,
            total_carparc: f64_column(batch, model::TOTAL_CARPARC)?,
            lux_suv_ratio: f64_column(batch, model::LUX_SUV_RATIO)?,
            top_5_fitments: str_column(batch, model::TOP_5_FITMENTS)?,
        })
    }

    fn row(&self, i: usize) -> Result<MarketRow> {
        Ok(MarketRow {
            sales_year: required_i32(&self.sales_year, i, model::SALES_YEAR)?,
            country: required_str(&self.country, i, model::COUNTRY_OR_TERRITORY)?,
            tire_size: required_str(&self.tire_size, i, model::TIRE_SIZE)?,
            total_industry_sales: required_f64(
                &self.total_industry_sales,
                i,
                model::TOTAL_INDUSTRY_SALES,
            )?,
            goodyear_sales: required_f64(&self.goodyear_sales, i, model::GOODYEAR_SALES)?,
            som_of_brand: required_f64(&self.som_of_brand, i, model::SOM_OF_BRAND)?,
            competitor_brand: required_str(&self.competitor_brand, i, model::COMPETITOR_BRAND)?,
            competitor_brand_sales: required_f64(
                &self.competitor_brand_sales,
                i,
                model::COMPETITOR_BRAND_SALES,
            )?,
            competitor_som: required_f64(&self.competitor_som, i, model::COMPETITOR_SOM_OF_BRAND)?,
            competitor_pattern: required_str(
                &self.competitor_pattern,
                i,
                model::COMPETITOR_PATTERN,
            )?,
            competitor_pattern_sales: required_f64(
                &self.competitor_pattern_sales,
                i,
                model::COMPETITOR_PATTERN_SALES,
            )?,
            brand_name: optional_str(&self.brand_name, i),
            design_name: optional_str(&self.design_name, i),
            sales_price_usd: optional_f64(&self.sales_price_usd, i),
            brand_type: required_str(&self.brand_type, i, model::BRAND_TYPE)?,
            lux_suv_carparc: required_f64(&self.lux_suv_carparc, i, model::LUX_SUV_CARPARC)?,
            total_carparc: required_f64(&self.total_carparc, i, model::TOTAL_CARPARC)?,
            lux_suv_ratio: required_f64(&self.lux_suv_ratio, i, model::LUX_SUV_RATIO)?,
            top_5_fitments: optional_str(&self.top_5_fitments, i),
        })
    }
}

fn required_f64(arr: &Float64Array, i: usize, name: &str) -> Result<f64> {
    if arr.is_null(i) {
        bail!("null value in required column '{name}'");
    }
    Ok(arr.value(i))
}

fn required_i32(arr: &Int32Array, i: usize, name: &str) -> Result<i32> {
    if arr.is_null(i) {
        bail!("null value in required column '{name}'");
    }
    Ok(arr.value(i))
}

fn required_str(arr: &StringArray, i: usize, name: &str) -> Result<String> {
    if arr.is_null(i) {
        bail!("null value in required column '{name}'");
    }
    Ok(arr.value(i).to_string())
}

/// Pandas writes missing floats as NaN; treat them like nulls.
fn optional_f64(arr: &Float64Array, i: usize) -> Option<f64> {
    if arr.is_null(i) {
        return None;
    }
    Some(arr.value(i)).filter(|v| !v.is_nan())
}

fn optional_str(arr: &StringArray, i: usize) -> Option<String> {
    (!arr.is_null(i)).then(|| arr.value(i).to_string())
}

//! Writers: datasets back to CSV / Parquet, and computed views to JSON.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::{self, MarketRow};
use super::views::ViewSet;

/// Write rows as CSV with the canonical header.
pub fn write_csv(rows: &[MarketRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

/// Write rows as a single-batch Parquet file readable by the loader.
pub fn write_parquet(rows: &[MarketRow], path: &Path) -> Result<()> {
    fn text(name: &str, nullable: bool) -> Field {
        Field::new(name, DataType::Utf8, nullable)
    }
    fn number(name: &str, nullable: bool) -> Field {
        Field::new(name, DataType::Float64, nullable)
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new(model::SALES_YEAR, DataType::Int32, false),
        text(model::COUNTRY_OR_TERRITORY, false),
        text(model::TIRE_SIZE, false),
        number(model::TOTAL_INDUSTRY_SALES, false),
        number(model::GOODYEAR_SALES, false),
        number(model::SOM_OF_BRAND, false),
        text(model::COMPETITOR_BRAND, false),
        number(model::COMPETITOR_BRAND_SALES, false),
        number(model::COMPETITOR_SOM_OF_BRAND, false),
        text(model::COMPETITOR_PATTERN, false),
        number(model::COMPETITOR_PATTERN_SALES, false),
        text(model::BRAND_NAME, true),
        text(model::DESIGN_NAME, true),
        number(model::SALES_PRICE_IN_USD, true),
        text(model::BRAND_TYPE, false),
        number(model::LUX_SUV_CARPARC, false),
        number(model::TOTAL_CARPARC, false),
        number(model::LUX_SUV_RATIO, false),
        text(model::TOP_5_FITMENTS, true),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(
            rows.iter().map(|r| r.sales_year).collect::<Vec<_>>(),
        )),
        strings(rows, |r| Some(r.country.as_str())),
        strings(rows, |r| Some(r.tire_size.as_str())),
        floats(rows, |r| Some(r.total_industry_sales)),
        floats(rows, |r| Some(r.goodyear_sales)),
        floats(rows, |r| Some(r.som_of_brand)),
        strings(rows, |r| Some(r.competitor_brand.as_str())),
        floats(rows, |r| Some(r.competitor_brand_sales)),
        floats(rows, |r| Some(r.competitor_som)),
        strings(rows, |r| Some(r.competitor_pattern.as_str())),
        floats(rows, |r| Some(r.competitor_pattern_sales)),
        strings(rows, |r| r.brand_name.as_deref()),
        strings(rows, |r| r.design_name.as_deref()),
        floats(rows, |r| r.sales_price_usd),
        strings(rows, |r| Some(r.brand_type.as_str())),
        floats(rows, |r| Some(r.lux_suv_carparc)),
        floats(rows, |r| Some(r.total_carparc)),
        floats(rows, |r| Some(r.lux_suv_ratio)),
        strings(rows, |r| r.top_5_fitments.as_deref()),
    ];

    let batch =
        RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;
    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn strings(rows: &[MarketRow], f: impl Fn(&MarketRow) -> Option<&str>) -> ArrayRef {
    Arc::new(rows.iter().map(f).collect::<StringArray>())
}

fn floats(rows: &[MarketRow], f: impl Fn(&MarketRow) -> Option<f64>) -> ArrayRef {
    Arc::new(rows.iter().map(f).collect::<Float64Array>())
}

/// Serialise the current views as pretty-printed JSON.
pub fn write_views_json(views: &ViewSet, path: &Path) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, views).context("writing views JSON")?;
    log::info!("Exported views to {}", path.display());
    Ok(())
}

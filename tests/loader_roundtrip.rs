//! Loading datasets from real files: CSV, JSON records and Parquet.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tire_dashboard::data::export::{write_csv, write_parquet};
use tire_dashboard::data::filter::FilterSelection;
use tire_dashboard::data::loader::load_file;
use tire_dashboard::data::model::{SchemaError, REQUIRED_COLUMNS};
use tire_dashboard::data::views::compute_views;

const HEADER: &str = "SALES_YEAR,COUNTRY_OR_TERRITORY,TIRE_SIZE,TOTAL_INDUSTRY_SALES,GOODYEAR_SALES,\
SOM_OF_BRAND,COMPETITOR_BRAND,COMPETITOR_BRAND_SALES,COMPETITOR_SOM_OF_BRAND,COMPETITOR_PATTERN,\
COMPETITOR_PATTERN_SALES,BRAND_NAME,DESIGN_NAME,SALES_PRICE_IN_USD,BRAND_TYPE,LUX_SUV_CARPARC,\
TOTAL_CARPARC,LUX_SUV_RATIO,TOP_5_FITMENTS";

const ROWS: [&str; 3] = [
    "2024,USA,225/65R17,2000000,500000,0.25,Michelin,100,0.1,Defender,60,Goodyear,Assurance,189.99,Tier 1,1250000,10000000,0.125,Toyota RAV4",
    "2024,USA,225/65R17,2000000,500000,0.25,Michelin,100,0.1,CrossClimate,40,,,,Tier 1,1250000,10000000,0.125,",
    "2025,Mexico,265/70R17,800000,120000,0.15,Bridgestone,80,0.1,Dueler,80,Kelly,Edge,119.5,Tier 3,300000,2500000,0.12,\"Ford Ranger, Toyota Hilux\"",
];

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn sample_csv() -> String {
    let mut text = String::from(HEADER);
    for row in ROWS {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

fn has_schema_error(err: &anyhow::Error, expected: &SchemaError) -> bool {
    err.chain()
        .any(|e| e.downcast_ref::<SchemaError>() == Some(expected))
}

#[test]
fn test_load_csv() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "market.csv", &sample_csv());

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.years, vec![2024, 2025]);
    assert_eq!(ds.countries, vec!["USA".to_string(), "Mexico".to_string()]);

    let sparse = &ds.rows[1];
    assert_eq!(sparse.brand_name, None);
    assert_eq!(sparse.design_name, None);
    assert_eq!(sparse.sales_price_usd, None);
    assert_eq!(sparse.top_5_fitments, None);
    assert_eq!(sparse.brand_type, "Tier 1");

    assert_eq!(
        ds.rows[2].top_5_fitments.as_deref(),
        Some("Ford Ranger, Toyota Hilux")
    );
}

#[test]
fn test_load_csv_missing_column() {
    let dir = TempDir::new().unwrap();
    let header = HEADER.replace(",LUX_SUV_RATIO", "");
    let path = write(&dir, "market.csv", &format!("{header}\n"));

    let err = load_file(&path).unwrap_err();
    assert!(has_schema_error(
        &err,
        &SchemaError::MissingColumn("LUX_SUV_RATIO".to_string())
    ));
}

#[test]
fn test_load_csv_rejects_out_of_range_share() {
    let dir = TempDir::new().unwrap();
    let bad = ROWS[0].replace(",0.25,", ",25,");
    let path = write(&dir, "market.csv", &format!("{HEADER}\n{bad}\n"));

    let err = load_file(&path).unwrap_err();
    assert!(has_schema_error(
        &err,
        &SchemaError::FractionOutOfRange {
            row: 0,
            column: "SOM_OF_BRAND",
            value: 25.0
        }
    ));
}

#[test]
fn test_load_csv_nan_price_is_missing() {
    let dir = TempDir::new().unwrap();
    let nan = ROWS[0].replace(",189.99,", ",NaN,");
    let lower = ROWS[0].replace(",189.99,", ",nan,");
    let path = write(&dir, "market.csv", &format!("{HEADER}\n{nan}\n{lower}\n"));

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 2);
    assert!(ds.rows.iter().all(|r| r.sales_price_usd.is_none()));
    assert_eq!(ds.rows[0].design_name.as_deref(), Some("Assurance"));

    let views = compute_views(&ds, &FilterSelection::new(2024, "USA", "225/65R17"), None);
    assert_eq!(views.row_count, 2);
    assert!(views.price_by_design.is_empty());
}

#[test]
fn test_load_empty_csv_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "market.csv", &format!("{HEADER}\n"));
    let err = load_file(&path).unwrap_err();
    assert!(has_schema_error(&err, &SchemaError::EmptyDataset));
}

#[test]
fn test_unsupported_extension() {
    let err = load_file(Path::new("market.xlsx")).unwrap_err();
    assert!(has_schema_error(
        &err,
        &SchemaError::UnsupportedExtension("xlsx".to_string())
    ));
}

#[test]
fn test_load_json_records() {
    let dir = TempDir::new().unwrap();
    let csv_path = write(&dir, "market.csv", &sample_csv());
    let expected = load_file(&csv_path).unwrap();

    let json = serde_json::to_string(&expected.rows).unwrap();
    let json_path = write(&dir, "market.json", &json);
    let ds = load_file(&json_path).unwrap();
    assert_eq!(ds.rows, expected.rows);
}

#[test]
fn test_load_json_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "market.json", r#"[{"SALES_YEAR": 2024}]"#);
    let err = load_file(&path).unwrap_err();
    assert!(has_schema_error(
        &err,
        &SchemaError::MissingColumn(REQUIRED_COLUMNS[1].to_string())
    ));
}

#[test]
fn test_parquet_round_trip() {
    let dir = TempDir::new().unwrap();
    let csv_path = write(&dir, "market.csv", &sample_csv());
    let expected = load_file(&csv_path).unwrap();

    let parquet_path = dir.path().join("market.parquet");
    write_parquet(&expected.rows, &parquet_path).unwrap();
    let ds = load_file(&parquet_path).unwrap();
    assert_eq!(ds.rows, expected.rows);
    assert_eq!(ds.tire_sizes, expected.tire_sizes);
}

#[test]
fn test_csv_writer_output_loads_back() {
    let dir = TempDir::new().unwrap();
    let csv_path = write(&dir, "market.csv", &sample_csv());
    let expected = load_file(&csv_path).unwrap();

    let out = dir.path().join("copy.csv");
    write_csv(&expected.rows, &out).unwrap();
    let ds = load_file(&out).unwrap();
    assert_eq!(ds.rows, expected.rows);
}

//! Tests for snapshot loading through the CSV and parquet paths

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::StringArray;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use survival_table::config::TableConfig;
use survival_table::error::SurvivalTableError;
use survival_table::loader::{read_csv, read_parquet, records_from_batches};
use survival_table::survival::SurvivalTable;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("survival-table-{}-{name}", std::process::id()))
}

const SNAPSHOT_CSV: &str = "\
location_start_date,location_end_date,data_as_of,lic_code_description,neighborhoods_analysis_boundaries,supervisor_district
2010-01-01T00:00:00,2012-01-01T00:00:00,2020-06-01T00:00:00,retail trade,Mission,9
2015-06-01T00:00:00,,2020-06-01T00:00:00,retail trade,Mission,9
not-a-date,,2020-06-01T00:00:00,retail trade,Mission,9
2010-01-01T00:00:00,2009-01-01T00:00:00,2020-06-01T00:00:00,retail trade,Mission,9
2011-05-20T00:00:00,,2020-06-01T00:00:00,hotels,Nob Hill,3
";

#[test]
fn test_csv_snapshot_flows_through_the_pipeline() {
    let path = temp_path("snapshot.csv");
    let mut file = File::create(&path).unwrap();
    file.write_all(SNAPSHOT_CSV.as_bytes()).unwrap();
    drop(file);

    let config = TableConfig::default();
    let batches = read_csv(&path, &config).unwrap();
    let rows = records_from_batches(&batches, &config);
    let _ = fs::remove_file(&path);

    // All five data rows extract; the bad date arrives as a missing field.
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2].start_date, None);
    assert_eq!(rows[1].end_date, None);

    // Derivation drops the unparsable start date and the negative duration.
    let table = SurvivalTable::from_raw(&rows);
    assert_eq!(table.len(), 3);
    assert_eq!(table.license_categories(), vec!["Hotels", "Retail Trade"]);
    assert_eq!(table.neighborhoods(), vec!["Mission", "Nob Hill"]);

    let report = table.report_for("Retail Trade", "Mission");
    assert_eq!(report.total, 2);
}

#[test]
fn test_csv_missing_contract_column_is_a_schema_error() {
    let path = temp_path("bad-snapshot.csv");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"location_start_date,lic_code_description\n2010-01-01,retail trade\n")
        .unwrap();
    drop(file);

    let result = read_csv(&path, &TableConfig::default());
    let _ = fs::remove_file(&path);

    match result {
        Err(SurvivalTableError::Schema(message)) => {
            assert!(message.contains("neighborhoods_analysis_boundaries"));
        }
        other => panic!("expected a schema error, got {other:?}"),
    }
}

#[test]
fn test_parquet_snapshot_projects_contract_columns() {
    let contract = TableConfig::default();
    let schema = Arc::new(Schema::new(vec![
        Field::new("location_start_date", DataType::Utf8, true),
        Field::new("location_end_date", DataType::Utf8, true),
        Field::new("data_as_of", DataType::Utf8, true),
        Field::new("lic_code_description", DataType::Utf8, true),
        Field::new("neighborhoods_analysis_boundaries", DataType::Utf8, true),
        Field::new("supervisor_district", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec![
                Some("2010-01-01T00:00:00"),
                Some("2015-06-01T00:00:00"),
            ])),
            Arc::new(StringArray::from(vec![Some("2012-01-01T00:00:00"), None])),
            Arc::new(StringArray::from(vec![
                Some("2020-06-01T00:00:00"),
                Some("2020-06-01T00:00:00"),
            ])),
            Arc::new(StringArray::from(vec![
                Some("retail trade"),
                Some("hotels"),
            ])),
            Arc::new(StringArray::from(vec![Some("Mission"), Some("Nob Hill")])),
            Arc::new(StringArray::from(vec![Some("9"), Some("3")])),
        ],
    )
    .unwrap();

    let path = temp_path("snapshot.parquet");
    let file = File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let batches = read_parquet(&path, &contract).unwrap();
    let _ = fs::remove_file(&path);

    // The extra column is projected away; the contract columns survive.
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].num_columns(), 5);

    let rows = records_from_batches(&batches, &contract);
    assert_eq!(rows.len(), 2);

    let table = SurvivalTable::from_raw(&rows);
    assert_eq!(table.len(), 2);
    assert!(table.records()[0].event_observed);
    assert!(table.records()[1].is_censored());
}

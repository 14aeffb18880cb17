//! Snapshot loading utilities
//!
//! The snapshot is published as a CSV export and sometimes re-exported as
//! parquet partitions; both land in Arrow record batches and flow through
//! the same row extraction.

use arrow::csv;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::TableConfig;
use crate::error::{Result, SurvivalTableError};
use crate::models::BusinessRecord;
use crate::schema::validate_columns;
use crate::utils::arrow::{extract_date, extract_string};

/// Batch size used when reading CSV snapshots
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Read a CSV snapshot into Arrow record batches.
///
/// The header is inferred only for column names; every column is then read
/// as a string so that date parsing happens downstream and fails soft per
/// cell instead of failing the file.
pub fn read_csv(path: &Path, config: &TableConfig) -> Result<Vec<RecordBatch>> {
    let mut file = File::open(path)?;

    let format = csv::reader::Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(&mut file, Some(100))?;
    file.rewind()?;

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|field| Field::new(field.name(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));
    validate_columns(&schema, &config.columns)?;

    let reader = csv::ReaderBuilder::new(schema)
        .with_header(true)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let mut batches = Vec::new();
    for batch_result in reader {
        batches.push(batch_result?);
    }

    log::info!(
        "read {} record batches from {}",
        batches.len(),
        path.display()
    );
    Ok(batches)
}

/// Read a parquet snapshot into Arrow record batches, projected onto the
/// contract columns. Contract columns absent from the file are logged and
/// skipped; the extraction step treats them as missing values.
pub fn read_parquet(path: &Path, config: &TableConfig) -> Result<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let file_schema = builder.schema().clone();
    let mut projection = Vec::new();
    for name in config.columns.column_names() {
        match file_schema.index_of(name) {
            Ok(index) => projection.push(index),
            Err(_) => {
                log::warn!("column {name} not found in {}, skipping", path.display());
            }
        }
    }

    let reader = if projection.is_empty() {
        log::warn!(
            "no contract columns found in {}, reading all columns",
            path.display()
        );
        builder.build()?
    } else {
        let mask = ProjectionMask::leaves(builder.parquet_schema(), projection);
        builder.with_projection(mask).build()?
    };

    let mut batches = Vec::new();
    for batch_result in reader {
        batches.push(batch_result?);
    }

    Ok(batches)
}

/// Load all parquet partitions of a snapshot directory in parallel
pub fn load_parquet_dir(dir: &Path, config: &TableConfig) -> Result<Vec<RecordBatch>> {
    if !dir.is_dir() {
        return Err(SurvivalTableError::Dataset(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut parquet_files = Vec::<PathBuf>::new();
    for entry_result in fs::read_dir(dir)? {
        let path = entry_result?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "parquet") {
            parquet_files.push(path);
        }
    }
    parquet_files.sort();

    if parquet_files.is_empty() {
        log::info!("no parquet files found in directory: {}", dir.display());
        return Ok(Vec::new());
    }

    let all_batches: Vec<Result<Vec<RecordBatch>>> = parquet_files
        .par_iter()
        .map(|path| read_parquet(path, config))
        .collect();

    let mut combined = Vec::new();
    for result in all_batches {
        combined.extend(result?);
    }

    Ok(combined)
}

/// Load a snapshot by location: a directory is treated as parquet
/// partitions, a `.parquet` file as parquet, anything else as CSV.
pub fn load_records(path: &Path, config: &TableConfig) -> Result<Vec<BusinessRecord>> {
    let batches = if path.is_dir() {
        load_parquet_dir(path, config)?
    } else if path.extension().is_some_and(|ext| ext == "parquet") {
        read_parquet(path, config)?
    } else {
        read_csv(path, config)?
    };

    Ok(records_from_batches(&batches, config))
}

/// Extract raw business records from record batches, row by row.
///
/// Null cells, blank strings, and unparsable dates become missing fields;
/// the derive step decides which rows survive.
#[must_use]
pub fn records_from_batches(batches: &[RecordBatch], config: &TableConfig) -> Vec<BusinessRecord> {
    let columns = &config.columns;
    let formats = &config.date_formats;

    let mut records = Vec::new();
    for batch in batches {
        for row in 0..batch.num_rows() {
            records.push(BusinessRecord {
                start_date: extract_date(batch, row, &columns.start_date, formats),
                end_date: extract_date(batch, row, &columns.end_date, formats),
                as_of_date: extract_date(batch, row, &columns.as_of_date, formats),
                license_category: extract_string(batch, row, &columns.license_category),
                neighborhood: extract_string(batch, row, &columns.neighborhood),
            });
        }
    }

    records
}

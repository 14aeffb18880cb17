//! Cell extraction utilities for Arrow record batches.
//!
//! Extraction is tolerant by design: an absent column, a null cell, a
//! blank string, or a value that fails to parse all yield `None`. The
//! derive step turns those into dropped records; nothing here errors.

use arrow::array::{
    Array, Date32Array, LargeStringArray, StringArray, TimestampMicrosecondArray,
    TimestampMillisecondArray, TimestampNanosecondArray, TimestampSecondArray,
};
use arrow::datatypes::{DataType, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::utils::date::parse_date_string;

/// Extract a trimmed string cell from a record batch.
///
/// Returns `None` when the column is absent, the cell is null, the value is
/// blank after trimming, or the column is not a string type.
#[must_use]
pub fn extract_string(batch: &RecordBatch, row: usize, column: &str) -> Option<String> {
    let index = batch.schema().index_of(column).ok()?;
    let array = batch.column(index);

    let value = match array.data_type() {
        DataType::Utf8 => {
            let strings = array.as_any().downcast_ref::<StringArray>()?;
            if row >= strings.len() || strings.is_null(row) {
                return None;
            }
            strings.value(row).to_string()
        }
        DataType::LargeUtf8 => {
            let strings = array.as_any().downcast_ref::<LargeStringArray>()?;
            if row >= strings.len() || strings.is_null(row) {
                return None;
            }
            strings.value(row).to_string()
        }
        _ => return None,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extract a date cell from a record batch.
///
/// String columns are parsed with the configured `formats`; `Date32` and
/// timestamp columns are converted directly. Unparsable values become
/// `None`, never an error.
#[must_use]
pub fn extract_date(
    batch: &RecordBatch,
    row: usize,
    column: &str,
    formats: &[String],
) -> Option<NaiveDate> {
    let index = batch.schema().index_of(column).ok()?;
    let array = batch.column(index);

    if row >= array.len() || array.is_null(row) {
        return None;
    }

    match array.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            let value = extract_string(batch, row, column)?;
            parse_date_string(&value, formats)
        }
        DataType::Date32 => {
            let dates = array.as_any().downcast_ref::<Date32Array>()?;
            dates.value_as_date(row)
        }
        DataType::Timestamp(TimeUnit::Second, _) => {
            let timestamps = array.as_any().downcast_ref::<TimestampSecondArray>()?;
            timestamps.value_as_datetime(row).map(|dt| dt.date())
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => {
            let timestamps = array.as_any().downcast_ref::<TimestampMillisecondArray>()?;
            timestamps.value_as_datetime(row).map(|dt| dt.date())
        }
        DataType::Timestamp(TimeUnit::Microsecond, _) => {
            let timestamps = array.as_any().downcast_ref::<TimestampMicrosecondArray>()?;
            timestamps.value_as_datetime(row).map(|dt| dt.date())
        }
        DataType::Timestamp(TimeUnit::Nanosecond, _) => {
            let timestamps = array.as_any().downcast_ref::<TimestampNanosecondArray>()?;
            timestamps.value_as_datetime(row).map(|dt| dt.date())
        }
        _ => None,
    }
}

//! Dataset column contract and schema validation.
//!
//! The registered-business snapshot is consumed by column name. The default
//! names follow the published dataset; a [`ColumnContract`] lets a caller
//! remap them for snapshots exported under different headers.

use arrow::datatypes::Schema;

use crate::error::{Result, SurvivalTableError};

/// Column names the snapshot is read through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnContract {
    /// Date the business location opened
    pub start_date: String,
    /// Date the business location closed (valued only for closed businesses)
    pub end_date: String,
    /// Snapshot date of the data export
    pub as_of_date: String,
    /// License code description
    pub license_category: String,
    /// Analysis neighborhood boundary
    pub neighborhood: String,
}

impl Default for ColumnContract {
    fn default() -> Self {
        Self {
            start_date: "location_start_date".to_string(),
            end_date: "location_end_date".to_string(),
            as_of_date: "data_as_of".to_string(),
            license_category: "lic_code_description".to_string(),
            neighborhood: "neighborhoods_analysis_boundaries".to_string(),
        }
    }
}

impl ColumnContract {
    /// All contract column names. Every one must exist in the snapshot;
    /// `end_date` may be null-valued but its column is still required.
    #[must_use]
    pub fn column_names(&self) -> [&str; 5] {
        [
            &self.start_date,
            &self.end_date,
            &self.as_of_date,
            &self.license_category,
            &self.neighborhood,
        ]
    }
}

/// Check that a snapshot schema carries every contract column.
///
/// # Errors
///
/// Returns a single `Schema` error naming all missing columns at once, so
/// a misexported snapshot is diagnosed in one pass.
pub fn validate_columns(schema: &Schema, contract: &ColumnContract) -> Result<()> {
    let missing: Vec<&str> = contract
        .column_names()
        .into_iter()
        .filter(|name| schema.index_of(name).is_err())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SurvivalTableError::Schema(format!(
            "snapshot is missing required columns: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field};

    #[test]
    fn test_validate_columns_reports_all_missing() {
        let schema = Schema::new(vec![
            Field::new("location_start_date", DataType::Utf8, true),
            Field::new("lic_code_description", DataType::Utf8, true),
        ]);

        let err = validate_columns(&schema, &ColumnContract::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("location_end_date"));
        assert!(message.contains("data_as_of"));
        assert!(message.contains("neighborhoods_analysis_boundaries"));
        assert!(!message.contains("location_start_date,"));
    }

    #[test]
    fn test_validate_columns_accepts_full_contract() {
        let contract = ColumnContract::default();
        let fields: Vec<Field> = contract
            .column_names()
            .into_iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();
        let schema = Schema::new(fields);

        assert!(validate_columns(&schema, &contract).is_ok());
    }
}

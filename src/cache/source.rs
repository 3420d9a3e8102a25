//! Data sources that produce a user-data snapshot
//!
//! HTTP transport lives outside this crate. Anything that can hand back a
//! `UserData` implements `UserDataSource`; the CLI reads an exported
//! `get-user-data` document from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::UserData;

/// Fetches a complete user-data snapshot
pub trait UserDataSource {
    fn fetch_user_data(&self) -> MonthwiseResult<UserData>;
}

/// Reads a `get-user-data` JSON document from a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserDataSource for JsonFileSource {
    fn fetch_user_data(&self) -> MonthwiseResult<UserData> {
        let path = &self.path;

        if !path.exists() {
            return Err(MonthwiseError::Io(format!(
                "Data file not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            MonthwiseError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let data: UserData = serde_json::from_reader(reader).map_err(|e| {
            MonthwiseError::Json(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            income = data.income.len(),
            expenses = data.expenses.len(),
            budgets = data.budgets.len(),
            "loaded user data"
        );

        Ok(data)
    }
}

/// Serves a fixed snapshot; useful when the data is already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub UserData);

impl UserDataSource for StaticSource {
    fn fetch_user_data(&self) -> MonthwiseResult<UserData> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_json_file_source_reads_payload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user-data.json");
        fs::write(
            &path,
            r#"{"income": [{"id": "i1", "amount": 1500.5, "isRecurring": false,
                            "createdAt": "2025-01-03T10:00:00.000Z"}]}"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let data = source.fetch_user_data().unwrap();
        assert_eq!(data.income.len(), 1);
        assert_eq!(data.income[0].amount.cents(), 150_050);
        assert!(data.expenses.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("missing.json"));
        let err = source.fetch_user_data().unwrap_err();
        assert!(matches!(err, MonthwiseError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileSource::new(&path).fetch_user_data().unwrap_err();
        assert!(matches!(err, MonthwiseError::Json(_)));
    }
}

//! Local JSON file

use super::DataSource;
use crate::error::{Error, Result};
use crate::types::Employee;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the directory from a JSON array on disk
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    /// Create a source for the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FileNotFound {
                        path: self.path.display().to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        let records: Vec<Employee> = serde_json::from_str(&contents)?;
        debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

//! Data sources
//!
//! A data source produces the full, ordered employee list in one call.
//!
//! # Implementations
//!
//! - [`HttpDataSource`] - GET a JSON array from a fixed URL
//! - [`FileDataSource`] - read a JSON array from disk
//! - [`StaticDataSource`] - serve an in-memory list

mod file;
mod remote;

use crate::error::Result;
use crate::types::Employee;
use async_trait::async_trait;
use std::sync::Arc;

pub use file::FileDataSource;
pub use remote::{HttpDataSource, DEFAULT_ENDPOINT};

/// Something that can produce the whole directory
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every record, in source order
    async fn fetch_all(&self) -> Result<Vec<Employee>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: DataSource + ?Sized> DataSource for Box<S> {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        (**self).fetch_all().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        (**self).fetch_all().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// In-memory data source
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    records: Vec<Employee>,
}

impl StaticDataSource {
    /// Create a source that always returns `records`
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

#[cfg(test)]
mod tests;

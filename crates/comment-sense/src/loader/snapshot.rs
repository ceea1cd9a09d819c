//! Shared, immutable dataset snapshot.
//!
//! The table is loaded once and handed out as `Arc<CommentTable>`. Readers
//! never observe a partially loaded table: [`SnapshotStore::refresh`] builds
//! the replacement completely before swapping the pointer under the write
//! lock. A failed refresh leaves the current snapshot in place.

use super::{CommentTable, DatasetLoader};
use crate::error::Result;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Holder of the current dataset snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    loader: DatasetLoader,
    current: RwLock<Arc<CommentTable>>,
}

impl SnapshotStore {
    /// Load the dataset and create a store around it.
    ///
    /// Fails with the loader's error when the initial load fails.
    pub fn open(loader: DatasetLoader) -> Result<Self> {
        let table = loader.load()?;
        Ok(Self {
            loader,
            current: RwLock::new(Arc::new(table)),
        })
    }

    /// The current snapshot. Cheap; clones the `Arc`.
    pub fn snapshot(&self) -> Arc<CommentTable> {
        Arc::clone(&self.current.read())
    }

    /// Location of the source file.
    pub fn source(&self) -> &Path {
        self.loader.path()
    }

    /// Re-read the source and replace the snapshot.
    ///
    /// Snapshots handed out earlier stay valid and unchanged.
    pub fn refresh(&self) -> Result<Arc<CommentTable>> {
        let table = match self.loader.load() {
            Ok(table) => Arc::new(table),
            Err(e) => {
                warn!("Refresh failed, keeping previous snapshot: {}", e);
                return Err(e.with_context("While refreshing snapshot"));
            }
        };

        *self.current.write() = Arc::clone(&table);
        info!("Snapshot refreshed: {} comments", table.len());
        Ok(table)
    }
}

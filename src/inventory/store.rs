//! Inventory storage backends.

use crate::error::{CalcError, Result};
use crate::model::InventoryEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered, append-only list of completed jobs.
pub trait InventoryStore {
    /// Load every stored entry in append order.
    fn load(&self) -> Result<Vec<InventoryEntry>>;

    /// Append one entry and persist the whole list.
    fn append(&mut self, entry: InventoryEntry) -> Result<()>;
}

/// Inventory kept as a pretty-printed JSON array in one file.
///
/// Every append rewrites the full file. There is no locking: two processes
/// appending at once race and the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<InventoryEntry>> {
        if !self.path.exists() {
            debug!("No inventory at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| CalcError::InventoryCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn append(&mut self, entry: InventoryEntry) -> Result<()> {
        // serde_json writes non-finite floats as null, which never loads back
        if !entry.has_finite_amounts() {
            return Err(CalcError::NonFiniteCost {
                field: "total_cost".to_string(),
                value: entry.total_cost,
            });
        }

        let mut entries = self.load()?;
        entries.push(entry);

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;

        info!(
            "Saved inventory entry #{} to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process inventory, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<InventoryEntry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<InventoryEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: InventoryEntry) -> Result<()> {
        self.entries.push(entry);
        Ok(())
    }
}

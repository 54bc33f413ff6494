//! Save/load of a whole store to a single named file.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use stockroom_inventory::InventoryStore;

use crate::codec;
use crate::error::PersistenceError;

/// Gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Appended to user-supplied names that do not already end with it.
    pub extension: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            extension: ".dat".to_string(),
        }
    }
}

/// Writes and reads complete inventory snapshots.
///
/// Every call opens, fully reads or writes, and closes its file. Writes are
/// not atomic: a failed save may leave a truncated file behind.
#[derive(Debug, Clone, Default)]
pub struct PersistenceGateway {
    config: GatewayConfig,
}

impl PersistenceGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Append the configured extension unless `filename` already has it.
    pub fn normalize_filename(&self, filename: &str) -> PathBuf {
        if filename.ends_with(&self.config.extension) {
            PathBuf::from(filename)
        } else {
            PathBuf::from(format!("{filename}{}", self.config.extension))
        }
    }

    /// Write the full store and return the path written.
    pub fn save(&self, store: &InventoryStore, filename: &str) -> Result<PathBuf, PersistenceError> {
        let path = self.normalize_filename(filename);

        let result = File::create(&path).and_then(|file| {
            let mut out = BufWriter::new(file);
            codec::encode(store, &mut out)?;
            out.flush()
        });

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), records = store.len(), "inventory saved");
                Ok(path)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "inventory save failed");
                Err(PersistenceError::io(path, err))
            }
        }
    }

    /// Read a previously saved store.
    ///
    /// The caller decides whether to replace its current store; nothing is
    /// touched on failure.
    pub fn load(&self, filename: &str) -> Result<(PathBuf, InventoryStore), PersistenceError> {
        let path = self.normalize_filename(filename);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "inventory file not found");
                return Err(PersistenceError::FileNotFound(path));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "inventory read failed");
                return Err(PersistenceError::io(path, err));
            }
        };

        match codec::decode(&bytes) {
            Ok(store) => {
                tracing::info!(path = %path.display(), records = store.len(), "inventory loaded");
                Ok((path, store))
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "inventory file is corrupt");
                Err(PersistenceError::CorruptFormat { path, source })
            }
        }
    }
}

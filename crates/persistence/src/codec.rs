//! On-disk layout of a saved inventory.
//!
//! A JSON document tagged with a format name and version:
//!
//! ```text
//! {
//!   "format": "stockroom-inventory",
//!   "version": 1,
//!   "records": [
//!     { "name": "Widget", "code": "W1", "quantity": 10, "price": 2.5 }
//!   ]
//! }
//! ```
//!
//! Decoding validates the envelope, then every record, then rebuilds the
//! store so the unique-code invariant is checked once more.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use stockroom_core::Price;
use stockroom_inventory::{InventoryRecord, InventoryStore};

use crate::error::DecodeError;

pub const FORMAT_NAME: &str = "stockroom-inventory";
pub const FORMAT_VERSION: u32 = 1;

/// Persisted envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryFile {
    pub format: String,
    pub version: u32,
    pub records: Vec<RecordDto>,
}

/// Persisted shape of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub code: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<&InventoryStore> for InventoryFile {
    fn from(store: &InventoryStore) -> Self {
        Self {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            records: store
                .records()
                .iter()
                .map(|r| RecordDto {
                    name: r.name().to_string(),
                    code: r.code().to_string(),
                    quantity: r.quantity(),
                    price: r.price(),
                })
                .collect(),
        }
    }
}

impl InventoryFile {
    /// Validate the envelope and records and rebuild the store.
    pub fn into_store(self) -> Result<InventoryStore, DecodeError> {
        if self.format != FORMAT_NAME {
            return Err(DecodeError::UnknownFormat(self.format));
        }
        if self.version != FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion(self.version));
        }

        let mut records = Vec::with_capacity(self.records.len());
        for (index, dto) in self.records.into_iter().enumerate() {
            if dto.name.trim().is_empty() {
                return Err(DecodeError::EmptyField { field: "name", index });
            }
            if dto.code.trim().is_empty() {
                return Err(DecodeError::EmptyField { field: "code", index });
            }
            let price = Price::new(dto.price).map_err(|_| DecodeError::InvalidPrice { index })?;
            records.push(InventoryRecord::new(dto.name, dto.code, dto.quantity, price.get()));
        }

        Ok(InventoryStore::from_records(records)?)
    }
}

/// Write `store` in file layout to `out`.
pub fn encode<W: Write>(store: &InventoryStore, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &InventoryFile::from(store)).map_err(io::Error::from)?;
    out.write_all(b"\n")
}

/// Rebuild a store from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<InventoryStore, DecodeError> {
    let file: InventoryFile =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    file.into_store()
}

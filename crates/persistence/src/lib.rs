//! File persistence for the inventory store.
//!
//! `codec` owns the serialized file layout; `gateway` owns file naming and the
//! open/read/write/close lifecycle.

pub mod codec;
pub mod error;
pub mod gateway;

pub use codec::{FORMAT_NAME, FORMAT_VERSION, InventoryFile, RecordDto, decode, encode};
pub use error::{DecodeError, PersistenceError};
pub use gateway::{GatewayConfig, PersistenceGateway};

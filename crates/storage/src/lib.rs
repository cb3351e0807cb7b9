#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Power-state persistence over any [`embedded-storage`] backend.
//!
//! A single postcard-encoded record lives at a fixed offset of the backend.
//! The record carries a magic value and the owning component's identity
//! key, so leftover bytes of an unrelated firmware, erased flash or a
//! record saved under another identity all read back as "no saved state"
//! instead of a bogus value.
//!
//! [`embedded-storage`]: https://docs.rs/embedded-storage

use embedded_storage::{ReadStorage, Storage};
use serde::{Deserialize, Serialize};
use wopr_core::{Error, PowerStore, Result};

pub mod test_utils;

const RECORD_MAGIC: u16 = 0x574F; // "WO"

/// Upper bound of the encoded record size.
const RECORD_BUF_LEN: usize = 16;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
struct PowerRecord {
    magic: u16,
    key: u32,
    enabled: bool,
}

/// Region of the backing storage reserved for the power record.
#[derive(Debug, Clone, Copy)]
pub struct MemoryLayout {
    pub base: u32,
    pub size: u32,
}

/// Returns a stable identity key for a named component.
///
/// FNV-1a over the component name, so the same name always maps to the
/// same record across firmware builds.
pub fn storage_key(name: &str) -> u32 {
    let mut hash: u32 = 0x811C_9DC5;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// [`PowerStore`] implementation over an [`embedded_storage::Storage`]
/// backend.
pub struct StorageImpl<B> {
    backend: B,
    layout: MemoryLayout,
    key: u32,
}

impl<B: Storage> StorageImpl<B>
where
    B::Error: core::fmt::Debug,
{
    /// Creates a store for the component identified by `key`.
    ///
    /// # Panics
    ///
    /// If the reserved region is too small to hold the record.
    pub fn new(backend: B, layout: MemoryLayout, key: u32) -> Self {
        assert!(
            layout.size as usize >= RECORD_BUF_LEN,
            "the reserved storage region cannot hold the power record"
        );
        Self {
            backend,
            layout,
            key,
        }
    }

    /// Releases the underlying backend.
    pub fn free(self) -> B {
        self.backend
    }

    fn read_record(&mut self) -> Result<Option<bool>> {
        let mut buf = [0_u8; RECORD_BUF_LEN];
        self.backend
            .read(self.layout.base, &mut buf)
            .map_err(Error::storage_read)?;

        // Anything that does not decode into our record is an absent
        // state: erased flash or a foreign leftover, not an error.
        let Ok(record) = postcard::from_bytes::<PowerRecord>(&buf) else {
            return Ok(None);
        };
        if record.magic != RECORD_MAGIC || record.key != self.key {
            return Ok(None);
        }
        Ok(Some(record.enabled))
    }

    fn write_record(&mut self, enabled: bool) -> Result<()> {
        let record = PowerRecord {
            magic: RECORD_MAGIC,
            key: self.key,
            enabled,
        };

        let mut buf = [0_u8; RECORD_BUF_LEN];
        postcard::to_slice(&record, &mut buf).map_err(Error::encode)?;
        self.backend
            .write(self.layout.base, &buf)
            .map_err(Error::storage_write)
    }
}

impl<B: Storage> PowerStore for StorageImpl<B>
where
    B::Error: core::fmt::Debug,
{
    fn load(&mut self) -> Option<bool> {
        match self.read_record() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("unable to load the saved power state: {}", err);
                None
            }
        }
    }

    fn save(&mut self, enabled: bool) {
        // Fire-and-forget: a failed save costs one stale restore, nothing
        // the engine needs to react to.
        if let Err(err) = self.write_record(enabled) {
            log::warn!("unable to persist the power state: {}", err);
        }
    }
}

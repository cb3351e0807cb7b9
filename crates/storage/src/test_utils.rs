//! Test helpers

use core::convert::Infallible;

use embedded_storage::{ReadStorage, Storage};

/// In-memory `embedded-storage` backend.
///
/// Starts out filled with `0xFF`, the way erased flash reads on a first
/// boot.
pub struct MemoryBackend([u8; 4096]);

impl Default for MemoryBackend {
    fn default() -> Self {
        Self([0xFF; 4096])
    }
}

impl ReadStorage for MemoryBackend {
    type Error = Infallible;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let from = offset as usize;
        let to = from + bytes.len();
        bytes.copy_from_slice(&self.0[from..to]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.0.len()
    }
}

impl Storage for MemoryBackend {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let from = offset as usize;
        let to = from + bytes.len();
        self.0[from..to].copy_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_roundtrip() {
        let mut backend = MemoryBackend::default();

        let expected_data = b"some bytes string".as_slice();
        for offset in (0..1024).step_by(64) {
            backend.write(offset, expected_data).unwrap();

            let mut actual_data = vec![0_u8; expected_data.len()];
            backend.read(offset, &mut actual_data).unwrap();
            assert_eq!(expected_data, actual_data);
        }
    }
}

use core::fmt::Debug;

use displaydoc::Display;

/// A specialized result type for the WOPR display engine.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while driving the display.
///
/// The taxonomy is deliberately small: pixel coordinates out of range are
/// not an error at all (silently ignored), configuration mistakes are
/// assertions at construction time, and the remaining variants only carry
/// collaborator failures outwards without retrying them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum Error {
    /// Unable to transmit bytes over the display bus.
    Transport,
    /// Unable to read from the persistent storage backend.
    StorageRead,
    /// Unable to write to the persistent storage backend.
    StorageWrite,
    /// Stored data decoding error.
    Decode,
    /// Stored data encoding error.
    Encode,
}

impl Error {
    /// Creates a new transport error.
    pub fn transport<E: Debug>(_: E) -> Self {
        Self::Transport
    }

    /// Creates a new storage read error.
    pub fn storage_read<E: Debug>(_: E) -> Self {
        Self::StorageRead
    }

    /// Creates a new storage write error.
    pub fn storage_write<E: Debug>(_: E) -> Self {
        Self::StorageWrite
    }

    /// Creates a new data decoding error.
    pub fn decode<E: Debug>(_: E) -> Self {
        Self::Decode
    }

    /// Creates a new data encoding error.
    pub fn encode<E: Debug>(_: E) -> Self {
        Self::Encode
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Core building blocks for the WOPR blinkenlights display: the bit-packed
//! framebuffer, the MAX7219 chained-chip protocol and the capability traits
//! a board has to provide to run the engine.

pub use errors::{Error, Result};
pub use framebuffer::{FrameBuffer, MAX_MATRIX_COUNT, ROWS};
pub use service::{Entropy, PowerStore, SpiTransport, StateObserver, Transport};
pub use time::{Clock, ElapsedTimer};

pub mod errors;
pub mod framebuffer;
pub mod proto;
pub mod service;
pub mod test_utils;
pub mod time;

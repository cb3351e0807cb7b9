//! MAX7219 chained-chip protocol.
//!
//! The chips in a chain share one long shift register and have no per-chip
//! addressing: every chip must receive its own (opcode, data) pair within a
//! single framed transaction. Global configuration sends the identical pair
//! to every chip, a row refresh sends the same row opcode but each chip its
//! own data byte.

use crate::{Error, FrameBuffer, Result, Transport, ROWS};

/// MAX7219 register opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    NoOp = 0x00,
    Digit0 = 0x01,
    DecodeMode = 0x09,
    Intensity = 0x0A,
    ScanLimit = 0x0B,
    Shutdown = 0x0C,
    DisplayTest = 0x0F,
}

impl Command {
    /// Returns the opcode selecting the digit register of one hardware row.
    pub fn digit(row: usize) -> u8 {
        debug_assert!(row < ROWS);
        Command::Digit0 as u8 + row as u8
    }
}

/// Codec for a linear chain of identically-configured MAX7219 chips.
pub struct Chain<T: Transport> {
    transport: T,
    matrix_count: usize,
}

impl<T: Transport> Chain<T> {
    pub fn new(transport: T, matrix_count: usize) -> Self {
        Self {
            transport,
            matrix_count,
        }
    }

    /// Sends one global command, replicated to every chip in the chain.
    pub fn send_command(&mut self, command: Command, data: u8) -> Result<()> {
        let matrix_count = self.matrix_count;
        self.framed(|transport| {
            for _ in 0..matrix_count {
                transport.write_byte(command as u8)?;
                transport.write_byte(data)?;
            }
            Ok(())
        })
    }

    /// Sends one framebuffer row, each chip receiving its own data byte.
    pub fn send_row(&mut self, row: usize, framebuffer: &FrameBuffer) -> Result<()> {
        let opcode = Command::digit(row);
        let bytes = framebuffer.row_bytes(row);
        self.framed(|transport| {
            for &byte in bytes {
                transport.write_byte(opcode)?;
                transport.write_byte(byte)?;
            }
            Ok(())
        })
    }

    /// Brings the whole chain into raw bitmap mode and shows `framebuffer`.
    ///
    /// The command order matters: intensity and scan limit are programmed
    /// while the chips are still shut down and therefore blank, and decode
    /// mode is switched off before any digit register carries data, so row
    /// bytes are never interpreted as BCD digit codes.
    pub fn initialize(&mut self, intensity: u8, framebuffer: &FrameBuffer) -> Result<()> {
        self.send_command(Command::Shutdown, 0)?;
        self.send_command(Command::DisplayTest, 0)?;
        self.send_command(Command::ScanLimit, 7)?;
        self.send_command(Command::DecodeMode, 0)?;
        self.send_command(Command::Intensity, intensity)?;
        self.send_command(Command::Shutdown, 1)?;

        self.refresh(framebuffer)?;
        log::debug!("MAX7219 chain of {} initialized", self.matrix_count);
        Ok(())
    }

    /// Pushes the whole framebuffer out, one independent frame per row.
    ///
    /// Rows carry no dependency on each other, so an interruption between
    /// rows at worst leaves stale rows on screen until the next refresh.
    pub fn refresh(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        for row in 0..ROWS {
            self.send_row(row, framebuffer)?;
        }
        Ok(())
    }

    /// Runs `fill` with the bus exclusively acquired; the bus is released
    /// even when writing fails mid-frame.
    fn framed<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> core::result::Result<(), T::Error>,
    {
        self.transport.enable().map_err(Error::transport)?;
        let result = fill(&mut self.transport);
        self.transport.disable().map_err(Error::transport)?;
        result.map_err(Error::transport)
    }
}

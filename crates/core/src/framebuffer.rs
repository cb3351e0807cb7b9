//! Bit-packed framebuffer for a linear chain of 8x8 LED matrices.

/// Number of hardware rows of a single matrix.
pub const ROWS: usize = 8;

/// The longest supported chain of matrices.
pub const MAX_MATRIX_COUNT: usize = 32;

const MAX_BUF_LEN: usize = ROWS * MAX_MATRIX_COUNT;

/// A monochrome 8-row by `8 * matrix_count`-column bitmap.
///
/// One byte holds one matrix-wide slice of one row; bit 7 is the leftmost
/// column of that matrix. The buffer is sized once at construction and is
/// never reallocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    matrix_count: usize,
    buf: heapless::Vec<u8, MAX_BUF_LEN>,
}

impl FrameBuffer {
    /// Creates a zeroed framebuffer for the given chain length.
    ///
    /// # Panics
    ///
    /// If `matrix_count` is zero or longer than [`MAX_MATRIX_COUNT`].
    pub fn new(matrix_count: usize) -> Self {
        assert!(
            (1..=MAX_MATRIX_COUNT).contains(&matrix_count),
            "the chain must contain between 1 and {} matrices",
            MAX_MATRIX_COUNT
        );

        let mut buf = heapless::Vec::new();
        buf.resize_default(ROWS * matrix_count)
            .expect("the checked chain length always fits the fixed capacity");
        Self { matrix_count, buf }
    }

    /// Returns the number of matrices in the chain.
    pub fn matrix_count(&self) -> usize {
        self.matrix_count
    }

    /// Returns the logical display width in pixels.
    pub fn width(&self) -> usize {
        self.matrix_count * 8
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.buf.iter_mut().for_each(|byte| *byte = 0);
    }

    /// Sets or clears a single pixel.
    ///
    /// Coordinates outside of the display are silently ignored, so callers
    /// iterating a computed logical width can never fault on an off-by-one.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width() || y >= ROWS {
            return;
        }

        let (index, mask) = self.locate(x, y);
        if value {
            self.buf[index] |= mask;
        } else {
            self.buf[index] &= !mask;
        }
    }

    /// Returns the state of a single pixel; out-of-range reads are off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width() || y >= ROWS {
            return false;
        }

        let (index, mask) = self.locate(x, y);
        self.buf[index] & mask != 0
    }

    /// Returns the whole packed buffer, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the bytes of one hardware row in chain order, matrix 0 first.
    pub fn row_bytes(&self, row: usize) -> &[u8] {
        let start = row * self.matrix_count;
        &self.buf[start..start + self.matrix_count]
    }

    fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        let matrix = x / 8;
        let bit_index = x % 8;
        let index = y * self.matrix_count + matrix;
        (index, 1 << (7 - bit_index))
    }
}

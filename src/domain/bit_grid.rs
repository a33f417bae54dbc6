//! Bit-packed cell storage.
//! Each cell is stored as a single bit, 64 cells per chunk, rows padded
//! up to a whole number of chunks. Addressing here is plain in-range
//! `usize`; wraparound lives one layer up in [`Grid`](super::Grid).

/// A chunk of 64 cells stored as a single u64
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Chunk64(pub u64);

impl Chunk64 {
    /// Create empty chunk (all dead)
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Get cell state at position (0-63)
    #[inline]
    pub fn get(&self, idx: u8) -> bool {
        debug_assert!(idx < 64);
        (self.0 >> idx) & 1 == 1
    }

    /// Set cell state at position (0-63)
    #[inline]
    pub fn set(&mut self, idx: u8, alive: bool) {
        debug_assert!(idx < 64);
        if alive {
            self.0 |= 1u64 << idx;
        } else {
            self.0 &= !(1u64 << idx);
        }
    }

    /// Count alive cells (population count)
    #[inline]
    pub fn count_alive(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Bit-packed, row-major storage for a fixed `width x height` board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    /// Width in chunks (ceil(width / 64))
    chunk_width: usize,
    chunks: Vec<Chunk64>,
}

impl BitGrid {
    /// Create new empty bit grid
    pub fn new(width: usize, height: usize) -> Self {
        let chunk_width = width.div_ceil(64);

        Self {
            width,
            height,
            chunk_width,
            chunks: vec![Chunk64::empty(); chunk_width * height],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of chunks making up one row.
    pub const fn chunk_width(&self) -> usize {
        self.chunk_width
    }

    #[inline]
    const fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        (y * self.chunk_width + x / 64, (x % 64) as u8)
    }

    /// Get cell state at (x, y). Out-of-range reads are dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (chunk_idx, bit_idx) = self.locate(x, y);
        self.chunks[chunk_idx].get(bit_idx)
    }

    /// Set cell state at (x, y). Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (chunk_idx, bit_idx) = self.locate(x, y);
        self.chunks[chunk_idx].set(bit_idx, alive);
    }

    /// Mutable row-major chunk slice, `chunk_width` chunks per row.
    /// Padding bits past `width` must stay zero.
    pub fn chunks_mut(&mut self) -> &mut [Chunk64] {
        &mut self.chunks
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.chunks.iter().map(|c| c.count_alive() as usize).sum()
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.chunks.iter_mut().for_each(|c| *c = Chunk64::empty());
    }
}

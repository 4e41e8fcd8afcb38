//! Exact per-color pixel counts and the ranking built on them.

use std::collections::HashMap;

use crate::buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::color::Rgb;
use crate::{ColorError, Result};

/// A distinct color and how many pixels carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Rgb,
    pub count: u64,
}

/// Occurrence count of every distinct RGB triplet in a pixel buffer.
///
/// Alpha is not part of the key. Entries are kept in the order their color was
/// first seen, which is what makes ranking ties deterministic.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<Rgb, usize>,
    entries: Vec<ColorCount>,
}

impl FrequencyTable {
    /// Count every 4-byte RGBA pixel of `bytes`. A trailing partial pixel is ignored.
    pub fn from_rgba(bytes: &[u8]) -> Self {
        let mut table = Self::default();
        // Runs of identical pixels skip the hash lookup.
        let mut last: Option<(Rgb, usize)> = None;

        for px in bytes.chunks_exact(BYTES_PER_PIXEL) {
            let color = Rgb::new(px[0], px[1], px[2]);
            let slot = match last {
                Some((prev, slot)) if prev == color => slot,
                _ => table.slot_for(color),
            };
            table.entries[slot].count += 1;
            last = Some((color, slot));
        }

        table
    }

    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self::from_rgba(buffer.as_bytes())
    }

    fn slot_for(&mut self, color: Rgb) -> usize {
        let entries = &mut self.entries;
        *self.index.entry(color).or_insert_with(|| {
            entries.push(ColorCount { color, count: 0 });
            entries.len() - 1
        })
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, color: Rgb) -> Option<u64> {
        self.index.get(&color).map(|&slot| self.entries[slot].count)
    }

    /// Sum of all counts, i.e. the number of pixels scanned.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[ColorCount] {
        &self.entries
    }

    /// All entries by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<ColorCount> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `k` most frequent colors, or all of them when `k` exceeds [`len`](Self::len).
    pub fn top(&self, k: usize) -> Vec<Rgb> {
        if k == 0 {
            return Vec::new();
        }
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked.into_iter().map(|e| e.color).collect()
    }
}

/// Check a caller-supplied color count. Negative values are rejected, not clamped.
pub fn requested_count(requested: i64) -> Result<usize> {
    usize::try_from(requested).map_err(|_| ColorError::invalid_argument("number_of_colors", requested))
}

/// Rank `table` and keep the first `requested` colors.
pub fn select_top(table: &FrequencyTable, requested: i64) -> Result<Vec<Rgb>> {
    Ok(table.top(requested_count(requested)?))
}

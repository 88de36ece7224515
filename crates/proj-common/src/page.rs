//! Offset/limit pagination over a grid's linear index space.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A window `[offset, offset + limit)` over the indices `[0, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Build a page from raw request values, clamping `offset` up to 0 and
    /// `limit` up to 1.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0) as u64,
            limit: limit.max(1) as u64,
        }
    }

    /// The indices this page covers in a grid of `total` points.
    ///
    /// Empty when `offset >= total`.
    pub fn window(&self, total: u64) -> Range<u64> {
        let end = self.offset.saturating_add(self.limit).min(total);
        self.offset.min(end)..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 1,
        }
    }
}

//! Grid state - the permanently locked blocks.
//!
//! The grid owns an unordered collection of locked blocks and answers the
//! single collision predicate used for gravity, horizontal movement and
//! rotation legality alike. Coordinates: (x, y) with x in 0..10 (left to
//! right) and y in 0..16 (top to bottom); row 0 is the spawn row.

use crate::types::{BlockColor, GRID_HEIGHT, GRID_WIDTH};

/// A permanently settled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedBlock {
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

/// The set of locked blocks on the playfield.
///
/// Invariant: no two blocks share a cell, and every block satisfies
/// 0 <= x < GRID_WIDTH and 0 <= y < GRID_HEIGHT. Rows equal to the grid
/// height are never stored; a piece reaching them collides first.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    blocks: Vec<LockedBlock>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Locked blocks, in lock order.
    pub fn blocks(&self) -> &[LockedBlock] {
        &self.blocks
    }

    /// True if any cell is below the floor, outside a side wall, or on a
    /// locked block.
    pub fn collides(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().any(|&(x, y)| {
            y >= GRID_HEIGHT as i8
                || x < 0
                || x >= GRID_WIDTH as i8
                || self.blocks.iter().any(|b| b.x == x && b.y == y)
        })
    }

    /// Append cells as locked blocks.
    ///
    /// No overlap check: the caller guarantees the cells were collision-free
    /// one step earlier.
    pub fn lock(&mut self, cells: &[(i8, i8)], color: BlockColor) {
        self.blocks
            .extend(cells.iter().map(|&(x, y)| LockedBlock { x, y, color }));
    }

    /// Clear every full row, compact the stack, and return the count.
    ///
    /// Cleared rows are processed one at a time in ascending order; blocks
    /// strictly above a cleared row shift down by one for each such row.
    /// Batching the shift would over-compact when two rows clear in the
    /// same frame.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut full_rows: Vec<i8> = Vec::new();
        for y in 0..GRID_HEIGHT as i8 {
            let filled = self.blocks.iter().filter(|b| b.y == y).count();
            if filled == GRID_WIDTH as usize {
                full_rows.push(y);
            }
        }

        if full_rows.is_empty() {
            return 0;
        }

        self.blocks.retain(|b| !full_rows.contains(&b.y));

        for &row in &full_rows {
            for block in &mut self.blocks {
                if block.y < row {
                    block.y += 1;
                }
            }
        }

        full_rows.len() as u32
    }

    /// True once the spawn row is permanently blocked.
    pub fn is_game_over(&self) -> bool {
        self.blocks.iter().any(|b| b.y == 0)
    }

    /// Drop every block (session reset).
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

//! Render-facing session snapshots.
//!
//! The render adapter never touches live session state; it reads a copy
//! taken after the frame's update. [`GameSnapshot`] is designed for reuse:
//! `snapshot_into` refills the same buffers every frame.

use arrayvec::ArrayVec;

use crate::grid::LockedBlock;
use crate::types::BlockColor;

/// One colored cell of the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl From<LockedBlock> for CellView {
    fn from(block: LockedBlock) -> Self {
        Self {
            x: block.x,
            y: block.y,
            color: block.color,
        }
    }
}

/// Everything the render adapter needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    /// Locked blocks, in lock order.
    pub blocks: Vec<CellView>,
    /// Cells of the active piece.
    pub active: ArrayVec<CellView, 5>,
    pub lines_cleared: u32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub paused: bool,
}

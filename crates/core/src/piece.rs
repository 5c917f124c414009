//! The falling piece: a shape identity plus anchor position and orientation.

use arrayvec::ArrayVec;

use crate::shape::{geometry, CellOffset};
use crate::types::{Orientation, ShapeKind, SPAWN_POSITION};

/// The active falling piece.
///
/// A small value type: geometry is never stored here, it is derived on
/// demand from the cached shape table. All mutators are unconditional; the
/// session owns collision checks and rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub orientation: Orientation,
}

impl Piece {
    /// Create a piece of the given kind at the spawn anchor.
    pub fn new(kind: ShapeKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            x,
            y,
            orientation: Orientation::North,
        }
    }

    /// Re-deal this piece as a new shape at the spawn anchor.
    pub fn reset(&mut self, kind: ShapeKind) {
        *self = Self::new(kind);
    }

    /// Advance orientation one step clockwise.
    pub fn rotate_cw(&mut self) {
        self.orientation = self.orientation.rotate_cw();
    }

    /// Retreat orientation one step counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.orientation = self.orientation.rotate_ccw();
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    /// Occupied grid cells: the cached geometry translated by the anchor.
    pub fn cells(&self) -> ArrayVec<CellOffset, 5> {
        geometry(self.kind, self.orientation)
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

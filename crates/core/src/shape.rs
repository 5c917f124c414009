//! Shape geometry - generator-walk orientation tables.
//!
//! Each shape is defined by a short sequence of compass steps rather than
//! hand-written offset tables. Walking the sequence with every step
//! reoriented by the piece's rotation yields the occupied cells for that
//! rotation. The walk runs once per shape and orientation when the table is
//! first touched; lookups after that are plain slice reads.

use std::sync::LazyLock;

use arrayvec::ArrayVec;

use crate::types::{Orientation, ShapeKind};

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// Occupied offsets for one shape orientation.
///
/// An n-step generator records n + 1 positions (origin included), so four
/// steps bound the capacity at five; deduplication may shrink the set.
pub type OffsetSet = ArrayVec<CellOffset, 5>;

/// Canonical generator steps per shape.
fn generator(kind: ShapeKind) -> &'static [Orientation] {
    use Orientation::{East as E, North as N, South as S, West as W};
    match kind {
        ShapeKind::I => &[S, S, S],
        ShapeKind::J => &[E, E, S],
        ShapeKind::L => &[N, E, E],
        ShapeKind::O => &[E, S, W],
        ShapeKind::S => &[E, N, E],
        ShapeKind::T => &[E, S, N, E],
        ShapeKind::Z => &[E, S, E],
    }
}

fn kind_index(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::I => 0,
        ShapeKind::J => 1,
        ShapeKind::L => 2,
        ShapeKind::O => 3,
        ShapeKind::S => 4,
        ShapeKind::T => 5,
        ShapeKind::Z => 6,
    }
}

/// Walk a generator under the given orientation and normalize the result.
///
/// Positions are recorded after every step, shifted so the bounding box
/// starts at (0, 0), and deduplicated keeping first-seen order. A walk that
/// revisits a cell simply yields fewer offsets; no fixup is applied.
fn build_orientation(steps: &[Orientation], orientation: Orientation) -> OffsetSet {
    let mut positions: ArrayVec<CellOffset, 5> = ArrayVec::new();
    let (mut x, mut y) = (0i8, 0i8);
    positions.push((x, y));
    for &step in steps {
        let (dx, dy) = step.rotated_by(orientation).unit_step();
        x += dx;
        y += dy;
        positions.push((x, y));
    }

    let min_x = positions.iter().map(|p| p.0).min().unwrap_or(0);
    let min_y = positions.iter().map(|p| p.1).min().unwrap_or(0);

    let mut offsets = OffsetSet::new();
    for &(px, py) in &positions {
        let cell = (px - min_x, py - min_y);
        if !offsets.contains(&cell) {
            offsets.push(cell);
        }
    }
    offsets
}

struct ShapeTable {
    offsets: [[OffsetSet; 4]; 7],
}

impl ShapeTable {
    fn build() -> Self {
        let offsets = std::array::from_fn(|s| {
            std::array::from_fn(|o| {
                build_orientation(generator(ShapeKind::ALL[s]), Orientation::ALL[o])
            })
        });
        Self { offsets }
    }
}

static SHAPES: LazyLock<ShapeTable> = LazyLock::new(ShapeTable::build);

/// Occupied cell offsets for a shape in a given orientation.
///
/// Offsets are normalized so the minimum x and minimum y are both 0 for
/// that orientation. The returned slice is immutable table data.
pub fn geometry(kind: ShapeKind, orientation: Orientation) -> &'static [CellOffset] {
    &SHAPES.offsets[kind_index(kind)][orientation.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_anchored_at_origin() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let offsets = geometry(kind, orientation);
                let min_x = offsets.iter().map(|o| o.0).min().unwrap();
                let min_y = offsets.iter().map(|o| o.1).min().unwrap();
                assert_eq!(
                    (min_x, min_y),
                    (0, 0),
                    "{:?} {:?} not origin-anchored",
                    kind,
                    orientation
                );
            }
        }
    }

    #[test]
    fn offsets_are_unique() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let offsets = geometry(kind, orientation);
                for (i, a) in offsets.iter().enumerate() {
                    for b in offsets.iter().skip(i + 1) {
                        assert_ne!(a, b, "{:?} {:?} has duplicate cells", kind, orientation);
                    }
                }
            }
        }
    }

    #[test]
    fn every_orientation_has_four_cells() {
        // All seven generators yield four distinct cells; T's five-position
        // walk revisits one cell and collapses to four.
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                assert_eq!(geometry(kind, orientation).len(), 4);
            }
        }
    }

    #[test]
    fn i_is_a_straight_line() {
        assert_eq!(
            geometry(ShapeKind::I, Orientation::North),
            &[(0, 0), (0, 1), (0, 2), (0, 3)]
        );
        assert_eq!(
            geometry(ShapeKind::I, Orientation::East),
            &[(3, 0), (2, 0), (1, 0), (0, 0)]
        );
    }

    #[test]
    fn o_is_the_same_square_in_every_orientation() {
        let mut expected = vec![(0, 0), (0, 1), (1, 0), (1, 1)];
        expected.sort_unstable();
        for orientation in Orientation::ALL {
            let mut cells: Vec<_> = geometry(ShapeKind::O, orientation).to_vec();
            cells.sort_unstable();
            assert_eq!(cells, expected);
        }
    }

    #[test]
    fn t_walk_collapses_the_revisited_cell() {
        // Generator E, S, N, E passes through (1, 0) twice.
        assert_eq!(
            geometry(ShapeKind::T, Orientation::North),
            &[(0, 0), (1, 0), (1, 1), (2, 0)]
        );
    }
}

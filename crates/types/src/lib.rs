//! Shared types and constants for the gridfall workspace.
//!
//! Pure data structures with no dependencies, usable from the core state
//! machine, the terminal renderer, and the input mapper alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 16 rows (indexed 0-15)
//! - **Spawn anchor**: column 4, row 0
//!
//! # Timing and progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `BASE_TICK_MS` | 1000 | Gravity interval at session start |
//! | `TICK_SPEEDUP` | 0.95 | Gravity interval multiplier per level step |
//! | `LINES_PER_LEVEL` | 2 | Lines accumulated per speed-up |
//! | `LINE_SCORE` | 100 | Points per cleared row |
//! | `DROP_SCORE` | 10 | Points per drop distance cell |
//!
//! The gravity interval has no lower bound: it keeps shrinking by 5% per
//! level step for the whole session.
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{Orientation, ShapeKind, GRID_WIDTH, GRID_HEIGHT};
//!
//! let o = Orientation::North;
//! assert_eq!(o.rotate_cw(), Orientation::East);
//! assert_eq!(o.rotate_ccw(), Orientation::West);
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 16);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: u8 = 16;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity tick interval at session start (1000ms = 1 row per second)
pub const BASE_TICK_MS: u64 = 1000;

/// Gravity interval multiplier applied on each level step (no floor)
pub const TICK_SPEEDUP: f64 = 0.95;

/// Lines accumulated toward the next speed-up
pub const LINES_PER_LEVEL: u32 = 2;

/// Points awarded per cleared row
pub const LINE_SCORE: u32 = 100;

/// Points awarded per cell of drop distance
pub const DROP_SCORE: u32 = 10;

/// Spawn anchor for a freshly dealt piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (4, 0);

/// The four discrete rotation states, doubling as compass step directions.
///
/// As a rotation state the cycle goes North → East → South → West → North
/// (clockwise). As a direction each variant has a unit step on the grid,
/// with y growing downward: N=(0,-1), E=(1,0), S=(0,1), W=(-1,0).
///
/// The group arithmetic is index-based and normalized with `rem_euclid`, so
/// stepping backwards from North lands on West rather than a negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Index of this orientation in the clockwise cycle (0-3).
    pub fn index(self) -> i8 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Orientation for an arbitrary signed index, normalized into [0, 4).
    pub fn from_index(index: i8) -> Self {
        match index.rem_euclid(4) {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    /// Rotate clockwise (90°).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_ccw(), Orientation::West);
    /// assert_eq!(Orientation::East.rotate_ccw(), Orientation::North);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() - 1)
    }

    /// Compose two rotations (used to reorient generator steps).
    pub fn rotated_by(self, by: Orientation) -> Self {
        Self::from_index(self.index() + by.index())
    }

    /// Unit grid movement when this orientation is read as a direction.
    pub fn unit_step(self) -> (i8, i8) {
        match self {
            Orientation::North => (0, -1),
            Orientation::East => (1, 0),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
        }
    }
}

/// The seven falling-piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shape kinds, in dealing order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Fixed display color for this shape.
    pub fn color(self) -> BlockColor {
        match self {
            ShapeKind::I => BlockColor::Red,
            ShapeKind::J => BlockColor::Magenta,
            ShapeKind::L => BlockColor::Yellow,
            ShapeKind::O => BlockColor::Cyan,
            ShapeKind::S => BlockColor::Blue,
            ShapeKind::T => BlockColor::Silver,
            ShapeKind::Z => BlockColor::Green,
        }
    }
}

/// Display color carried by locked blocks and the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Magenta,
    Yellow,
    Cyan,
    Blue,
    Silver,
    Green,
}

/// Player actions applied to the game session.
///
/// Actions are edge-triggered: one action per key press, never repeated
/// while a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop the piece to its landing position
    Drop,
    /// Toggle pause state
    Pause,
    /// Start a fresh session (only honored while game over)
    Restart,
}

//! Game session - the per-frame state machine.
//!
//! Composes the grid and the falling piece and owns all policy: tick
//! timing, scoring, leveling, pause, game over and restart. Every field is
//! owned by the session and mutated only from [`GameSession::update`], once
//! per frame, in a fixed order: row clears, gravity, input actions, then
//! lock-and-deal.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{ShapeSource, UniformDealer};
use crate::snapshot::{CellView, GameSnapshot};
use crate::types::{
    GameAction, BASE_TICK_MS, DROP_SCORE, GRID_HEIGHT, GRID_WIDTH, LINES_PER_LEVEL, LINE_SCORE,
    TICK_SPEEDUP,
};

/// Complete game session state.
///
/// Generic over the shape source so tests can script deal sequences; the
/// default is the seedable [`UniformDealer`].
#[derive(Debug, Clone)]
pub struct GameSession<S = UniformDealer> {
    grid: Grid,
    piece: Piece,
    dealer: S,
    game_over: bool,
    paused: bool,
    lines_cleared: u32,
    /// Lines accumulated toward the next speed-up; wraps by subtraction.
    level_lines: u32,
    score: u32,
    tick_interval: Duration,
    since_last_tick: Duration,
}

impl GameSession<UniformDealer> {
    /// Create a session with the production dealer and the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformDealer::new(seed))
    }
}

impl Default for GameSession<UniformDealer> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: ShapeSource> GameSession<S> {
    /// Create a session around an injected shape source and deal the first
    /// piece.
    pub fn with_source(mut dealer: S) -> Self {
        let piece = Piece::new(dealer.next_shape());
        Self {
            grid: Grid::new(),
            piece,
            dealer,
            game_over: false,
            paused: false,
            lines_cleared: 0,
            level_lines: 0,
            score: 0,
            tick_interval: Duration::from_millis(BASE_TICK_MS),
            since_last_tick: Duration::ZERO,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Display level: one plus a step per `LINES_PER_LEVEL` cleared lines.
    pub fn level(&self) -> u32 {
        self.lines_cleared / LINES_PER_LEVEL + 1
    }

    /// Current gravity interval. Shrinks by 5% per level step, without a
    /// floor.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Advance the session by one frame.
    ///
    /// The order is fixed and observable: completed rows clear and score
    /// first, then gravity may tick the piece down, then player actions
    /// apply, and finally the piece settles if its next step down collides.
    /// While game over, only [`GameAction::Restart`] is honored.
    pub fn update(&mut self, elapsed: Duration, actions: &[GameAction]) {
        if self.game_over {
            if actions.contains(&GameAction::Restart) {
                self.reset();
            }
            return;
        }

        if !self.paused {
            self.clear_rows();
            self.tick_gravity(elapsed);
        }

        for &action in actions {
            self.apply_action(action);
        }

        if !self.paused {
            self.settle();
        }
    }

    /// Apply one player action.
    ///
    /// The pause toggle works in any non-game-over state; everything else
    /// is suppressed while paused. Illegal moves revert and leave the piece
    /// untouched — there is no failure path.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Pause => self.paused = !self.paused,
            _ if self.paused => {}
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::Drop => self.drop(),
            // Only honored while game over (see `update`).
            GameAction::Restart => {}
        }
    }

    /// Start the session over: empty grid, fresh counters, base speed, and
    /// a newly dealt piece.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.next_shape();
        self.game_over = false;
        self.paused = false;
        self.lines_cleared = 0;
        self.level_lines = 0;
        self.score = 0;
        self.tick_interval = Duration::from_millis(BASE_TICK_MS);
        self.since_last_tick = Duration::ZERO;
    }

    /// Fill a reusable snapshot with the current render surface.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.blocks.clear();
        out.blocks
            .extend(self.grid.blocks().iter().copied().map(CellView::from));

        out.active.clear();
        let color = self.piece.kind.color();
        for (x, y) in self.piece.cells() {
            out.active.push(CellView { x, y, color });
        }

        out.lines_cleared = self.lines_cleared;
        out.score = self.score;
        out.level = self.level();
        out.game_over = self.game_over;
        out.paused = self.paused;
    }

    /// Allocating convenience wrapper around [`Self::snapshot_into`].
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn clear_rows(&mut self) {
        let cleared = self.grid.clear_full_rows();
        if cleared == 0 {
            return;
        }

        self.lines_cleared += cleared;
        self.level_lines += cleared;
        self.score += cleared * LINE_SCORE;

        if self.level_lines >= LINES_PER_LEVEL {
            self.level_lines -= LINES_PER_LEVEL;
            self.tick_interval = self.tick_interval.mul_f64(TICK_SPEEDUP);
        }
    }

    fn tick_gravity(&mut self, elapsed: Duration) {
        self.since_last_tick += elapsed;
        if self.since_last_tick < self.tick_interval {
            return;
        }
        self.since_last_tick -= self.tick_interval;

        // Unconditional: the settle step at the end of the frame decides
        // whether the piece has landed.
        self.piece.move_down();
    }

    fn move_left(&mut self) {
        self.piece.move_left();
        if self.grid.collides(&self.piece.cells()) {
            self.piece.move_right();
        }
    }

    fn move_right(&mut self) {
        self.piece.move_right();
        if self.grid.collides(&self.piece.cells()) {
            self.piece.move_left();
        }
    }

    /// Rotate clockwise with a single right-wall nudge: if the rotated
    /// bounding box pokes past the right wall, shift left by exactly the
    /// overflow before the collision test. No other kicks exist; a rotation
    /// that still collides reverts completely.
    fn rotate_cw(&mut self) {
        self.piece.rotate_cw();

        let max_x = self.piece.cells().iter().map(|c| c.0).max().unwrap_or(0);
        let overflow = max_x - (GRID_WIDTH as i8 - 1);
        for _ in 0..overflow {
            self.piece.move_left();
        }

        if self.grid.collides(&self.piece.cells()) {
            self.piece.rotate_ccw();
            for _ in 0..overflow {
                self.piece.move_right();
            }
        }
    }

    /// Land the piece: descend to one row above the closest obstruction and
    /// score per cell of fall distance. The settle step in the same frame
    /// locks it.
    fn drop(&mut self) {
        let distance = self.drop_distance();
        for _ in 1..distance {
            self.piece.move_down();
        }
        if distance > 0 {
            self.score += distance as u32 * DROP_SCORE;
        }
    }

    /// Minimal fall distance over the piece's cells: rows until the highest
    /// locked block in each occupied column, or until the floor for columns
    /// holding no blocks.
    fn drop_distance(&self) -> i32 {
        self.piece
            .cells()
            .iter()
            .map(|&(x, y)| {
                let closest = self
                    .grid
                    .blocks()
                    .iter()
                    .filter(|b| b.x == x)
                    .map(|b| b.y)
                    .min();
                match closest {
                    Some(top) => i32::from(top) - i32::from(y),
                    None => i32::from(GRID_HEIGHT) - i32::from(y),
                }
            })
            .min()
            .unwrap_or(0)
    }

    /// Lock the piece once its next step down collides, then either flag
    /// game over or deal the next shape.
    fn settle(&mut self) {
        let cells = self.piece.cells();
        let below: ArrayVec<(i8, i8), 5> = cells.iter().map(|&(x, y)| (x, y + 1)).collect();
        if !self.grid.collides(&below) {
            return;
        }

        self.grid.lock(&cells, self.piece.kind.color());

        if self.grid.is_game_over() {
            self.game_over = true;
        } else {
            self.next_shape();
        }
    }

    fn next_shape(&mut self) {
        self.piece.reset(self.dealer.next_shape());
    }
}

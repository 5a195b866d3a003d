//! Board geometry and opening layout.
//!
//! The board is a fixed 8x8 grid addressed by `(row, col)`, row 0 at the top.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const SIZE: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Maximum number of moves in a game: every move activates one empty cell.
pub const MAX_MOVES: usize = CELLS - 4;

// =============================================================================
// Direction Vectors
// =============================================================================

/// Row/column offsets of the 8 compass directions.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Opening Position
// =============================================================================

/// Cells holding a dual stone (both attributes set) at the start.
pub const DUAL_OPENING: [(usize, usize); 2] = [(3, 3), (4, 4)];

/// Cells holding a neutral stone (no attribute set) at the start.
pub const NEUTRAL_OPENING: [(usize, usize); 2] = [(3, 4), (4, 3)];

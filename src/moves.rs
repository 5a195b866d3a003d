//! Legal move enumeration.

use crate::board::{Board, Coord};
use crate::capture::{TurnContext, compute_flips};
use crate::error::IllegalReason;

/// Check a single candidate move and return the stones it would flip.
///
/// A move is legal when the cell is empty, its value for the current
/// attribute is still 0, and it captures at least one stone.
pub fn check_move(board: &Board, (row, col): Coord, ctx: TurnContext) -> Result<Vec<Coord>, IllegalReason> {
    let cell = board.get(row, col).ok_or(IllegalReason::OutOfBounds)?;
    if cell.active {
        return Err(IllegalReason::Occupied);
    }
    if cell.value(ctx.attribute) != 0 {
        return Err(IllegalReason::AttributeClaimed);
    }
    let flips = compute_flips(board, (row, col), ctx);
    if flips.is_empty() {
        return Err(IllegalReason::NoCaptures);
    }
    Ok(flips)
}

#[inline]
pub fn is_legal(board: &Board, at: Coord, ctx: TurnContext) -> bool {
    check_move(board, at, ctx).is_ok()
}

/// All legal moves in row-major order.
pub fn legal_moves(board: &Board, ctx: TurnContext) -> Vec<Coord> {
    board
        .iter()
        .map(|(at, _)| at)
        .filter(|&at| is_legal(board, at, ctx))
        .collect()
}

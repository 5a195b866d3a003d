//! Capture resolution.
//!
//! A candidate move is walked outward along each of the 8 directions in
//! [`DIRECTIONS`]; each direction contributes its own list of flips and the
//! results are concatenated. Two rules exist:
//!
//! - [`CaptureRule::Standard`]: a contiguous run of stones holding the mover's
//!   mid-line value, confirmed by an active anchor with value 1 right after it.
//! - [`CaptureRule::Advantage`]: every 1-valued stone along the active run is
//!   taken, 0-valued stones are jumped over and no anchor is needed.

use crate::board::{Attribute, Board, Cell, Coord, Player};
use crate::constants::DIRECTIONS;

/// Which capture rule governs a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaptureRule {
    Standard,
    Advantage,
}

impl CaptureRule {
    /// Advantage mode only ever applies to the Subtractor.
    pub fn resolve(player: Player, advantage_mode: bool) -> CaptureRule {
        match player {
            Player::Subtractor if advantage_mode => CaptureRule::Advantage,
            _ => CaptureRule::Standard,
        }
    }
}

/// Everything the resolver needs to know about whose turn it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnContext {
    pub player: Player,
    pub attribute: Attribute,
    pub rule: CaptureRule,
}

impl TurnContext {
    pub fn new(player: Player, attribute: Attribute, advantage_mode: bool) -> Self {
        Self {
            player,
            attribute,
            rule: CaptureRule::resolve(player, advantage_mode),
        }
    }
}

/// Cells from `from` (exclusive) to the board edge along `dir`.
pub fn ray(board: &Board, from: Coord, dir: (isize, isize)) -> impl Iterator<Item = (Coord, Cell)> + '_ {
    std::iter::successors(Board::step(from, dir), move |&at| Board::step(at, dir))
        .map(move |at| (at, board.cell(at)))
}

#[inline]
fn is_anchor(cell: Cell, attr: Attribute) -> bool {
    cell.active && cell.value(attr) == 1
}

/// Stones captured along a single direction.
pub fn flips_in_direction(board: &Board, from: Coord, dir: (isize, isize), ctx: TurnContext) -> Vec<Coord> {
    match ctx.rule {
        CaptureRule::Standard => standard_flips(board, from, dir, ctx),
        CaptureRule::Advantage => advantage_flips(board, from, dir, ctx.attribute),
    }
}

fn standard_flips(board: &Board, from: Coord, dir: (isize, isize), ctx: TurnContext) -> Vec<Coord> {
    let wanted = ctx.player.midline_value();
    let mut run = Vec::new();
    let mut cursor = Board::step(from, dir);

    while let Some(at) = cursor {
        let cell = board.cell(at);
        if !cell.active || cell.value(ctx.attribute) != wanted {
            return Vec::new();
        }
        run.push(at);
        cursor = Board::step(at, dir);
        if let Some(next) = cursor {
            if is_anchor(board.cell(next), ctx.attribute) {
                return run;
            }
        }
    }
    Vec::new()
}

fn advantage_flips(board: &Board, from: Coord, dir: (isize, isize), attr: Attribute) -> Vec<Coord> {
    ray(board, from, dir)
        .take_while(|(_, cell)| cell.active)
        .filter(|(_, cell)| cell.value(attr) == 1)
        .map(|(at, _)| at)
        .collect()
}

/// All stones a move at `from` would flip, in direction order.
pub fn compute_flips(board: &Board, from: Coord, ctx: TurnContext) -> Vec<Coord> {
    DIRECTIONS
        .iter()
        .flat_map(|&dir| flips_in_direction(board, from, dir, ctx))
        .collect()
}

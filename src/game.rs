//! Game state and turn control.
//!
//! [`Game`] owns the board, the turn metadata, the mode toggles and the random
//! source. The board only changes through [`Game::apply_move`], which places a
//! stone, flips captured stones, advances the turn and then settles passes and
//! the end of the game.
//!
//! The legal moves for the player to move are cached and recomputed after
//! every state change, so consumers can query them for highlighting at no cost.

use crate::board::{Attribute, Board, Coord, Player};
use crate::capture::{TurnContext, compute_flips};
use crate::error::{GameError, IllegalReason};
use crate::moves::{check_move, legal_moves};
use crate::rng::{FastRandSource, RandomSource};
use crate::score::{Score, final_score, tally};

/// Session settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Use the advantage capture rule for the Subtractor.
    pub advantage_mode: bool,
    /// Give the Subtractor's placed stone a random value.
    pub special_placement: bool,
    /// Seed for the random source; `None` seeds from the environment.
    pub seed: Option<u64>,
}

/// What value a newly placed stone receives for the current attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementRule {
    /// Always 1.
    Standard,
    /// A random bit.
    Random,
}

impl PlacementRule {
    /// Special placement only ever applies to the Subtractor.
    pub fn resolve(player: Player, special_placement: bool) -> PlacementRule {
        match player {
            Player::Subtractor if special_placement => PlacementRule::Random,
            _ => PlacementRule::Standard,
        }
    }

    fn value(self, rng: &mut impl RandomSource) -> u8 {
        match self {
            PlacementRule::Standard => 1,
            PlacementRule::Random => rng.next_bit() as u8,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    /// No further moves are accepted.
    Terminal(Score),
}

/// How the game continues after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The opponent is to move.
    Continue,
    /// `skipped` had no legal move and was passed over. The attribute was
    /// redrawn and `skipped.opponent()` is to move.
    Passed { skipped: Player },
    /// Neither player can move.
    GameOver(Score),
}

/// Result of a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub attribute: Attribute,
    pub placed: Coord,
    /// Value written into the placed stone.
    pub value: u8,
    pub flipped: Vec<Coord>,
    pub outcome: MoveOutcome,
}

/// A single game.
pub struct Game<R: RandomSource = FastRandSource> {
    board: Board,
    turn: u32,
    player: Player,
    attribute: Attribute,
    advantage_mode: bool,
    special_placement: bool,
    phase: Phase,
    legal: Vec<Coord>,
    rng: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game with default settings and an unseeded random source.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => FastRandSource::with_seed(seed),
            None => FastRandSource::new(),
        };
        let mut game = Self::with_rng(rng);
        game.advantage_mode = config.advantage_mode;
        game.special_placement = config.special_placement;
        game.refresh_legal_moves();
        game
    }
}

impl<R: RandomSource> Game<R> {
    /// A new game in the opening position, drawing the first attribute from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self::unsettled(Board::new(), Player::Subtractor, Attribute::A, rng);
        game.initialize();
        game
    }

    /// A game resumed from an arbitrary position. No attribute is drawn.
    pub fn from_position(board: Board, player: Player, attribute: Attribute, rng: R) -> Self {
        let mut game = Self::unsettled(board, player, attribute, rng);
        game.refresh_legal_moves();
        game
    }

    /// Raw state with the legal-move cache still empty.
    fn unsettled(board: Board, player: Player, attribute: Attribute, rng: R) -> Self {
        Self {
            board,
            turn: 1,
            player,
            attribute,
            advantage_mode: false,
            special_placement: false,
            phase: Phase::AwaitingMove,
            legal: Vec::new(),
            rng,
        }
    }

    /// Reset to the opening position. Mode toggles are kept.
    pub fn initialize(&mut self) {
        self.board.initialize();
        self.turn = 1;
        self.player = Player::Subtractor;
        self.phase = Phase::AwaitingMove;
        self.draw_attribute();
        self.refresh_legal_moves();
        tracing::info!(attribute = %self.attribute, "new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn_count(&self) -> u32 {
        self.turn
    }

    /// Number of moves applied so far.
    pub fn turns_played(&self) -> u32 {
        self.turn - 1
    }

    pub fn current_player(&self) -> Player {
        self.player
    }

    pub fn current_attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn advantage_mode(&self) -> bool {
        self.advantage_mode
    }

    pub fn special_placement(&self) -> bool {
        self.special_placement
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Legal moves for the player to move. Empty once the game is over.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal
    }

    /// Final score, available only once the game is over.
    pub fn final_score(&self) -> Option<Score> {
        match self.phase {
            Phase::Terminal(score) => Some(score),
            Phase::AwaitingMove => None,
        }
    }

    /// Running `(black, purple)` count.
    pub fn tally(&self) -> (usize, usize) {
        tally(&self.board)
    }

    pub fn context(&self) -> TurnContext {
        TurnContext::new(self.player, self.attribute, self.advantage_mode)
    }

    /// Stones a move at `at` would flip for the player to move.
    pub fn flips_for(&self, at: Coord) -> Vec<Coord> {
        if !Board::in_bounds(at.0, at.1) {
            return Vec::new();
        }
        compute_flips(&self.board, at, self.context())
    }

    /// Flip advantage mode and return the new setting.
    pub fn toggle_advantage_mode(&mut self) -> bool {
        self.advantage_mode = !self.advantage_mode;
        self.refresh_legal_moves();
        tracing::debug!(enabled = self.advantage_mode, "advantage mode toggled");
        self.advantage_mode
    }

    /// Flip special placement mode and return the new setting.
    pub fn toggle_special_placement(&mut self) -> bool {
        self.special_placement = !self.special_placement;
        self.refresh_legal_moves();
        tracing::debug!(enabled = self.special_placement, "special placement toggled");
        self.special_placement
    }

    /// Play a stone for the current player at `(row, col)`.
    ///
    /// # Errors
    /// [`GameError::IllegalMove`] if the game is over or the cell is not a
    /// legal move. The state is left untouched in that case.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveReport, GameError> {
        let illegal = |reason| GameError::IllegalMove { row, col, reason };
        if self.is_over() {
            return Err(illegal(IllegalReason::GameOver));
        }
        let flipped = check_move(&self.board, (row, col), self.context()).map_err(illegal)?;

        let mover = self.player;
        let attribute = self.attribute;
        let value = PlacementRule::resolve(mover, self.special_placement).value(&mut self.rng);

        let cell = self.board.cell_mut((row, col));
        cell.active = true;
        cell.set_value(attribute, value);
        for &at in &flipped {
            self.board.cell_mut(at).set_value(attribute, mover.flip_value());
        }

        tracing::debug!(
            turn = self.turn,
            player = %mover,
            attribute = %attribute,
            row,
            col,
            value,
            flipped = flipped.len(),
            "move applied"
        );

        self.turn += 1;
        self.player = mover.opponent();
        self.draw_attribute();
        let outcome = self.settle();

        Ok(MoveReport {
            player: mover,
            attribute,
            placed: (row, col),
            value,
            flipped,
            outcome,
        })
    }

    fn draw_attribute(&mut self) {
        self.attribute = self.rng.choose_attribute();
    }

    fn refresh_legal_moves(&mut self) {
        self.legal = match self.phase {
            Phase::AwaitingMove => legal_moves(&self.board, self.context()),
            Phase::Terminal(_) => Vec::new(),
        };
    }

    /// Handle a blocked player after a move.
    ///
    /// The first checks use the attribute already drawn for the new turn. If
    /// the new player is blocked but the mover is not, the new player passes
    /// and the attribute is redrawn once. Under that draw the mover keeps the
    /// turn if it can move, otherwise the turn goes back to the other player;
    /// when neither can move the game ends. A game awaiting a move therefore
    /// always has at least one legal move.
    fn settle(&mut self) -> MoveOutcome {
        self.refresh_legal_moves();
        if !self.legal.is_empty() {
            return MoveOutcome::Continue;
        }

        let blocked = self.player;
        self.player = blocked.opponent();
        self.refresh_legal_moves();
        if self.legal.is_empty() {
            return self.finish();
        }

        self.draw_attribute();
        self.refresh_legal_moves();
        let mut skipped = blocked;
        if self.legal.is_empty() {
            skipped = self.player;
            self.player = blocked;
            self.refresh_legal_moves();
            if self.legal.is_empty() {
                return self.finish();
            }
        }
        tracing::debug!(%skipped, attribute = %self.attribute, "pass");
        MoveOutcome::Passed { skipped }
    }

    fn finish(&mut self) -> MoveOutcome {
        let score = final_score(&self.board);
        self.phase = Phase::Terminal(score);
        self.refresh_legal_moves();
        tracing::debug!(turns = self.turns_played(), %score, "game over");
        MoveOutcome::GameOver(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::rng::ScriptedSource;

    fn opening(player: Player, attribute: Attribute, bits: &[bool]) -> Game<ScriptedSource> {
        Game::from_position(Board::new(), player, attribute, ScriptedSource::new(bits))
    }

    /// Row 0: empty, neutral, dual. Only the Adder under A can open it up.
    fn corner_board() -> Board {
        let mut board = Board::empty();
        board.set((0, 1), Cell::stone(0, 0));
        board.set((0, 2), Cell::stone(1, 1));
        board
    }

    #[test]
    fn test_initialize() {
        let game = Game::with_rng(ScriptedSource::new([false]));
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Player::Subtractor);
        assert_eq!(game.current_attribute(), Attribute::B);
        assert_eq!(game.board().active_count(), 4);
        assert_eq!(game.legal_moves(), &[(2, 2), (5, 5)]);
        assert_eq!(game.phase(), Phase::AwaitingMove);
    }

    #[test]
    fn test_subtractor_move() {
        let mut game = opening(Player::Subtractor, Attribute::A, &[true]);
        let report = game.apply_move(2, 2).unwrap();
        assert_eq!(report.flipped, vec![(3, 3)]);
        assert_eq!(report.value, 1);
        assert_eq!(report.outcome, MoveOutcome::Continue);
        assert_eq!(game.board().cell((2, 2)), Cell::stone(1, 0));
        assert_eq!(game.board().cell((3, 3)), Cell::stone(0, 1));
        assert_eq!(game.turn_count(), 2);
        assert_eq!(game.current_player(), Player::Adder);
        assert_eq!(game.tally(), (2, 1));
    }

    #[test]
    fn test_adder_move_drives_to_one() {
        let mut game = opening(Player::Adder, Attribute::B, &[true]);
        let report = game.apply_move(3, 5).unwrap();
        assert_eq!(report.flipped, vec![(3, 4)]);
        assert_eq!(game.board().cell((3, 4)), Cell::stone(0, 1));
        assert_eq!(game.board().cell((3, 5)), Cell::stone(0, 1));
        assert_eq!(game.current_player(), Player::Subtractor);
        assert_eq!(game.current_attribute(), Attribute::A);
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut game = opening(Player::Subtractor, Attribute::A, &[true]);
        let before = game.board().clone();
        let err = game.apply_move(0, 0).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                row: 0,
                col: 0,
                reason: IllegalReason::NoCaptures
            }
        );
        assert!(matches!(
            game.apply_move(3, 3),
            Err(GameError::IllegalMove { reason: IllegalReason::Occupied, .. })
        ));
        assert!(matches!(
            game.apply_move(9, 9),
            Err(GameError::IllegalMove { reason: IllegalReason::OutOfBounds, .. })
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Player::Subtractor);
    }

    #[test]
    fn test_special_placement_random_value() {
        // First bit is the placement value, second the next attribute.
        let mut game = opening(Player::Subtractor, Attribute::A, &[false, true]);
        game.toggle_special_placement();
        let report = game.apply_move(2, 2).unwrap();
        assert_eq!(report.value, 0);
        let cell = game.board().cell((2, 2));
        assert!(cell.active);
        assert_eq!(cell.value(Attribute::A), 0);
    }

    #[test]
    fn test_special_placement_ignored_for_adder() {
        let mut game = opening(Player::Adder, Attribute::A, &[false]);
        game.toggle_special_placement();
        let report = game.apply_move(2, 4).unwrap();
        assert_eq!(report.value, 1);
        assert_eq!(game.board().cell((2, 4)).value(Attribute::A), 1);
    }

    #[test]
    fn test_toggle_advantage_recomputes() {
        let mut game = opening(Player::Subtractor, Attribute::A, &[true]);
        let board = game.board().clone();
        assert_eq!(game.legal_moves(), &[(2, 2), (5, 5)]);
        assert!(game.toggle_advantage_mode());
        assert!(game.legal_moves().contains(&(2, 3)));
        assert_eq!(game.flips_for((2, 2)), vec![(3, 3), (4, 4)]);
        assert!(!game.toggle_advantage_mode());
        assert_eq!(game.legal_moves(), &[(2, 2), (5, 5)]);
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), Player::Subtractor);
        assert_eq!(game.current_attribute(), Attribute::A);
    }

    #[test]
    fn test_advantage_move_flips_whole_line() {
        let mut game = opening(Player::Subtractor, Attribute::A, &[true]);
        game.toggle_advantage_mode();
        let report = game.apply_move(2, 2).unwrap();
        assert_eq!(report.flipped, vec![(3, 3), (4, 4)]);
        assert_eq!(game.board().cell((4, 4)), Cell::stone(0, 1));
    }

    #[test]
    fn test_game_over_when_both_blocked() {
        // After the Adder plays (0,0) and B is drawn, nobody can move.
        let mut game = Game::from_position(
            corner_board(),
            Player::Adder,
            Attribute::A,
            ScriptedSource::new([false]),
        );
        assert_eq!(game.legal_moves(), &[(0, 0)]);
        let report = game.apply_move(0, 0).unwrap();
        let score = match report.outcome {
            MoveOutcome::GameOver(score) => score,
            other => panic!("expected game over, got {other:?}"),
        };
        assert_eq!((score.black, score.purple), (0, 1));
        assert!(game.is_over());
        assert_eq!(game.final_score(), Some(score));
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.turns_played(), 1);
        assert!(matches!(
            game.apply_move(0, 3),
            Err(GameError::IllegalMove { reason: IllegalReason::GameOver, .. })
        ));
    }

    #[test]
    fn test_continue_when_attribute_allows() {
        // Same position, but A is drawn: the Subtractor can take (0,2) from (0,3).
        let mut game = Game::from_position(
            corner_board(),
            Player::Adder,
            Attribute::A,
            ScriptedSource::new([true]),
        );
        let report = game.apply_move(0, 0).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Continue);
        assert_eq!(game.legal_moves(), &[(0, 3)]);
    }

    #[test]
    fn test_pass_keeps_mover() {
        let mut board = corner_board();
        board.set((7, 1), Cell::stone(0, 0));
        board.set((7, 2), Cell::stone(1, 1));
        // Draw B for the Subtractor (blocked), then A after the pass.
        let mut game = Game::from_position(
            board,
            Player::Adder,
            Attribute::A,
            ScriptedSource::new([false, true]),
        );
        let report = game.apply_move(0, 0).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Passed {
                skipped: Player::Subtractor
            }
        );
        assert_eq!(game.current_player(), Player::Adder);
        assert_eq!(game.current_attribute(), Attribute::A);
        assert_eq!(game.turn_count(), 2);
        assert_eq!(game.legal_moves(), &[(7, 0)]);
        assert!(!game.is_over());
    }

    #[test]
    fn test_pass_hands_turn_back_when_redraw_blocks_mover() {
        let mut board = corner_board();
        // Row 7 gives the Adder a move under B only.
        board.set((7, 1), Cell::stone(1, 0));
        board.set((7, 2), Cell::stone(1, 1));
        // Draw B (Subtractor blocked, Adder not), then A (Adder blocked).
        let mut game = Game::from_position(
            board,
            Player::Adder,
            Attribute::A,
            ScriptedSource::new([false, true]),
        );
        let report = game.apply_move(0, 0).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Passed {
                skipped: Player::Adder
            }
        );
        assert_eq!(game.current_player(), Player::Subtractor);
        assert_eq!(game.current_attribute(), Attribute::A);
        assert_eq!(game.phase(), Phase::AwaitingMove);
        assert_eq!(game.legal_moves(), &[(0, 3), (7, 0), (7, 3)]);
        assert!(game.apply_move(0, 3).is_ok());
    }

    #[test]
    fn test_game_over_when_redraw_blocks_both() {
        // Diagonal C1-B2-A3 with both ends off the board, plus a row 7 pair
        // that only the Adder can use, and only under B.
        let mut board = Board::empty();
        board.set((1, 1), Cell::stone(0, 0));
        board.set((2, 0), Cell::stone(1, 1));
        board.set((7, 1), Cell::stone(0, 0));
        board.set((7, 2), Cell::stone(0, 1));
        let mut game = Game::from_position(
            board,
            Player::Adder,
            Attribute::A,
            ScriptedSource::new([false, true]),
        );
        let report = game.apply_move(0, 2).unwrap();
        assert_eq!(report.flipped, vec![(1, 1)]);
        let score = match report.outcome {
            MoveOutcome::GameOver(score) => score,
            other => panic!("expected game over, got {other:?}"),
        };
        assert_eq!((score.black, score.purple), (1, 1));
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_awaiting_move_always_has_moves() {
        for seed in 0..50 {
            for advantage_mode in [false, true] {
                let mut game = Game::with_config(GameConfig {
                    advantage_mode,
                    special_placement: seed % 2 == 0,
                    seed: Some(seed),
                });
                while !game.is_over() {
                    let &(row, col) = game
                        .legal_moves()
                        .first()
                        .unwrap_or_else(|| panic!("seed {seed}: no move while awaiting one"));
                    if let MoveOutcome::Passed { skipped } = game.apply_move(row, col).unwrap().outcome {
                        assert_eq!(game.current_player(), skipped.opponent());
                    }
                }
            }
        }
    }

    #[test]
    fn test_initialize_keeps_modes() {
        let mut game = opening(Player::Adder, Attribute::A, &[true]);
        game.toggle_advantage_mode();
        game.apply_move(2, 4).unwrap();
        game.initialize();
        assert!(game.advantage_mode());
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Player::Subtractor);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_with_config() {
        let game = Game::with_config(GameConfig {
            advantage_mode: true,
            special_placement: true,
            seed: Some(3),
        });
        assert!(game.advantage_mode());
        assert!(game.special_placement());
        assert!(game.legal_moves().contains(&(2, 3)));
    }
}

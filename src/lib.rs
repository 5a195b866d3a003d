//! Dual-Othello: a flipping-stone game where every stone carries two bits.
//!
//! Each cell holds two independent attributes, `A` and `B`. At the start of
//! every turn one of them is drawn at random; legality and captures for that
//! turn only look at the drawn attribute. The Subtractor captures lines of
//! 1-valued stones and clears them, the Adder captures lines of 0-valued
//! stones and sets them. At the end, pure black (0,0) and pure purple (1,1)
//! stones are counted.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, directions and opening layout
//! - [`board`] - Cells, attributes, player roles and the grid
//! - [`rng`] - Injectable random sources
//! - [`capture`] - Standard and advantage capture rules
//! - [`moves`] - Legal move enumeration
//! - [`score`] - Final counts and winner
//! - [`game`] - Turn control, passes and the end of the game
//! - [`protocol`] - Text command front end
//!
//! ## Example
//!
//! ```
//! use dual_othello::board::{Attribute, Player};
//! use dual_othello::game::{Game, MoveOutcome};
//! use dual_othello::rng::ScriptedSource;
//!
//! // Every draw picks attribute A.
//! let mut game = Game::with_rng(ScriptedSource::new([true]));
//! assert_eq!(game.current_attribute(), Attribute::A);
//! assert_eq!(game.legal_moves(), &[(2, 2), (5, 5)]);
//!
//! let report = game.apply_move(2, 2).unwrap();
//! assert_eq!(report.flipped, vec![(3, 3)]);
//! assert_eq!(report.outcome, MoveOutcome::Continue);
//! assert_eq!(game.current_player(), Player::Adder);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod moves;
pub mod protocol;
pub mod rng;
pub mod score;

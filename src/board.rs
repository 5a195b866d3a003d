//! Board state: cells, attributes, player roles and the 8x8 grid.
//!
//! Every cell carries two independent bits, one per [`Attribute`]. A stone's
//! colour is derived from the pair: black (0,0), red (A only), blue (B only)
//! and purple (1,1).

use std::fmt;

use crate::constants::{DUAL_OPENING, NEUTRAL_OPENING, SIZE};

/// A cell on the board as `(row, col)`.
pub type Coord = (usize, usize);

/// One of the two binary channels carried by every cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    A,
    B,
}

impl Attribute {
    pub fn other(self) -> Attribute {
        match self {
            Attribute::A => Attribute::B,
            Attribute::B => Attribute::A,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::A => write!(f, "A"),
            Attribute::B => write!(f, "B"),
        }
    }
}

/// The two player roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first. Captures lines of 1-valued stones and drives them to 0.
    Subtractor,
    /// Captures lines of 0-valued stones and drives them to 1.
    Adder,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Subtractor => Player::Adder,
            Player::Adder => Player::Subtractor,
        }
    }

    /// Value a stone must hold to be part of a captured run.
    #[inline]
    pub fn midline_value(self) -> u8 {
        match self {
            Player::Subtractor => 1,
            Player::Adder => 0,
        }
    }

    /// Value written into every captured stone.
    #[inline]
    pub fn flip_value(self) -> u8 {
        match self {
            Player::Subtractor => 0,
            Player::Adder => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Subtractor => write!(f, "Subtractor"),
            Player::Adder => write!(f, "Adder"),
        }
    }
}

/// Display colour of an active stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StoneColor {
    Black,
    Red,
    Blue,
    Purple,
}

impl StoneColor {
    /// Single-character glyph used by the text board.
    pub fn glyph(self) -> char {
        match self {
            StoneColor::Black => 'K',
            StoneColor::Red => 'R',
            StoneColor::Blue => 'B',
            StoneColor::Purple => 'P',
        }
    }
}

/// A single cell. Both attribute bits of an inactive cell stay clear.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub a: bool,
    pub b: bool,
    pub active: bool,
}

impl Cell {
    /// An unoccupied cell.
    pub const EMPTY: Cell = Cell {
        a: false,
        b: false,
        active: false,
    };

    /// An occupied cell with the given attribute bits. Only the low bit counts.
    pub const fn stone(a: u8, b: u8) -> Cell {
        Cell {
            a: a & 1 == 1,
            b: b & 1 == 1,
            active: true,
        }
    }

    #[inline]
    pub fn value(&self, attr: Attribute) -> u8 {
        let bit = match attr {
            Attribute::A => self.a,
            Attribute::B => self.b,
        };
        bit as u8
    }

    #[inline]
    pub fn set_value(&mut self, attr: Attribute, value: u8) {
        let bit = value & 1 == 1;
        match attr {
            Attribute::A => self.a = bit,
            Attribute::B => self.b = bit,
        }
    }

    /// Colour of the stone, or `None` for an empty cell.
    pub fn color(&self) -> Option<StoneColor> {
        if !self.active {
            return None;
        }
        Some(match (self.a, self.b) {
            (true, true) => StoneColor::Purple,
            (true, false) => StoneColor::Red,
            (false, true) => StoneColor::Blue,
            (false, false) => StoneColor::Black,
        })
    }
}

/// The 8x8 grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the opening position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// A board with no stones at all.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::EMPTY; SIZE]; SIZE],
        }
    }

    /// Reset to the opening: two dual stones on one diagonal of the centre
    /// block, two neutral stones on the other, everything else empty.
    pub fn initialize(&mut self) {
        self.cells = [[Cell::EMPTY; SIZE]; SIZE];
        for (row, col) in DUAL_OPENING {
            self.cells[row][col] = Cell::stone(1, 1);
        }
        for (row, col) in NEUTRAL_OPENING {
            self.cells[row][col] = Cell::stone(0, 0);
        }
    }

    /// Cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Cell at an on-board coordinate.
    #[inline]
    pub fn cell(&self, (row, col): Coord) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, (row, col): Coord) -> &mut Cell {
        &mut self.cells[row][col]
    }

    /// Overwrite a cell. Used to build custom positions.
    pub fn set(&mut self, (row, col): Coord, cell: Cell) {
        self.cells[row][col] = cell;
    }

    #[inline]
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE
    }

    /// The neighbour of `from` one step along `dir`, if it is on the board.
    #[inline]
    pub fn step((row, col): Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        Self::in_bounds(r, c).then_some((r, c))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..SIZE).flat_map(move |row| (0..SIZE).map(move |col| ((row, col), self.cells[row][col])))
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.active).count()
    }

    /// Render the board, marking `highlights` (typically the legal moves) with `*`.
    pub fn render(&self, highlights: &[Coord]) -> String {
        let mut out = String::from("  ");
        for col in 0..SIZE {
            out.push((b'A' + col as u8) as char);
            out.push(' ');
        }
        out.push('\n');
        for row in 0..SIZE {
            out.push_str(&format!("{} ", row + 1));
            for col in 0..SIZE {
                let ch = match self.cells[row][col].color() {
                    Some(color) => color.glyph(),
                    None if highlights.contains(&(row, col)) => '*',
                    None => '.',
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}

use crate::error::BoardError;
use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A `(row, col)` coordinate.
pub type Pos = (usize, usize);

/// Direction the blank travels. Declaration order is the legal-move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move that carries the blank from `from` to the adjacent cell `to`.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        let delta = (
            to.0 as isize - from.0 as isize,
            to.1 as isize - from.1 as isize,
        );
        Move::ALL.into_iter().find(|m| m.as_offset() == delta)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A 3x3 sliding-tile configuration. `0` is the blank.
///
/// Every value in `0..=8` occupies exactly one cell. The blank's position is
/// cached alongside the cells and kept in step by every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
    blank: Pos,
}

impl Board {
    /// The solved configuration, blank bottom-right.
    pub const GOAL: Board = Board {
        cells: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        blank: (SIZE - 1, SIZE - 1),
    };

    pub fn new() -> Self {
        Self::GOAL
    }

    /// Builds a board from rows, rejecting anything that is not a permutation of `0..=8`.
    pub fn from_rows(cells: [[u8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = None;

        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let slot = seen.get_mut(value as usize).filter(|slot| !**slot);
                match slot {
                    Some(slot) => *slot = true,
                    None => {
                        return Err(BoardError::InvalidTiles {
                            cells: cells.iter().flatten().copied().collect(),
                        })
                    }
                }
                if value == 0 {
                    blank = Some((row, col));
                }
            }
        }

        match blank {
            Some(blank) => Ok(Self { cells, blank }),
            None => Err(BoardError::InvalidTiles {
                cells: cells.iter().flatten().copied().collect(),
            }),
        }
    }

    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Row-major copy of the cells.
    pub fn flatten(&self) -> [u8; CELLS] {
        let mut flat = [0; CELLS];
        for (i, &value) in self.cells.iter().flatten().enumerate() {
            flat[i] = value;
        }
        flat
    }

    /// Value at `pos`. Panics if `pos` is off the board.
    pub fn peek(&self, (row, col): Pos) -> u8 {
        self.cells[row][col]
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Locates the cell holding `value`.
    pub fn find(&self, value: i32) -> Result<Pos, BoardError> {
        if !(0..CELLS as i32).contains(&value) {
            return Err(BoardError::OutOfRange { value });
        }
        if value == 0 {
            return Ok(self.blank);
        }

        self.cells
            .iter()
            .enumerate()
            .find_map(|(row, values)| {
                values
                    .iter()
                    .position(|&cell| i32::from(cell) == value)
                    .map(|col| (row, col))
            })
            .ok_or(BoardError::OutOfRange { value })
    }

    /// Cell the blank would reach by moving in `movement`, if it stays on the board.
    pub fn neighbour(&self, movement: Move) -> Option<Pos> {
        let (dr, dc) = movement.as_offset();
        let row = self.blank.0 as isize + dr;
        let col = self.blank.1 as isize + dc;

        if row >= 0 && row < SIZE as isize && col >= 0 && col < SIZE as isize {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Cells orthogonally adjacent to the blank, in up, left, down, right order.
    pub fn legal_moves(&self) -> Vec<Pos> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.neighbour(movement))
            .collect()
    }

    /// Exchanges the values at two cells in place.
    pub fn swap(&mut self, a: Pos, b: Pos) {
        let tmp = self.cells[a.0][a.1];
        self.cells[a.0][a.1] = self.cells[b.0][b.1];
        self.cells[b.0][b.1] = tmp;

        if self.blank == a {
            self.blank = b;
        } else if self.blank == b {
            self.blank = a;
        }
    }

    /// Slides the blank one cell. Returns `false` and leaves the board untouched
    /// when the move would leave the board.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        match self.neighbour(movement) {
            Some(target) => {
                self.swap(self.blank, target);
                true
            }
            None => false,
        }
    }

    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let mut next = *self;
        if next.apply_move(movement) {
            Some(next)
        } else {
            None
        }
    }

    /// Makes `steps` random legal blank moves. The result is always reachable
    /// from the starting configuration.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, steps: usize, rng: &mut R) {
        for _ in 0..steps {
            if let Some(&target) = self.legal_moves().choose(rng) {
                self.swap(self.blank, target);
            }
        }
    }

    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.flatten())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A 3x3 board is solvable iff its inversion count, ignoring the blank, is even.
pub fn is_solvable(flattened: &[u8]) -> bool {
    count_inversions(flattened) % 2 == 0
}

fn count_inversions(flattened: &[u8]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Reads nine digits row-major. Whitespace, `,`, `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| BoardError::Parse {
            input: s.to_string(),
            reason,
        };

        let digits = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '/' | '|'))
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| parse_err(format!("unexpected character {:?}", c)))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if digits.len() != CELLS {
            return Err(parse_err(format!(
                "expected {} digits, found {}",
                CELLS,
                digits.len()
            )));
        }

        let mut cells = [[0; SIZE]; SIZE];
        for (i, value) in digits.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = value;
        }
        Self::from_rows(cells)
    }
}

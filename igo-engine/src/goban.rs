use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// Board sizes a game can be started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum BoardSize {
    Nine = 9,
    Thirteen = 13,
    Nineteen = 19,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Nine, BoardSize::Thirteen, BoardSize::Nineteen];

    pub fn lines(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = GoError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            other => Err(GoError::UnsupportedSize(other)),
        }
    }
}

impl std::str::FromStr for BoardSize {
    type Err = String;

    /// Accepts `"19"` as well as `"19x19"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = match s.split_once('x') {
            Some((a, b)) if a == b => a,
            Some(_) => return Err(format!("board must be square: {s}")),
            None => s,
        };
        let n: u8 = lines
            .trim()
            .parse()
            .map_err(|_| format!("invalid board size: {s}"))?;
        BoardSize::try_from(n).map_err(|e| e.to_string())
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.lines();
        write!(f, "{n}x{n}")
    }
}

/// A copy of one board point at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intersection {
    pub x: u8,
    pub y: u8,
    pub state: Option<Stone>,
}

impl Intersection {
    pub fn point(&self) -> Point {
        (self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }
}

/// A square Go board stored as a flat row-major array of cells
/// (`1` Black, `-1` White, `0` empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Goban {
    size: u8,
    cells: Vec<i8>,
}

impl Goban {
    /// Create an empty board with `size` lines in each direction.
    pub fn new(size: u8) -> Self {
        Goban {
            size,
            cells: vec![0; size as usize * size as usize],
        }
    }

    pub fn with_size(size: BoardSize) -> Self {
        Self::new(size.lines())
    }

    /// Restore a board from a row-major cell snapshot.
    pub fn from_board(size: u8, cells: Vec<i8>) -> Self {
        assert_eq!(
            cells.len(),
            size as usize * size as usize,
            "malformed board snapshot"
        );
        Goban { size, cells }
    }

    /// Build a board from rows of text. 'B' = Black, 'W' = White, anything else is empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let size = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == size),
            "malformed board layout"
        );
        let cells = layout
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'B' => Stone::Black.to_cell(),
                'W' => Stone::White.to_cell(),
                _ => 0,
            })
            .collect();
        Goban {
            size: size as u8,
            cells,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn board(&self) -> &[i8] {
        &self.cells
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// The stone at `point`, or `None` for an empty or off-board point.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    /// Copy of the intersection at `point`. Panics if `point` is off the board.
    pub fn intersection(&self, point: Point) -> Intersection {
        let i = self.idx(point);
        Intersection {
            x: point.0,
            y: point.1,
            state: Stone::from_cell(self.cells[i]),
        }
    }

    /// Copies of every intersection in row-major order.
    pub fn intersections(&self) -> impl Iterator<Item = Intersection> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let (x, y) = self.point_of(i);
            Intersection {
                x,
                y,
                state: Stone::from_cell(c),
            }
        })
    }

    /// Every point of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .filter(|&&c| Stone::from_cell(c) == Some(stone))
            .count()
    }

    // -- Mutation --

    /// Put `stone` on `point`, replacing whatever was there. Panics if off-board.
    pub fn set_stone(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.cells[i] = stone.to_cell();
    }

    /// Empty `point`. Panics if off-board.
    pub fn clear(&mut self, point: Point) {
        let i = self.idx(point);
        self.cells[i] = 0;
    }

    /// Replace every cell with `snapshot`, keeping the size.
    pub fn restore(&mut self, snapshot: &[i8]) {
        assert_eq!(snapshot.len(), self.cells.len(), "snapshot size mismatch");
        self.cells.copy_from_slice(snapshot);
    }

    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    // -- Adjacency --

    /// The 2 to 4 orthogonal neighbors of `point` that lie on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    #[inline]
    pub(crate) fn idx(&self, point: Point) -> usize {
        assert!(
            self.on_board(point),
            "point {point:?} is off the {0}x{0} board",
            self.size
        );
        point.1 as usize * self.size as usize + point.0 as usize
    }

    pub(crate) fn point_of(&self, idx: usize) -> Point {
        let size = self.size as usize;
        ((idx % size) as u8, (idx / size) as u8)
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for &c in row {
                let ch = Stone::from_cell(c).map_or('+', Stone::letter);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

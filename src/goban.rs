use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::Point;
use crate::capture;
use crate::error::GoError;
use crate::stone::Stone;

pub const DEFAULT_SIZE: u8 = 19;

/// Running tally of stones captured by each color.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A square Go board stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    captures: Captures,
}

impl Goban {
    /// Create an empty size x size board.
    pub fn new(size: u8) -> Self {
        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            captures: Captures::new(),
        }
    }

    /// Build a goban from an existing square matrix of cell values.
    pub fn from_matrix(matrix: Vec<Vec<i8>>) -> Self {
        let size = matrix.len() as u8;

        assert!(
            matrix.iter().all(|row| row.len() == size as usize),
            "malformed board matrix"
        );

        Goban {
            board: matrix.into_iter().flatten().collect(),
            size,
            captures: Captures::new(),
        }
    }

    /// Restore a goban from snapshot fields.
    pub fn from_state(board: Vec<i8>, size: u8, captures: Captures) -> Self {
        Goban {
            board,
            size,
            captures,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    // -- Game actions --

    /// Place a stone and resolve captures. Both precondition checks run
    /// before any write, so a failed call leaves the board untouched.
    /// Returns every point captured by the placement, across all colors.
    pub fn place(&mut self, point: Point, stone: Stone) -> Result<Vec<Point>, GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }

        if self.stone_at(point).is_some() {
            return Err(GoError::OccupiedCell);
        }

        self.set_stone(point, stone);

        // All zero-liberty chains are found against the post-placement
        // board, then removed in one batch.
        let dead_chains = capture::captured_chains(self);

        let mut captured = Vec::new();
        for chain in dead_chains {
            self.remove_chain(&chain);
            captured.extend(chain);
        }

        Ok(captured)
    }

    /// Clear a captured chain and credit the capturing color.
    fn remove_chain(&mut self, chain: &[Point]) {
        let Some(&first) = chain.first() else {
            return;
        };
        let Some(dead_color) = self.stone_at(first) else {
            return;
        };

        for &pt in chain {
            self.clear_stone(pt);
        }
        self.captures.add(dead_color.opp(), chain.len() as u32);
    }

    // -- Graph algorithms --

    /// The 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    /// Flood-fill the connected chain of same-colored stones containing
    /// `seed`. Returns an empty chain for an empty seed.
    pub fn chain(&self, seed: Point) -> Vec<Point> {
        let mut visited = vec![false; self.board.len()];
        self.chain_from(seed, &mut visited)
    }

    /// Chain flood-fill sharing a caller-owned visited bitset, so a
    /// full-board sweep never rediscovers a chain from a second seed.
    ///
    /// Breadth-first: a FIFO queue with membership marked before enqueue,
    /// O(|chain|) with no duplicate processing and no recursion.
    pub(crate) fn chain_from(&self, seed: Point, visited: &mut [bool]) -> Vec<Point> {
        let Some(stone) = self.stone_at(seed) else {
            return Vec::new();
        };

        let mut chain = Vec::new();
        let mut queue = VecDeque::from([seed]);
        visited[self.idx(seed)] = true;

        while let Some(p) = queue.pop_front() {
            chain.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.stone_at(n) == Some(stone) {
                    visited[ni] = true;
                    queue.push_back(n);
                }
            }
        }

        chain
    }

    /// Does the chain have at least one liberty? Short-circuits at the
    /// first empty neighbor. Off-board neighbors contribute nothing, so
    /// edges reduce liberties without acting as opponent stones.
    pub fn has_liberty(&self, chain: &[Point]) -> bool {
        chain
            .iter()
            .any(|&p| self.neighbors(p).iter().any(|&n| self.stone_at(n).is_none()))
    }

    /// The distinct empty points adjacent to a chain.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.board.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Liberties of the chain containing the stone at `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let chain = self.chain(point);
        self.chain_liberties(&chain)
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    fn set_stone(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.board[i] = stone.to_int();
    }

    fn clear_stone(&mut self, point: Point) {
        let i = self.idx(point);
        self.board[i] = 0;
    }
}

impl Default for Goban {
    fn default() -> Self {
        Goban::new(DEFAULT_SIZE)
    }
}

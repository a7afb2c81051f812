use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::goban::{Captures, DEFAULT_SIZE, Goban};
use crate::stone::Stone;

/// Serializable board snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: u8,
    pub captures: Captures,
}

/// Public entry point for a game session: validates placements, applies
/// them to its goban, and reports what each placement captured.
#[derive(Debug, Clone)]
pub struct Engine {
    goban: Goban,
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Engine {
            goban: Goban::new(size),
        }
    }

    /// Standard 19x19 board.
    pub fn standard() -> Self {
        Self::new(DEFAULT_SIZE)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.goban.captures().get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    // -- Game actions --

    /// Place a stone at (row, col) and resolve captures. Returns the
    /// captured points, or an error on an out-of-bounds or occupied
    /// target with the board left untouched.
    pub fn place(&mut self, stone: Stone, point: Point) -> Result<Vec<Point>, GoError> {
        self.goban.place(point, stone)
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.goban.board().to_vec(),
            size: self.goban.size(),
            captures: self.goban.captures().clone(),
        }
    }

    pub fn from_game_state(state: GameState) -> Self {
        Engine {
            goban: Goban::from_state(state.board, state.size, state.captures),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

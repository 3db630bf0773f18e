//! Game state and turn handling shared by both variants

use anyhow::{anyhow, Result};
use log::{debug, info};

use std::fmt;
use std::str::FromStr;

use crate::{
    board::Board,
    error::MoveError,
    player::Player,
    WIDTH,
};

/// The rule set a game is played with, fixed for the lifetime of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Variant {
    /// Coins can only be dropped
    Classic,
    /// Coins can be dropped, or a player may pop one of their own coins
    /// from the bottom of a column
    PopOut,
}

impl Variant {
    pub fn allows_pop(self) -> bool {
        match self {
            Variant::Classic => false,
            Variant::PopOut => true,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => write!(f, "Classic"),
            Variant::PopOut => write!(f, "PopOut"),
        }
    }
}

/// A single move, columns are 0-indexed
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Move {
    Drop(usize),
    Pop(usize),
}

impl Move {
    pub fn column(&self) -> usize {
        match *self {
            Move::Drop(column) | Move::Pop(column) => column,
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    /// Parses move notation: `4` drops into column 4, `p4` pops from it (1-indexed)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (pop, digits) = match s.strip_prefix(|c: char| c == 'p' || c == 'P') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        match digits.parse::<usize>() {
            Ok(column @ 1..=WIDTH) if pop => Ok(Move::Pop(column - 1)),
            Ok(column @ 1..=WIDTH) => Ok(Move::Drop(column - 1)),
            _ => Err(anyhow!("could not parse '{}' as a valid move", s)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Drop(column) => write!(f, "{}", column + 1),
            Move::Pop(column) => write!(f, "p{}", column + 1),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Draw,
}

/// A game of Connect 4 in either variant
///
/// The low-level operations (`drop_move`, `pop_move`, `change_turns`, `is_winning`,
/// `is_board_full`) leave turn order and game end to the caller. `play` bundles
/// them into a full turn: apply the move, look for a winner or a draw, otherwise
/// hand the turn to the other player.
#[derive(Clone, Debug)]
pub struct ConnectFour {
    board: Board,
    variant: Variant,
    current_player: Player,
    next_player: Player,
    status: GameStatus,
}

impl ConnectFour {
    pub fn new(variant: Variant) -> Self {
        Self {
            board: Self::new_board(),
            variant,
            current_player: Player::One,
            next_player: Player::Two,
            status: GameStatus::Playing,
        }
    }

    /// Creates a game from a position, with `current_player` to move
    pub fn with_board(variant: Variant, board: Board, current_player: Player) -> Self {
        Self {
            board,
            variant,
            current_player,
            next_player: current_player.other(),
            status: GameStatus::Playing,
        }
    }

    /// Plays a sequence of moves in notation (e.g. `"44p4"`) from the start of a game
    pub fn from_moves<S: AsRef<str>>(variant: Variant, moves: S) -> Result<Self> {
        let mut game = Self::new(variant);
        let mut token = String::new();

        // a token is a column digit, optionally preceded by the pop prefix
        for column_char in moves.as_ref().chars() {
            token.push(column_char);
            if token.len() == 1 && (column_char == 'p' || column_char == 'P') {
                continue;
            }
            let next_move = token.parse::<Move>()?;
            game.play(next_move)
                .map_err(|err| anyhow!("invalid move '{}': {}", next_move, err))?;
            token.clear();
        }
        if !token.is_empty() {
            return Err(anyhow!("move list ends with an incomplete pop"));
        }
        Ok(game)
    }

    pub fn new_board() -> Board {
        Board::new()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Starts the game over: empty board, player 1 to move
    pub fn reset(&mut self) {
        self.board = Self::new_board();
        self.current_player = Player::One;
        self.next_player = Player::Two;
        self.status = GameStatus::Playing;
        debug!("{} game reset", self.variant);
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn change_turns(&mut self) {
        self.current_player = self.next_player;
        self.next_player = self.current_player.other();
    }

    pub fn is_winning(&self, player: Player) -> bool {
        self.board.has_connection(player.to_cell())
    }

    pub fn is_valid_drop(&self, column: usize) -> bool {
        column < WIDTH && !self.board.is_column_full(column)
    }

    /// Drops the current player's coin into `column`
    pub fn drop_move(&mut self, column: usize) -> Result<(), MoveError> {
        check_column(column)?;
        // a full column has no empty row to land in
        let row = self
            .board
            .drop_coin(column, self.current_player.to_cell())
            .ok_or(MoveError::IllegalMove { column })?;
        debug!("{} dropped into column {} (row {})", self.current_player, column + 1, row);
        Ok(())
    }

    /// Returns true if the current player owns the bottom coin of `column`.
    /// Only meaningful in PopOut, `pop_move` rejects pops in Classic regardless.
    pub fn is_valid_pop(&self, column: usize) -> bool {
        column < WIDTH && self.board.bottom(column) == self.current_player.to_cell()
    }

    /// Pops the current player's coin from the bottom of `column`
    pub fn pop_move(&mut self, column: usize) -> Result<(), MoveError> {
        check_column(column)?;
        if !self.variant.allows_pop() {
            return Err(MoveError::PopNotSupported { column });
        }
        if !self.is_valid_pop(column) {
            return Err(MoveError::IllegalMove { column });
        }
        let popped = self.board.pop_coin(column);
        debug_assert_eq!(popped, self.current_player.to_cell());
        debug!("{} popped from column {}", self.current_player, column + 1);
        Ok(())
    }

    /// Plays a full turn and returns the resulting game status
    ///
    /// A win for the mover is checked first. After a pop the opponent can also
    /// be left with a four-in-a-row, which wins the game for them. A full board
    /// is a draw only in Classic, in PopOut the next player may still pop.
    pub fn play(&mut self, next_move: Move) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }

        let status = match next_move {
            Move::Drop(column) => {
                self.drop_move(column)?;
                if self.is_winning(self.current_player) {
                    GameStatus::Won(self.current_player)
                } else if self.is_board_full() && self.variant == Variant::Classic {
                    GameStatus::Draw
                } else {
                    GameStatus::Playing
                }
            }
            Move::Pop(column) => {
                self.pop_move(column)?;
                if self.is_winning(self.current_player) {
                    GameStatus::Won(self.current_player)
                } else if self.is_winning(self.next_player) {
                    GameStatus::Won(self.next_player)
                } else {
                    GameStatus::Playing
                }
            }
        };

        match status {
            GameStatus::Playing => self.change_turns(),
            GameStatus::Won(player) => info!("{} won the {} game", player, self.variant),
            GameStatus::Draw => info!("{} game drawn", self.variant),
        }
        self.status = status;
        Ok(status)
    }
}

fn check_column(column: usize) -> Result<(), MoveError> {
    if column >= WIDTH {
        Err(MoveError::ColumnOutOfRange { column })
    } else {
        Ok(())
    }
}

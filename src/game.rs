use crate::{
    ai,
    board::{Board, BoardState},
    common::{BoardError, GameResult, Mark, Move},
    config::FIRST_TO_MOVE,
    line::Line,
    player::Player,
};
use rand::rngs::SmallRng;
use rand::Rng;

/// Position of a game in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    NotStarted,
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl GamePhase {
    /// Terminal phases accept no moves until the engine is reset.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GamePhase::PlayerWon | GamePhase::ComputerWon | GamePhase::Draw
        )
    }
}

impl From<GameResult> for GamePhase {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => GamePhase::InProgress,
            GameResult::PlayerWins(_) => GamePhase::PlayerWon,
            GameResult::ComputerWins(_) => GamePhase::ComputerWon,
            GameResult::Draw => GamePhase::Draw,
        }
    }
}

/// Serializable overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub phase: GamePhase,
    pub to_move: Mark,
}

/// A move that was applied, and the result it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub mark: Mark,
    pub mv: Move,
    pub result: GameResult,
}

/// Turn order and game lifecycle around a [`Board`].
pub struct GameEngine {
    board: Board,
    phase: GamePhase,
    to_move: Mark,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with an empty board, waiting for the first move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::NotStarted,
            to_move: FIRST_TO_MOVE,
        }
    }

    /// Immutable reference to the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose move is expected next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.board.game_result()
    }

    /// Completed line to highlight, once the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.result().winning_line()
    }

    /// Status text for the display surface.
    pub fn status(&self) -> &'static str {
        match (self.phase, self.to_move) {
            (GamePhase::PlayerWon, _) => "You win!",
            (GamePhase::ComputerWon, _) => "Computer wins!",
            (GamePhase::Draw, _) => "Draw game.",
            (_, Mark::Player) => "Your turn (O)",
            (_, Mark::Computer) => "Computer thinking…",
        }
    }

    /// Apply `mv` for `mark`, enforcing phase and turn order.
    pub fn play(&mut self, mark: Mark, mv: Move) -> Result<TurnOutcome, BoardError> {
        if self.phase.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if mark != self.to_move {
            return Err(BoardError::OutOfTurn);
        }
        self.board.place(mv.row, mv.col, mark)?;
        let result = self.board.game_result();
        self.phase = GamePhase::from(result);
        self.to_move = mark.opponent();
        log::debug!("{:?} plays {}", mark, mv);
        if result.is_over() {
            log::info!("game over after {} moves: {:?}", self.board.move_count(), result);
        }
        Ok(TurnOutcome { mark, mv, result })
    }

    /// Apply the human's move at (row, col).
    pub fn play_player(&mut self, row: usize, col: usize) -> Result<TurnOutcome, BoardError> {
        self.play(Mark::Player, Move::new(row, col))
    }

    /// Let the heuristic choose and apply the computer's move.
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnOutcome, BoardError> {
        if self.phase.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if self.to_move != Mark::Computer {
            return Err(BoardError::OutOfTurn);
        }
        let mv = ai::select_move(&self.board, Mark::Computer, rng)?;
        self.play(Mark::Computer, mv)
    }

    /// Ask `player` for the move of the side to move and apply it.
    pub fn play_turn(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<TurnOutcome, BoardError> {
        if self.phase.is_terminal() {
            return Err(BoardError::GameOver);
        }
        let mark = self.to_move;
        let mv = player.select_move(rng, &self.board, mark)?;
        log::debug!("{} player chose {} for {:?}", player.name(), mv, mark);
        self.play(mark, mv)
    }

    /// Discard the current game unconditionally.
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = GamePhase::NotStarted;
        self.to_move = FIRST_TO_MOVE;
        log::debug!("board reset");
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            phase: self.phase,
            to_move: self.to_move,
        }
    }
}

impl TryFrom<GameState> for GameEngine {
    type Error = BoardError;

    /// Restore an engine, checking that phase and side to move agree with
    /// the board.
    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        let board = Board::try_from(state.board)?;
        let expected_phase = if board.move_count() == 0 {
            GamePhase::NotStarted
        } else {
            GamePhase::from(board.game_result())
        };
        let players = board.marks(Mark::Player).count_ones();
        let computers = board.marks(Mark::Computer).count_ones();
        let expected_to_move = if players > computers {
            FIRST_TO_MOVE.opponent()
        } else {
            FIRST_TO_MOVE
        };
        if state.phase != expected_phase
            || state.to_move != expected_to_move
            || computers > players
        {
            return Err(BoardError::InconsistentState);
        }
        Ok(Self {
            board,
            phase: state.phase,
            to_move: state.to_move,
        })
    }
}

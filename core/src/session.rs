use serde::{Deserialize, Serialize};

use crate::*;

/// One game from start to finish.
///
/// The session owns its board and player state. Every accepted move replaces the
/// reveal/flag state wholesale and re-evaluates the outcome before returning, so
/// callers never observe a stale outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    revealed: RevealState,
    flagged: FlagState,
    flags_remaining: CellCount,
    outcome: GameOutcome,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    /// Generates a fresh board for `config` and starts a session on it.
    pub fn new_game<P: CellPicker + ?Sized>(config: GameConfig, picker: &mut P) -> Result<Self> {
        let board = generate(config, picker)?;
        Self::new(board)
    }

    /// Starts a session on an existing board.
    pub fn new(board: Board) -> Result<Self> {
        board.game_config().validate()?;

        let size = board.size();
        log::info!(
            "New game on a {}x{} board with {} mines",
            size,
            size,
            board.mine_count()
        );
        Ok(Self {
            flags_remaining: board.mine_count(),
            board,
            revealed: RevealState::new(size),
            flagged: FlagState::new(size),
            outcome: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.board.game_config()
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &RevealState {
        &self.revealed
    }

    pub fn flagged(&self) -> &FlagState {
        &self.flagged
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    /// Outcome as of the last committed move; a session with no moves yet is `InProgress`.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// The mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        CellView::derive(
            self.board[coords],
            self.revealed.is_revealed(coords),
            self.flagged.is_flagged(coords),
        )
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    pub fn request_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.is_finished() {
            log::debug!("Game is over, ignoring reveal at {:?}", coords);
            return Ok(RevealOutcome::NoChange);
        }
        if self.revealed.is_revealed(coords) || self.flagged.is_flagged(coords) {
            log::debug!("Cell {:?} is not hidden, ignoring reveal", coords);
            return Ok(RevealOutcome::NoChange);
        }

        self.revealed = reveal(&self.board, &self.revealed, &self.flagged, coords)?;
        self.settle();

        Ok(match self.outcome {
            GameOutcome::Lost => {
                self.triggered_mine = Some(coords);
                RevealOutcome::HitMine
            }
            GameOutcome::Won => RevealOutcome::Won,
            GameOutcome::InProgress => RevealOutcome::Revealed,
        })
    }

    pub fn request_toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.is_finished() {
            log::debug!("Game is over, ignoring flag at {:?}", coords);
            return Ok(MarkOutcome::NoChange);
        }

        let (flagged, flags_remaining) =
            toggle_flag(&self.flagged, self.flags_remaining, &self.revealed, coords)?;
        if flagged == self.flagged {
            return Ok(MarkOutcome::NoChange);
        }

        self.flagged = flagged;
        self.flags_remaining = flags_remaining;
        self.settle();

        Ok(match self.outcome {
            GameOutcome::Won => MarkOutcome::Won,
            _ => MarkOutcome::Changed,
        })
    }

    /// Re-derives the outcome from the state just committed.
    fn settle(&mut self) {
        let outcome = evaluate(&self.board, &self.revealed, &self.flagged);
        if outcome != self.outcome {
            log::info!("Game outcome changed to {:?}", outcome);
        }
        self.outcome = outcome;
    }
}

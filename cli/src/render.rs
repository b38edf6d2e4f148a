use flagsweep_core::{GameOutcome, SessionView};
use std::fmt;

/// Text drawing of a board, with column numbers on top and row numbers on the left.
pub struct BoardText<'a>(pub &'a SessionView);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        f.write_str("   ")?;
        for col in 0..view.size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..view.size {
            write!(f, "{:>3}", row)?;
            for col in 0..view.size {
                write!(f, "{:>3}", view.cell((row, col)).symbol())?;
            }
            writeln!(f)?;
        }

        write!(f, "flags left: {}", view.flags_remaining)
    }
}

pub fn outcome_message(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Won => Some("Congratulations, you have won! Type n to play again."),
        GameOutcome::Lost => Some("Unlucky, you hit a mine! Type n to play again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagsweep_core::{Board, GameSession};

    #[test]
    fn renders_hidden_flagged_and_numbers() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut session = GameSession::new(board).unwrap();
        session.request_reveal((1, 1)).unwrap();
        session.request_toggle_flag((0, 1)).unwrap();

        let text = BoardText(&session.view()).to_string();

        assert_eq!(text, "     0  1\n  0  #  F\n  1  #  1\nflags left: 0");
    }

    #[test]
    fn only_terminal_outcomes_have_messages() {
        assert!(outcome_message(GameOutcome::InProgress).is_none());
        assert!(outcome_message(GameOutcome::Won).is_some());
        assert!(outcome_message(GameOutcome::Lost).is_some());
    }
}

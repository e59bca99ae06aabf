//! Puzzle goals.
//!
//! A goal names a side and a move budget: either that side must be
//! checkmated within the budget, or it must survive the budget without being
//! checkmated. Moves are counted in plies (every successful move of either
//! side counts one), matching `GameState::moves_played`.
//!
//! Textual form: `mate:<moves>:<white|black>` or `avoid:<moves>:<white|black>`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceColor;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    CheckmateInMoves,
    AvoidCheckmateInMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalVerdict {
    Pending,
    Achieved,
    Failed,
}

impl fmt::Display for GoalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalVerdict::Pending => write!(f, "pending"),
            GoalVerdict::Achieved => write!(f, "achieved"),
            GoalVerdict::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGoal {
    pub kind: GoalKind,
    pub moves: usize,
    pub target: PieceColor,
}

impl PuzzleGoal {
    pub fn new(kind: GoalKind, moves: usize, target: PieceColor) -> Self {
        Self {
            kind,
            moves,
            target,
        }
    }

    /// Judge the goal against the current game.
    ///
    /// The verdict stays `Pending` until the budget is used up or the game
    /// has ended; an early mate of the target settles both goal kinds.
    pub fn evaluate(&self, game: &GameState) -> GoalVerdict {
        if game.moves_played() < self.moves && !game.is_game_over() {
            return GoalVerdict::Pending;
        }

        let mated = game.is_checkmate(self.target);
        let achieved = match self.kind {
            GoalKind::CheckmateInMoves => mated,
            GoalKind::AvoidCheckmateInMoves => !mated,
        };
        if achieved {
            GoalVerdict::Achieved
        } else {
            GoalVerdict::Failed
        }
    }
}

impl fmt::Display for PuzzleGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            GoalKind::CheckmateInMoves => "mate",
            GoalKind::AvoidCheckmateInMoves => "avoid",
        };
        let target = match self.target {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        };
        write!(f, "{prefix}:{}:{target}", self.moves)
    }
}

impl FromStr for PuzzleGoal {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessErrors::InvalidGoal(s.to_owned());
        let mut parts = s.trim().split(':');

        let kind = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("mate") => GoalKind::CheckmateInMoves,
            Some("avoid") => GoalKind::AvoidCheckmateInMoves,
            _ => return Err(invalid()),
        };
        let moves = parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(invalid)?;
        let target = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("white") | Some("w") => PieceColor::White,
            Some("black") | Some("b") => PieceColor::Black,
            _ => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(kind, moves, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;
    use crate::utils::placement::board_from_placement;

    fn pos(square: &str) -> Position {
        square.parse().expect("test square should parse")
    }

    fn game(placement: &str) -> GameState {
        let mut game = GameState::new();
        game.load_board(board_from_placement(placement).expect("placement should parse"));
        game
    }

    fn play(game: &mut GameState, from: &str, to: &str) {
        game.select_piece_at(pos(from)).expect("piece is selectable");
        game.move_piece(pos(to)).expect("move is legal");
    }

    #[test]
    fn goals_parse_and_print() {
        let goal: PuzzleGoal = "mate:1:black".parse().expect("goal should parse");
        assert_eq!(
            goal,
            PuzzleGoal::new(GoalKind::CheckmateInMoves, 1, PieceColor::Black)
        );
        assert_eq!(goal.to_string(), "mate:1:black");

        let goal: PuzzleGoal = "AVOID:4:W".parse().expect("goal should parse");
        assert_eq!(goal.kind, GoalKind::AvoidCheckmateInMoves);
        assert_eq!(goal.target, PieceColor::White);
    }

    #[test]
    fn malformed_goals_are_rejected() {
        let bad = [
            "",
            "mate",
            "mate:x:white",
            "mate:0:white",
            "draw:2:white",
            "mate:2:red",
            "mate:2:white:1",
        ];
        for text in bad {
            assert_eq!(
                text.parse::<PuzzleGoal>(),
                Err(ChessErrors::InvalidGoal(text.to_owned())),
                "goal {text:?}"
            );
        }
    }

    #[test]
    fn mate_in_one_is_achieved_by_the_mating_move() {
        let mut game = game("Ra1 Kg6 kh8");
        let goal = PuzzleGoal::new(GoalKind::CheckmateInMoves, 1, PieceColor::Black);
        assert_eq!(goal.evaluate(&game), GoalVerdict::Pending);

        play(&mut game, "a1", "a8");
        assert_eq!(goal.evaluate(&game), GoalVerdict::Achieved);
    }

    #[test]
    fn mate_goal_fails_when_budget_runs_out() {
        let mut game = game("Ra1 Kg6 kh8");
        let goal = PuzzleGoal::new(GoalKind::CheckmateInMoves, 1, PieceColor::Black);
        play(&mut game, "a1", "a2");
        assert_eq!(goal.evaluate(&game), GoalVerdict::Failed);
    }

    #[test]
    fn avoid_goal_tracks_survival() {
        let goal = PuzzleGoal::new(GoalKind::AvoidCheckmateInMoves, 2, PieceColor::Black);

        let mut survived = game("Ra1 Kg6 kh8");
        play(&mut survived, "a1", "a2");
        assert_eq!(goal.evaluate(&survived), GoalVerdict::Pending);
        play(&mut survived, "h8", "g8");
        assert_eq!(goal.evaluate(&survived), GoalVerdict::Achieved);

        let mut mated = game("Ra1 Kg6 kh8");
        play(&mut mated, "a1", "a8");
        assert_eq!(goal.evaluate(&mated), GoalVerdict::Failed);
    }
}

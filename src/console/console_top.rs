//! Line-oriented console front-end and command loop.
//!
//! Reads one command per line, drives a `GameState` (plus an optional puzzle
//! goal) and answers each command with a single `ok ...` or `error ...` line.
//! `show` is the exception and prints the whole board.
//!
//! Commands:
//! - `place <token>` puts a piece on the board, e.g. `place Qd1` or `place ke8`
//! - `remove <square>`
//! - `select <square>` selects a piece of the side to move and lists its targets
//! - `move <square> [q|r|b|n]` moves the selected piece, with an optional
//!   promotion choice
//! - `moves`, `show`, `status`, `valid`
//! - `goal <mate|avoid>:<n>:<white|black>` sets the puzzle goal, `goal` alone
//!   reports it
//! - `random <n>` plays up to `n` random moves
//! - `reset`, `quit`

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::GameConfig;
use crate::game_state::chess_types::PromotionPiece;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::puzzle::puzzle_goal::{GoalVerdict, PuzzleGoal};
use crate::utils::placement::{apply_placement, parse_placement_token};
use crate::utils::random_playout::RandomPlayout;
use crate::utils::render_game_state::render_game_state;

const DEFAULT_RANDOM_MOVES: usize = 1;

pub fn run_stdio_loop(console: &mut ConsoleState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game_state: GameState,
    goal: Option<PuzzleGoal>,
    playout: RandomPlayout,
}

impl ConsoleState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game_state: GameState::with_config(config),
            goal: None,
            playout: RandomPlayout::new(),
        }
    }

    /// Console whose `random` command is reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            playout: RandomPlayout::seeded(seed),
            ..Self::new(config)
        }
    }

    /// Place every piece of a placement list, as given on the command line.
    pub fn setup(&mut self, placement: &str) -> Result<(), ChessErrors> {
        let mut board = self.game_state.board().clone();
        apply_placement(&mut board, placement)?;
        self.game_state.load_board(board);
        Ok(())
    }

    pub fn set_goal(&mut self, goal: Option<PuzzleGoal>) {
        self.goal = goal;
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!("console command: {trimmed}");

        let response = match cmd {
            "quit" | "exit" => return Ok(true),
            "show" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                return Ok(false);
            }
            "place" => self.handle_place(&args),
            "remove" => self.handle_remove(&args),
            "select" => self.handle_select(&args),
            "move" => self.handle_move(&args),
            "moves" => Ok(self.describe_highlights()),
            "status" => Ok(self.describe_status()),
            "valid" => Ok(if self.game_state.is_valid_board_configuration() {
                "valid".to_owned()
            } else {
                "invalid, need one king per side and another piece".to_owned()
            }),
            "goal" => self.handle_goal(&args),
            "random" => self.handle_random(&args),
            "reset" => {
                self.game_state.reset_game();
                Ok("board cleared, White to move".to_owned())
            }
            other => Err(format!("unknown command '{other}'")),
        };

        match response {
            Ok(text) => writeln!(out, "ok {text}")?,
            Err(text) => {
                warn!("{cmd}: {text}");
                writeln!(out, "error {text}")?;
            }
        }
        Ok(false)
    }

    fn handle_place(&mut self, args: &[&str]) -> Result<String, String> {
        let token = single_arg(args, "place <piece><square>")?;
        let (kind, color, position) =
            parse_placement_token(token).map_err(|err| err.to_string())?;
        self.game_state
            .place_new_piece(kind, color, position)
            .map_err(|err| err.to_string())?;
        Ok(format!("placed {color} {kind} on {position}"))
    }

    fn handle_remove(&mut self, args: &[&str]) -> Result<String, String> {
        let position = parse_square(single_arg(args, "remove <square>")?)?;
        self.game_state
            .remove_piece(position)
            .map(|piece| format!("removed {piece}"))
            .ok_or_else(|| ChessErrors::EmptySquare(position).to_string())
    }

    fn handle_select(&mut self, args: &[&str]) -> Result<String, String> {
        let position = parse_square(single_arg(args, "select <square>")?)?;
        self.game_state
            .select_piece_at(position)
            .map_err(|err| err.to_string())?;
        Ok(self.describe_highlights())
    }

    fn handle_move(&mut self, args: &[&str]) -> Result<String, String> {
        let (square, mut promotion) = match args {
            [square] => (*square, self.game_state.config().default_promotion),
            [square, letter] => {
                let choice = single_char(letter)
                    .and_then(PromotionPiece::from_letter)
                    .ok_or_else(|| format!("invalid promotion piece '{letter}'"))?;
                (*square, choice)
            }
            _ => return Err("usage: move <square> [q|r|b|n]".to_owned()),
        };
        let target = parse_square(square)?;

        let outcome = self
            .game_state
            .move_piece_with(target, &mut promotion)
            .map_err(|err| err.to_string())?;

        let mut text = format!("{}{}", outcome.from, outcome.to);
        if let Some(captured) = &outcome.captured {
            text.push_str(&format!(" captures {}", captured.kind()));
        }
        if let Some((_, kind)) = outcome.promoted {
            text.push_str(&format!(" promotes to {kind}"));
        }
        text.push_str(&format!(", {}", self.describe_status()));
        if let Some(verdict) = self.goal_verdict() {
            text.push_str(&format!(", goal {verdict}"));
        }
        Ok(text)
    }

    fn handle_goal(&mut self, args: &[&str]) -> Result<String, String> {
        match args {
            [] => Ok(match (self.goal, self.goal_verdict()) {
                (Some(goal), Some(verdict)) => format!("goal {goal} {verdict}"),
                _ => "no goal set".to_owned(),
            }),
            [text] => {
                let goal: PuzzleGoal = text.parse().map_err(|err: ChessErrors| err.to_string())?;
                self.goal = Some(goal);
                Ok(format!("goal {goal}"))
            }
            _ => Err("usage: goal <mate|avoid>:<moves>:<white|black>".to_owned()),
        }
    }

    fn handle_random(&mut self, args: &[&str]) -> Result<String, String> {
        let count = match args {
            [] => DEFAULT_RANDOM_MOVES,
            [n] => n
                .parse::<usize>()
                .map_err(|_| format!("invalid move count '{n}'"))?,
            _ => return Err("usage: random [moves]".to_owned()),
        };
        let played = self
            .playout
            .play(&mut self.game_state, count)
            .map_err(|err| err.to_string())?;
        let moves: Vec<String> = played
            .iter()
            .map(|outcome| format!("{}{}", outcome.from, outcome.to))
            .collect();
        Ok(format!(
            "played {} [{}], {}",
            moves.len(),
            moves.join(" "),
            self.describe_status()
        ))
    }

    fn goal_verdict(&self) -> Option<GoalVerdict> {
        self.goal.map(|goal| goal.evaluate(&self.game_state))
    }

    fn describe_status(&self) -> String {
        format!(
            "{} to move, {}",
            self.game_state.current_turn(),
            self.game_state.game_status()
        )
    }

    fn describe_highlights(&self) -> String {
        let Some(piece) = self.game_state.selected_piece() else {
            return "no piece selected".to_owned();
        };
        let targets: Vec<String> = self
            .game_state
            .highlighted_moves()
            .iter()
            .map(Position::to_string)
            .collect();
        format!("{piece}: {} moves [{}]", targets.len(), targets.join(" "))
    }
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, String> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(format!("usage: {usage}")),
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_square(text: &str) -> Result<Position, String> {
    text.parse::<Position>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        let quit = console
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        assert!(!quit);
        String::from_utf8(out).expect("console output is utf-8")
    }

    fn console(placement: &str) -> ConsoleState {
        let mut console = ConsoleState::with_seed(GameConfig::default(), 1);
        console.setup(placement).expect("placement should parse");
        console
    }

    #[test]
    fn place_and_remove_report_the_piece() {
        let mut console = ConsoleState::with_seed(GameConfig::default(), 1);
        assert_eq!(run(&mut console, "place Qd1"), "ok placed White Queen on d1\n");
        assert_eq!(
            run(&mut console, "place kd1"),
            "error square d1 is already occupied\n"
        );
        assert_eq!(run(&mut console, "remove d1"), "ok removed White Queen on d1\n");
        assert_eq!(run(&mut console, "remove d1"), "error no piece on d1\n");
    }

    #[test]
    fn select_lists_targets_and_rejects_wrong_side() {
        let mut console = console("Ke1 ke8 Na1");
        assert_eq!(
            run(&mut console, "select a1"),
            "ok White Knight on a1: 2 moves [c2 b3]\n"
        );
        assert!(run(&mut console, "select e8").starts_with("error piece"));
        assert!(run(&mut console, "select z9").starts_with("error"));
    }

    #[test]
    fn mating_move_reports_status_and_goal() {
        let mut console = console("Ra1 Kg6 kh8");
        assert_eq!(run(&mut console, "goal mate:1:black"), "ok goal mate:1:black\n");
        run(&mut console, "select a1");
        assert_eq!(
            run(&mut console, "move a8"),
            "ok a1a8, Black to move, checkmate, goal achieved\n"
        );
        assert_eq!(
            run(&mut console, "goal"),
            "ok goal mate:1:black achieved\n"
        );
    }

    #[test]
    fn move_with_promotion_letter() {
        let mut console = console("Ke1 kh5 Pb7");
        run(&mut console, "select b7");
        assert_eq!(
            run(&mut console, "move b8 n"),
            "ok b7b8 promotes to Knight, Black to move, in progress\n"
        );
        assert!(run(&mut console, "move b8 x").starts_with("error"));
    }

    #[test]
    fn move_without_selection_is_an_error() {
        let mut console = console("Ke1 ke8 Ra1");
        assert_eq!(run(&mut console, "move a5"), "error no piece is selected\n");
        assert_eq!(run(&mut console, "moves"), "ok no piece selected\n");
    }

    #[test]
    fn valid_status_reset_and_quit() {
        let mut console = console("Ke1 ke8");
        assert!(run(&mut console, "valid").starts_with("ok invalid"));
        run(&mut console, "place Ra1");
        assert_eq!(run(&mut console, "valid"), "ok valid\n");
        assert_eq!(run(&mut console, "status"), "ok White to move, in progress\n");
        assert_eq!(
            run(&mut console, "reset"),
            "ok board cleared, White to move\n"
        );
        assert!(console.game_state().active_pieces().is_empty());

        let mut out = Vec::new();
        assert!(console
            .handle_command("quit", &mut out)
            .expect("writing to a Vec cannot fail"));
        assert!(run(&mut console, "bogus").starts_with("error unknown command"));
    }

    #[test]
    fn random_plays_the_requested_number_of_moves() {
        let mut console = console("Ke1 ke8 Ph2 pa7");
        let response = run(&mut console, "random 4");
        assert!(response.starts_with("ok played 4 ["), "{response}");
        assert_eq!(console.game_state().moves_played(), 4);
    }

    #[test]
    fn show_prints_the_board() {
        let mut console = console("Ke1 ke8");
        let text = run(&mut console, "show");
        assert!(text.starts_with("  a b c d e f g h\n8 "));
        assert!(text.ends_with("White to move, in progress\n"));
    }
}

//! Line-oriented text front-end and command loop.
//!
//! Reads one command per line, drives a `GameSession`, and writes replies in
//! the `info string` style of a UCI front-end. Rules errors never end the
//! loop; they are reported as `info string <command> error: ...` lines. A
//! failed write on the output stream does end it.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::chess_errors::ChessError;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::session::game_session::GameSession;
use crate::utils::algebraic::{algebraic_to_index, index_to_algebraic};
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = SessionState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = state.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Front-end settings changed through `setoption` and `debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_fen: String,
    pub debug_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            debug_mode: false,
        }
    }
}

/// Failure inside one command: a rules error is reported back on the
/// stream, an I/O error ends the loop.
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Chess(#[from] ChessError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct SessionState {
    session: GameSession,
    engine: Box<dyn Engine>,
    config: SessionConfig,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(RandomEngine::new()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            session: GameSession::new(),
            engine,
            config: SessionConfig::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handles one line; returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "newgame" => {
                if let Err(err) = self.session.load_fen(&self.config.start_fen) {
                    writeln!(out, "info string newgame error: {}", err)?;
                }
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "moves" => {
                let result = self.handle_moves(parts.next().unwrap_or_default(), out);
                report_command_error(out, cmd, result)?;
            }
            "play" => {
                let result = self.handle_play(parts.next().unwrap_or_default(), out);
                report_command_error(out, cmd, result)?;
            }
            "go" => {
                let result = self.handle_go(out);
                if result.is_err() {
                    report_command_error(out, cmd, result)?;
                    writeln!(out, "bestmove 0000")?;
                }
            }
            "fen" => {
                writeln!(out, "{}", self.session.export_fen())?;
            }
            "d" => {
                writeln!(out, "{}", render_game_state(self.session.board()))?;
                writeln!(out, "Fen: {}", self.session.export_fen())?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.config.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "info string unknown command: {}", cmd)?;
            }
        }

        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), ChessError> {
        let rest = line.trim_start_matches("position").trim();
        if rest == "startpos" {
            self.session.new_game();
            return Ok(());
        }

        match rest.strip_prefix("fen") {
            Some(fen) => self.session.load_fen(fen.trim()),
            None => Err(ChessError::malformed_fen(rest, "expected 'startpos' or 'fen <FEN>'")),
        }
    }

    fn handle_moves(&self, square: &str, out: &mut impl Write) -> Result<(), CommandError> {
        let from = algebraic_to_index(square)?;
        let options = self.session.legal_moves(from);

        let quiet = squares_to_text(&options.quiet)?;
        let captures = squares_to_text(&options.captures)?;
        writeln!(out, "quiet {}", quiet)?;
        writeln!(out, "captures {}", captures)?;
        Ok(())
    }

    fn handle_play(&mut self, text: &str, out: &mut impl Write) -> Result<(), CommandError> {
        let (from_text, to_text) = text
            .get(0..2)
            .zip(text.get(2..))
            .ok_or_else(|| ChessError::out_of_bounds(text))?;
        let from = algebraic_to_index(from_text)?;
        let to = algebraic_to_index(to_text)?;

        if !self.session.legal_moves(from).contains(to) {
            writeln!(out, "info string play rejected: {} is not a generated move", text)?;
            return Ok(());
        }

        self.session.apply_move(from, to)?;
        if self.config.debug_mode {
            writeln!(out, "info string fen {}", self.session.export_fen())?;
        }
        Ok(())
    }

    fn handle_go(&mut self, out: &mut impl Write) -> Result<(), CommandError> {
        let output = self.engine.choose_move(self.session.board())?;
        if self.config.debug_mode {
            for line in &output.info_lines {
                writeln!(out, "{}", line)?;
            }
        }

        let Some((from, to)) = output.best_move else {
            writeln!(out, "bestmove 0000")?;
            return Ok(());
        };

        let text = format!("{}{}", index_to_algebraic(from)?, index_to_algebraic(to)?);
        self.session.apply_move(from, to)?;
        writeln!(out, "bestmove {}", text)?;
        if self.config.debug_mode {
            writeln!(out, "info string fen {}", self.session.export_fen())?;
        }
        Ok(())
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" if mode.is_empty() => mode = "name",
                "value" if mode == "name" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("StartFen") {
            GameSession::from_fen(&value).map_err(|e| e.to_string())?;
            self.config.start_fen = value;
            Ok(())
        } else if name.eq_ignore_ascii_case("Seed") {
            self.engine.set_option(&name, &value)
        } else {
            Err(format!("unknown option '{}'", name))
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

fn report_command_error(
    out: &mut impl Write,
    cmd: &str,
    result: Result<(), CommandError>,
) -> io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(CommandError::Chess(err)) => writeln!(out, "info string {} error: {}", cmd, err),
        Err(CommandError::Io(err)) => Err(err),
    }
}

fn squares_to_text(squares: &[usize]) -> Result<String, ChessError> {
    let names = squares
        .iter()
        .map(|&sq| index_to_algebraic(sq))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(" "))
}

use std::str::FromStr;

use chess::{Board, ChessMove};

use super::commands::UciInput;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        match input {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,

            _ if input.starts_with("position") => self.decode_position(input),
            _ if input.starts_with("go") => UciInput::Go,
            _ if input.starts_with("stop") => UciInput::Stop,
            _ if input.starts_with("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    /// Only the `startpos` form is supported; a FEN payload is rejected. A
    /// bad move token rejects the whole command, so the previously valid
    /// position stays in place.
    fn decode_position(&self, input: &str) -> UciInput {
        let mut tokens = input.split_whitespace().skip(1);

        match tokens.next() {
            Some("startpos") => {}
            _ => return UciInput::InvalidPosition("Custom Positions Not Supported".to_string()),
        }

        let mut board = Board::default();
        match tokens.next() {
            None => {}
            Some("moves") => {
                for token in tokens {
                    match ChessMove::from_str(token) {
                        Ok(mv) if board.legal(mv) => board = board.make_move_new(mv),
                        _ => {
                            return UciInput::InvalidPosition(format!("illegal move '{}'", token))
                        }
                    }
                }
            }
            Some(other) => {
                return UciInput::InvalidPosition(format!("unexpected token '{}'", other))
            }
        }

        UciInput::Position(board)
    }
}

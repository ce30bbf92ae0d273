use chess::Board;

/// A parsed input line. Parsing is total: malformed commands come back as
/// data (`InvalidPosition`, `Unknown`) and the command loop decides their
/// fate.
#[derive(Debug, PartialEq)]
pub enum UciInput {
    Uci,
    IsReady,
    UciNewGame,
    /// `position startpos [moves ...]`, already applied to a fresh board.
    Position(Board),
    /// A recognized `position` command with an unsupported or illegal body.
    InvalidPosition(String),
    Go,
    Stop,
    Quit,
    Unknown(String),
}

/// A line to emit on the protocol stream.
#[derive(Debug, PartialEq)]
pub enum UciOutput {
    IdName(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Error(String),
}

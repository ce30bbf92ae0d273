mod commands;
mod connection;
mod decoder;
mod encoder;

pub use commands::{UciInput, UciOutput};
pub use connection::{spawn_stdin_reader, spawn_stdout_writer};
pub use decoder::Decoder;
pub use encoder::Encoder;

/// Null move in UCI format, reported when a stopped search has no fully
/// searched root move to offer.
pub const NULL_MOVE: &str = "0000";

use super::commands::UciOutput;

pub struct Encoder;

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, output: &UciOutput) -> String {
        match output {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),
            UciOutput::BestMove(best_move) => format!("bestmove {}", best_move),
            UciOutput::Error(message) => format!("Error: {}", message),
        }
    }
}

//! UCI application - handles the protocol and coordinates the search task.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use chess::{Board, BoardStatus};
use evaluation::RatioEvaluator;
use log::debug;
use search::{SearchOutcome, SearchTask};
use uci::{Decoder, UciInput, UciOutput, NULL_MOVE};

const ENGINE_NAME: &str = "Leo";

/// Plies searched for every `go` when no override is given on the CLI.
pub const DEFAULT_DEPTH: u8 = 7;

/// Pause between loop iterations, bounding the cost of polling.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The main UCI application: owns the current position, dispatches protocol
/// commands, and supervises at most one outstanding search task.
///
/// The loop never blocks on input; lines arrive over a channel fed by a
/// reader thread and are polled each iteration. It blocks only to join a
/// search task, and always after setting the task's stop flag, so the wait
/// is one flag-check away rather than the remainder of the tree.
pub struct Leo {
    lines: Receiver<String>,
    output: Sender<UciOutput>,
    board: Board,
    search: Option<SearchTask>,
    depth: u8,
}

impl Leo {
    pub fn new(lines: Receiver<String>, output: Sender<UciOutput>, depth: u8) -> Self {
        Self {
            lines,
            output,
            board: Board::default(),
            search: None,
            depth,
        }
    }

    /// Runs the command loop until `quit`, a fatal command, or end of input.
    pub fn run(mut self) {
        let decoder = Decoder::new();

        loop {
            match self.lines.try_recv() {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        debug!("Input: {:?}", line);
                        if !self.handle(decoder.decode(line)) {
                            break;
                        }
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => break, // stdin closed
            }

            self.poll_search();
            thread::sleep(POLL_INTERVAL);
        }

        self.abort_search();
    }

    /// Handles one parsed input. Returns false when the loop should exit.
    fn handle(&mut self, input: UciInput) -> bool {
        match input {
            UciInput::Uci => {
                self.send(UciOutput::IdName(ENGINE_NAME.to_string()));
                self.send(UciOutput::UciOk);
            }
            UciInput::IsReady => self.send(UciOutput::ReadyOk),
            UciInput::UciNewGame => {} // nothing to reset between games
            UciInput::Position(board) => self.board = board,
            UciInput::InvalidPosition(reason) => self.send(UciOutput::Error(reason)),
            UciInput::Go => self.start_search(),
            UciInput::Stop => self.stop_search(),
            UciInput::Quit => return false,
            UciInput::Unknown(line) => {
                debug!("Unknown command: {:?}", line);
                self.send(UciOutput::Error("invalid command".to_string()));
                return false; // unknown input is fatal by protocol policy
            }
        }

        true
    }

    /// Spawns a search over a copy of the current position. A `go` while a
    /// search is outstanding supersedes it: the old task is stopped and its
    /// result discarded.
    fn start_search(&mut self) {
        if let Some(task) = self.search.take() {
            debug!("go while searching; superseding the outstanding task");
            task.stop();
            let _ = task.join();
        }

        // A bestmove is owed for every go, even from a mated or stalemated
        // position where there is nothing to search.
        if self.board.status() != BoardStatus::Ongoing {
            self.send(UciOutput::BestMove(NULL_MOVE.to_string()));
            return;
        }

        self.search = Some(SearchTask::spawn(self.board, self.depth, RatioEvaluator));
    }

    /// Blocks until the outstanding search finishes and reports it. Without
    /// an outstanding search, `stop` is a no-op.
    fn stop_search(&mut self) {
        match self.search.take() {
            Some(task) => {
                task.stop();
                let outcome = task.join();
                self.report(outcome);
            }
            None => debug!("stop with no search outstanding"),
        }
    }

    /// Reports a search that finished on its own, without waiting for an
    /// explicit `stop`. Taking the task out of its slot first is what makes
    /// a later `stop` a no-op instead of a second report.
    fn poll_search(&mut self) {
        let finished = self.search.as_ref().is_some_and(SearchTask::is_finished);
        if finished {
            if let Some(task) = self.search.take() {
                self.report(task.join());
            }
        }
    }

    /// Stops and discards an outstanding search without reporting, so a
    /// `quit` mid-search never prints a stray `bestmove`.
    fn abort_search(&mut self) {
        if let Some(task) = self.search.take() {
            task.stop();
            let _ = task.join();
        }
    }

    fn report(&self, outcome: SearchOutcome) {
        let best_move = match outcome {
            SearchOutcome::Complete { best_move, .. } => best_move.to_string(),
            SearchOutcome::Cancelled {
                best_move: Some(m), ..
            } => m.to_string(),
            // Stopped before any root move was fully searched.
            SearchOutcome::Cancelled {
                best_move: None, ..
            } => NULL_MOVE.to_string(),
        };

        self.send(UciOutput::BestMove(best_move));
    }

    fn send(&self, output: UciOutput) {
        // A failed send means the writer is gone and we are shutting down.
        let _ = self.output.send(output);
    }
}

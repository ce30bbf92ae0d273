use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chess::Board;
use evaluation::Evaluator;
use log::debug;

use crate::negamax::{search_root, SearchOutcome};

/// A single-shot search running on its own thread.
///
/// The board is copied in at spawn, so the spawner may replace its own board
/// while the search runs. The outcome is published exactly once, through
/// `join`, which consumes the task.
pub struct SearchTask {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<SearchOutcome>,
}

impl SearchTask {
    /// Spawns a search of `board` to exactly `depth` plies.
    pub fn spawn<E>(board: Board, depth: u8, evaluator: E) -> Self
    where
        E: Evaluator + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        debug!("Spawning search to depth {}", depth);
        let handle = thread::spawn(move || search_root(&board, depth, &evaluator, &flag));

        Self { stop, handle }
    }

    /// Non-blocking readiness check.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Requests cooperative cancellation. The search observes the flag at
    /// the next node it enters and unwinds; nothing is interrupted
    /// preemptively.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Blocks until the search thread finishes and takes its outcome.
    pub fn join(self) -> SearchOutcome {
        self.handle.join().expect("search thread panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::RatioEvaluator;
    use std::time::Duration;

    #[test]
    fn test_shallow_task_completes() {
        let task = SearchTask::spawn(Board::default(), 2, RatioEvaluator);
        assert!(matches!(task.join(), SearchOutcome::Complete { .. }));
    }

    #[test]
    fn test_readiness_check_flips_once_done() {
        let task = SearchTask::spawn(Board::default(), 1, RatioEvaluator);

        for _ in 0..500 {
            if task.is_finished() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert!(task.is_finished());
        assert!(matches!(task.join(), SearchOutcome::Complete { .. }));
    }

    #[test]
    fn test_stop_cancels_a_deep_search() {
        // Depth far beyond what could finish; only the stop flag brings the
        // join back.
        let task = SearchTask::spawn(Board::default(), 20, RatioEvaluator);
        task.stop();
        assert!(matches!(task.join(), SearchOutcome::Cancelled { .. }));
    }
}

use std::io::{self, BufRead};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::debug;

use super::commands::UciOutput;
use super::encoder::Encoder;

/// Forwards stdin to a channel, one line per message, from a dedicated
/// thread, so the command loop can poll for input instead of blocking on IO.
/// The channel closes when stdin reaches end of file.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break; // the loop is gone
            }
        }
    });

    rx
}

/// Encodes and prints outputs from a dedicated thread, in send order. The
/// thread drains the queue and exits once every sender is dropped; join the
/// returned handle to make sure queued lines reached stdout.
pub fn spawn_stdout_writer() -> (Sender<UciOutput>, JoinHandle<()>) {
    let (tx, rx) = channel();

    let handle = thread::spawn(move || {
        let encoder = Encoder::new();

        while let Ok(output) = rx.recv() {
            let line = encoder.encode(&output);
            debug!("Output: {:?}", line);
            println!("{}", line);
        }
    });

    (tx, handle)
}

//! Candidate input arriving line by line
//!
//! Lines are read on a dedicated thread and stamped on arrival, so the
//! engine can tell an answer typed after a prompt from one typed while it
//! was still busy with the previous turn.

use log::{debug, warn};
use std::io::BufRead;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Typed instead of an answer to stop the interview early
pub const END_COMMAND: &str = "/end";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub text: String,
    pub received_at: Instant,
}

impl InputLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Instant::now())
    }

    pub fn at(text: impl Into<String>, received_at: Instant) -> Self {
        Self {
            text: text.into(),
            received_at,
        }
    }
}

pub struct AnswerInbox {
    rx: mpsc::UnboundedReceiver<InputLine>,
}

impl AnswerInbox {
    pub fn channel() -> (mpsc::UnboundedSender<InputLine>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Read `reader` on its own thread. Blocking reads there never hold up
    /// the runtime, nor its shutdown once the interview is over.
    pub fn spawn_reader<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, inbox) = Self::channel();
        std::thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(text) => {
                        if tx.send(InputLine::new(text)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Reading input failed: {}", e);
                        break;
                    }
                }
            }
        });
        inbox
    }

    /// Next line received at or after `since`; earlier lines are discarded.
    /// `None` once input is closed.
    pub async fn next_since(&mut self, since: Instant) -> Option<String> {
        while let Some(line) = self.rx.recv().await {
            if line.received_at >= since {
                return Some(line.text);
            }
            debug!("Discarding input received before the prompt: {:?}", line.text);
        }
        None
    }
}

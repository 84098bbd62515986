//! Lexer running on its own thread, handing tokens over a bounded channel.
//!
//! The producer blocks while the channel is full and hangs up after sending
//! EOF. The consumer side stops at EOF and never reads past it. If the
//! consumer goes away first, the producer notices on its next send and quits.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::lexer::Lexer;
use super::token::Token;

/// Token channel capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Tokens buffered between producer and consumer. Clamped to at least 1.
    pub capacity: usize,
}

impl StreamConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Consumer end of a running lexer thread.
pub struct TokenStream {
    receiver: Option<Receiver<Token>>,
    producer: Option<JoinHandle<()>>,
    seen_eof: bool,
}

/// Starts scanning `source` on a new thread.
pub fn spawn(source: String, config: StreamConfig) -> io::Result<TokenStream> {
    let capacity = config.capacity.max(1);
    let (sender, receiver) = mpsc::sync_channel(capacity);

    let producer = thread::Builder::new()
        .name("lexer".to_string())
        .spawn(move || produce(&source, sender))?;
    debug!(capacity, "lexer thread started");

    Ok(TokenStream {
        receiver: Some(receiver),
        producer: Some(producer),
        seen_eof: false,
    })
}

fn produce(source: &str, sender: SyncSender<Token>) {
    for token in Lexer::new(source) {
        if sender.send(token).is_err() {
            debug!("token consumer hung up, lexer thread stopping");
            return;
        }
    }
    // dropping the sender closes the channel
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.seen_eof {
            return None;
        }

        let token = self.receiver.as_ref()?.recv().ok()?;
        if token.is_eof() {
            self.seen_eof = true;
        }
        Some(token)
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // hang up first so a producer blocked on a full channel can finish
        drop(self.receiver.take());
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!("lexer thread panicked");
            }
        }
    }
}

use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize,
}

/// Blocking keyboard read with an optional timeout.
///
/// `Ok(None)` means the timeout elapsed with no event, which the scheduler
/// treats as a tick. With no timeout the read waits indefinitely.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    async fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>>;
}

pub struct TerminalInput {
    reader: EventStream,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput {
            reader: EventStream::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    async fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>> {
        // Ignored events (mouse, key release) must not push the tick back.
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            let maybe_event = match deadline {
                Some(deadline) => {
                    match tokio::time::timeout_at(deadline, self.reader.next()).await {
                        Ok(maybe_event) => maybe_event,
                        Err(_) => return Ok(None),
                    }
                }
                None => self.reader.next().await,
            };

            match maybe_event {
                Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(Event::Key(key)));
                }
                Some(Ok(CrosstermEvent::Resize(_, _))) => return Ok(Some(Event::Resize)),
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => return Err(eyre!("terminal input stream closed")),
            }
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedInput;

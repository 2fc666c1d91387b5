//! Kill-by-PID prompt.
//!
//! `Idle -> Prompting -> {Confirmed, Cancelled, Quit}`. While prompting the
//! prompt owns keyboard input; no ticks run until it resolves. `Quit` ends
//! the program instead of returning to `Idle`.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::{Event, InputSource};

/// Enough digits for any `u32`.
pub const PID_INPUT_CAPACITY: usize = 10;

/// Digit-only buffer holding at most [`PID_INPUT_CAPACITY`] characters.
/// Digits past the capacity are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PidBuffer {
    digits: String,
}

impl PidBuffer {
    /// Returns whether the character was stored.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.digits.len() >= PID_INPUT_CAPACITY {
            return false;
        }
        self.digits.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The buffer as a signalable pid. Empty, zero and out-of-range input
    /// yield `None`; pid 0 would address the caller's own process group.
    pub fn pid(&self) -> Option<u32> {
        self.digits.parse().ok().filter(|&pid| pid != 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Confirmed { pid: Option<u32> },
    Cancelled,
    /// Ctrl+C: leave the prompt and the program.
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct KillPrompt {
    buffer: PidBuffer,
}

impl KillPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        self.buffer.as_str()
    }

    /// Apply one key. Returns the outcome once the prompt leaves `Prompting`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(PromptOutcome::Quit);
        }
        match key.code {
            KeyCode::Esc => Some(PromptOutcome::Cancelled),
            KeyCode::Enter => Some(PromptOutcome::Confirmed {
                pid: self.buffer.pid(),
            }),
            KeyCode::Backspace | KeyCode::Delete => {
                self.buffer.pop();
                None
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                None
            }
            _ => None,
        }
    }
}

/// Run the prompt until it resolves, calling `redraw` before every read.
pub async fn run_kill_prompt<I, F>(input: &mut I, mut redraw: F) -> Result<PromptOutcome>
where
    I: InputSource,
    F: FnMut(&KillPrompt) -> Result<()>,
{
    let mut prompt = KillPrompt::new();
    loop {
        redraw(&prompt)?;
        if let Some(Event::Key(key)) = input.next_event(None).await?
            && let Some(outcome) = prompt.handle_key(key)
        {
            return Ok(outcome);
        }
    }
}

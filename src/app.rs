use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::prompt::PromptOutcome;
use crate::system::ProcRoot;
use crate::system::collector::Collector;
use crate::system::kill::{KillResult, Terminator};
use crate::system::snapshot::SystemSnapshot;
use crate::system::sort::{SortMode, sort_rows};
use crate::system::users::UserTable;
use crate::ui::theme::Theme;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub sort_cpu: KeyCode,
    pub sort_memory: KeyCode,
    pub sort_pid: KeyCode,
    pub kill: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            sort_cpu: parse_key(&kb.sort_cpu).unwrap_or(KeyCode::Char('c')),
            sort_memory: parse_key(&kb.sort_memory).unwrap_or(KeyCode::Char('m')),
            sort_pid: parse_key(&kb.sort_pid).unwrap_or(KeyCode::Char('p')),
            kill: parse_key(&kb.kill).unwrap_or(KeyCode::Char('k')),
        }
    }

    /// (key label, description) pairs for the status bar.
    pub fn hints(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.sort_cpu), "CPU"),
            (key_label(self.sort_memory), "Mem"),
            (key_label(self.sort_pid), "PID"),
            (key_label(self.kill), "Kill"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

/// Everything a tick reads or mutates.
pub struct App {
    pub running: bool,
    pub collector: Collector,
    pub snapshot: SystemSnapshot,
    pub sort_mode: SortMode,
    pub tick_rate: Duration,
    pub warmup: Duration,
    pub status_message: Option<(String, Instant)>,
    pub keybinds: ResolvedKeybinds,
    pub theme: Theme,
}

impl App {
    pub fn new(config: Config, users: UserTable) -> Self {
        let collector = Collector::new(ProcRoot::new(&config.general.proc_root), users);
        Self::with_collector(config, collector)
    }

    pub fn with_collector(config: Config, collector: Collector) -> Self {
        App {
            running: true,
            collector,
            snapshot: SystemSnapshot::default(),
            sort_mode: SortMode::from_str_config(&config.general.default_sort),
            tick_rate: Duration::from_millis(config.general.refresh_rate_ms),
            warmup: Duration::from_millis(config.general.warmup_ms),
            status_message: None,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            theme: Theme::from_config(&config.colors.theme),
        }
    }

    /// One tick: sample, derive, sort.
    pub fn refresh_data(&mut self) {
        let mut snapshot = self.collector.refresh();
        sort_rows(&mut snapshot.processes, self.sort_mode);
        self.snapshot = snapshot;

        if let Some((_, created)) = &self.status_message
            && created.elapsed() >= STATUS_MESSAGE_TTL
        {
            self.status_message = None;
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        let code = key.code;
        let kb = &self.keybinds;
        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.sort_cpu {
            return Action::SortBy(SortMode::Cpu);
        }
        if code == kb.sort_memory {
            return Action::SortBy(SortMode::Memory);
        }
        if code == kb.sort_pid {
            return Action::SortBy(SortMode::Pid);
        }
        if code == kb.kill {
            return Action::OpenKillPrompt;
        }

        Action::None
    }

    /// Apply an action that needs no input of its own. The kill prompt is
    /// driven by the scheduler since it has to read keys.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SortBy(mode) => self.sort_mode = mode,
            Action::OpenKillPrompt | Action::None => {}
        }
    }

    pub fn finish_kill_prompt(&mut self, outcome: PromptOutcome, terminator: &mut impl Terminator) {
        match outcome {
            PromptOutcome::Confirmed { pid: Some(pid) } => {
                let result = terminator.terminate(pid);
                self.set_kill_status(result);
            }
            PromptOutcome::Confirmed { pid: None } => {
                tracing::debug!("kill prompt confirmed without a valid pid");
            }
            PromptOutcome::Cancelled => {
                tracing::debug!("kill prompt cancelled");
            }
            PromptOutcome::Quit => self.running = false,
        }
    }

    fn set_kill_status(&mut self, result: KillResult) {
        let msg = result.message();
        if result.is_success() {
            tracing::info!(%msg, "termination requested");
        } else {
            tracing::warn!(%msg, "termination request rejected");
        }
        self.status_message = Some((msg, Instant::now()));
    }
}

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32, &'static str),
    Failed(u32, String),
    NotFound(u32),
}

impl KillResult {
    pub fn message(&self) -> String {
        match self {
            KillResult::Success(pid, signal) => format!("Sent {signal} to PID {pid}"),
            KillResult::Failed(_, err) => err.clone(),
            KillResult::NotFound(pid) => format!("Process {pid} not found"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, KillResult::Success(..))
    }
}

/// Sends termination requests. The kill prompt talks to this seam only.
pub trait Terminator {
    fn terminate(&mut self, pid: u32) -> KillResult;
}

/// Delivers SIGTERM through sysinfo.
pub struct SignalTerminator {
    sys: System,
}

impl SignalTerminator {
    pub fn new() -> Self {
        SignalTerminator { sys: System::new() }
    }
}

impl Default for SignalTerminator {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminator for SignalTerminator {
    fn terminate(&mut self, pid: u32) -> KillResult {
        let target = Pid::from_u32(pid);
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[target]),
            true,
            ProcessRefreshKind::nothing(),
        );
        kill_process(&self.sys, pid, Signal::Term)
    }
}

/// Records requested pids instead of signalling anything.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingTerminator {
    pub sent: Vec<u32>,
}

#[cfg(test)]
impl Terminator for RecordingTerminator {
    fn terminate(&mut self, pid: u32) -> KillResult {
        self.sent.push(pid);
        KillResult::Success(pid, "SIGTERM")
    }
}

pub fn kill_process(sys: &System, pid: u32, signal: Signal) -> KillResult {
    let sysinfo_pid = Pid::from_u32(pid);
    match sys.process(sysinfo_pid) {
        Some(process) => {
            let signal_name = match signal {
                Signal::Term => "SIGTERM",
                Signal::Kill => "SIGKILL",
                _ => "signal",
            };
            match process.kill_with(signal) {
                Some(true) => KillResult::Success(pid, signal_name),
                Some(false) => KillResult::Failed(
                    pid,
                    format!("Failed to send {signal_name} to PID {pid} (permission denied?)"),
                ),
                None => KillResult::Failed(pid, format!("{signal_name} is not supported here")),
            }
        }
        None => KillResult::NotFound(pid),
    }
}

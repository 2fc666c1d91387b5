use super::ProcRoot;
use super::delta::{PreviousSample, RawTick, derive};
use super::process::sample_processes;
use super::snapshot::SystemSnapshot;
use super::stats::{read_cpu_times, read_memory};
use super::users::UserTable;

/// Owns the state that persists between ticks: the proc root, the username
/// table and the previous tick's counters.
pub struct Collector {
    root: ProcRoot,
    users: UserTable,
    previous: PreviousSample,
}

impl Collector {
    pub fn new(root: ProcRoot, users: UserTable) -> Self {
        Collector {
            root,
            users,
            previous: PreviousSample::default(),
        }
    }

    /// Throwaway sample that gives the first real tick a baseline.
    pub fn prime(&mut self) {
        let cpu = read_cpu_times(&self.root);
        let processes = sample_processes(&self.root, &self.users);
        self.previous = PreviousSample::capture(cpu, &processes);
    }

    pub fn sample(&self) -> RawTick {
        RawTick {
            memory: read_memory(&self.root),
            cpu: read_cpu_times(&self.root),
            processes: sample_processes(&self.root, &self.users),
        }
    }

    pub fn refresh(&mut self) -> SystemSnapshot {
        let _refresh_span = tracing::debug_span!("collector.refresh").entered();

        let tick = self.sample();
        let (snapshot, next) = derive(&self.previous, tick);
        self.previous = next;

        tracing::debug!(
            processes = snapshot.processes.len(),
            cpu_usage = snapshot.cpu_usage_percent,
            "tick sampled"
        );
        snapshot
    }

    pub fn previous(&self) -> &PreviousSample {
        &self.previous
    }
}

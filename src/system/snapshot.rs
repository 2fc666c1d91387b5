use super::stats::MemorySnapshot;

/// One process as displayed: raw identity plus derived percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRow {
    pub pid: u32,
    pub user: String,
    pub name: String,
    pub rss_kib: u64,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemSnapshot {
    pub cpu_usage_percent: f64,
    pub memory: MemorySnapshot,
    pub processes: Vec<ProcessRow>,
}

impl SystemSnapshot {
    pub fn memory_usage_percent(&self) -> f64 {
        super::delta::memory_percent(self.memory.used_kib(), self.memory.total_kib)
    }
}

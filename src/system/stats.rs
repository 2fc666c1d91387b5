use super::ProcRoot;

/// Cumulative CPU tick counters from the aggregate `cpu` line of `/proc/stat`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTimes {
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }

    /// An all-zero sample means the counters source could not be read.
    pub fn is_zero(&self) -> bool {
        *self == CpuTimes::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total_kib: u64,
    pub available_kib: u64,
}

impl MemorySnapshot {
    pub fn used_kib(&self) -> u64 {
        self.total_kib.saturating_sub(self.available_kib)
    }
}

/// Parse a `cpu  user nice system idle iowait irq softirq steal ...` line.
///
/// Fields past the eighth (guest, guest_nice) are ignored. Missing or
/// malformed trailing fields read as zero, which matches older kernels that
/// report fewer columns.
pub fn parse_cpu_line(line: &str) -> Option<CpuTimes> {
    let mut fields = line.split_whitespace();
    let label = fields.next()?;
    if !label.starts_with("cpu") {
        return None;
    }

    let mut values = [0u64; 8];
    for slot in values.iter_mut() {
        match fields.next().and_then(|f| f.parse().ok()) {
            Some(v) => *slot = v,
            None => break,
        }
    }
    let [user, nice, system, idle, iowait, irq, softirq, steal] = values;

    Some(CpuTimes {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
        steal,
    })
}

pub fn parse_meminfo(contents: &str) -> MemorySnapshot {
    let mut memory = MemorySnapshot::default();
    for line in contents.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest
            .split_whitespace()
            .next()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);
        match key.trim() {
            "MemTotal" => memory.total_kib = value,
            "MemAvailable" => memory.available_kib = value,
            _ => {}
        }
    }
    memory
}

pub fn read_cpu_times(root: &ProcRoot) -> CpuTimes {
    let path = root.path().join("stat");
    match std::fs::read_to_string(&path) {
        Ok(contents) => contents
            .lines()
            .next()
            .and_then(parse_cpu_line)
            .unwrap_or_default(),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "cpu counters unavailable");
            CpuTimes::default()
        }
    }
}

pub fn read_memory(root: &ProcRoot) -> MemorySnapshot {
    let path = root.path().join("meminfo");
    match std::fs::read_to_string(&path) {
        Ok(contents) => parse_meminfo(&contents),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "memory info unavailable");
            MemorySnapshot::default()
        }
    }
}

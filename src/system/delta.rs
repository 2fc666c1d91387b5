//! Converts cumulative counters from two consecutive ticks into percentages.
//!
//! Every delta saturates at zero. A pid that is reused within one interval
//! is compared against its predecessor's counters and may read as 0% or as a
//! one-tick spike; this is not detected.

use std::collections::HashMap;

use super::process::ProcessSample;
use super::snapshot::{ProcessRow, SystemSnapshot};
use super::stats::{CpuTimes, MemorySnapshot};

/// Counters of exactly one prior tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviousSample {
    pub cpu: CpuTimes,
    pub process_times: HashMap<u32, (u64, u64)>,
}

impl PreviousSample {
    pub fn capture(cpu: CpuTimes, processes: &[ProcessSample]) -> Self {
        PreviousSample {
            cpu,
            process_times: processes
                .iter()
                .map(|p| (p.pid, (p.utime, p.stime)))
                .collect(),
        }
    }

    /// Previous utime + stime of `pid`, zero when it was not seen last tick.
    pub fn cpu_ticks(&self, pid: u32) -> u64 {
        self.process_times
            .get(&pid)
            .map(|(utime, stime)| utime + stime)
            .unwrap_or(0)
    }
}

/// Raw readings gathered during one tick.
#[derive(Clone, Debug, Default)]
pub struct RawTick {
    pub cpu: CpuTimes,
    pub memory: MemorySnapshot,
    pub processes: Vec<ProcessSample>,
}

/// Elapsed ticks between two CPU samples; zero if either side is unusable.
pub fn total_cpu_delta(previous: &CpuTimes, current: &CpuTimes) -> u64 {
    if previous.is_zero() || current.is_zero() {
        return 0;
    }
    current.total().saturating_sub(previous.total())
}

pub fn system_cpu_usage(previous: &CpuTimes, current: &CpuTimes) -> f64 {
    let total_delta = total_cpu_delta(previous, current);
    if total_delta == 0 {
        return 0.0;
    }
    let idle_delta = current.idle.saturating_sub(previous.idle).min(total_delta);
    100.0 * (total_delta - idle_delta) as f64 / total_delta as f64
}

pub fn process_cpu_percent(process_delta: u64, total_delta: u64) -> f64 {
    if total_delta == 0 {
        return 0.0;
    }
    100.0 * process_delta as f64 / total_delta as f64
}

pub fn memory_percent(rss_kib: u64, total_kib: u64) -> f64 {
    if total_kib == 0 {
        return 0.0;
    }
    100.0 * rss_kib as f64 / total_kib as f64
}

/// Derive this tick's snapshot and the store to use next tick.
///
/// Rows keep the sampler's order; sorting is a separate step.
pub fn derive(previous: &PreviousSample, tick: RawTick) -> (SystemSnapshot, PreviousSample) {
    let total_delta = total_cpu_delta(&previous.cpu, &tick.cpu);
    let next = PreviousSample::capture(tick.cpu, &tick.processes);

    let processes = tick
        .processes
        .into_iter()
        .map(|sample| {
            let process_delta = sample
                .cpu_ticks()
                .saturating_sub(previous.cpu_ticks(sample.pid));
            ProcessRow {
                cpu_percent: process_cpu_percent(process_delta, total_delta),
                mem_percent: memory_percent(sample.rss_kib, tick.memory.total_kib),
                pid: sample.pid,
                user: sample.user,
                name: sample.name,
                rss_kib: sample.rss_kib,
            }
        })
        .collect();

    let snapshot = SystemSnapshot {
        cpu_usage_percent: system_cpu_usage(&previous.cpu, &tick.cpu),
        memory: tick.memory,
        processes,
    };
    (snapshot, next)
}

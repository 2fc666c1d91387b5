use insta::assert_snapshot;
use sysmon::format::{format_header, format_row};
use sysmon::system::delta::{PreviousSample, RawTick, derive};
use sysmon::system::process::ProcessSample;
use sysmon::system::sort::{SortMode, sort_rows};
use sysmon::system::stats::{CpuTimes, MemorySnapshot};

fn sample(pid: u32, user: &str, name: &str, rss_kib: u64, utime: u64, stime: u64) -> ProcessSample {
    ProcessSample {
        pid,
        user: user.to_string(),
        name: name.to_string(),
        rss_kib,
        utime,
        stime,
    }
}

fn cpu(user: u64, idle: u64) -> CpuTimes {
    CpuTimes {
        user,
        idle,
        ..CpuTimes::default()
    }
}

fn render_table(mode: SortMode) -> String {
    let previous = PreviousSample::capture(
        cpu(100, 900),
        &[
            sample(1, "root", "systemd", 16_000, 10, 5),
            sample(42, "pg", "postgres", 400_000, 100, 50),
        ],
    );
    let tick = RawTick {
        cpu: cpu(300, 1700),
        memory: MemorySnapshot {
            total_kib: 8_000_000,
            available_kib: 6_000_000,
        },
        processes: vec![
            sample(1, "root", "systemd", 16_000, 20, 5),
            sample(42, "pg", "postgres", 400_000, 250, 100),
            // first seen this tick
            sample(900, "dev", "bash", 8_000, 3, 2),
        ],
    };

    let (mut snapshot, next) = derive(&previous, tick);
    assert_eq!(snapshot.cpu_usage_percent, 20.0);
    assert_eq!(next.process_times.len(), 3);

    sort_rows(&mut snapshot.processes, mode);
    let mut lines = vec![format_header(60)];
    lines.extend(snapshot.processes.iter().map(|row| format_row(row, 60)));
    lines.join("\n")
}

#[test]
fn table_sorted_by_cpu() {
    assert_snapshot!(render_table(SortMode::Cpu), @r"
    PID    USER         CPU%   MEM% COMMAND
    42     pg           20.0    5.0 postgres
    1      root          1.0    0.2 systemd
    900    dev           0.5    0.1 bash
    ");
}

#[test]
fn table_sorted_by_pid() {
    assert_snapshot!(render_table(SortMode::Pid), @r"
    PID    USER         CPU%   MEM% COMMAND
    1      root          1.0    0.2 systemd
    42     pg           20.0    5.0 postgres
    900    dev           0.5    0.1 bash
    ");
}

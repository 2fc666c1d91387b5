use super::ProcRoot;
use super::users::UserTable;

/// Raw per-process reading for one tick. Percentages are derived later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSample {
    pub pid: u32,
    pub user: String,
    pub name: String,
    pub rss_kib: u64,
    pub utime: u64,
    pub stime: u64,
}

impl ProcessSample {
    pub fn cpu_ticks(&self) -> u64 {
        self.utime + self.stime
    }
}

/// Classification of a proc-root directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PidEntry {
    Pid(u32),
    NotPid,
}

impl PidEntry {
    pub fn classify(name: &str) -> Self {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
            return PidEntry::NotPid;
        }
        match name.parse() {
            Ok(pid) => PidEntry::Pid(pid),
            Err(_) => PidEntry::NotPid,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatTimes {
    pub utime: u64,
    pub stime: u64,
}

/// Extract utime and stime (fields 14 and 15) from a `/proc/<pid>/stat` line.
///
/// The command name in field 2 is wrapped in parentheses and may itself
/// contain spaces or `)`, so counting starts after the last `)` on the line.
pub fn parse_stat_times(line: &str) -> Option<StatTimes> {
    let after_comm = line.rfind(')')? + 1;
    // state(0) ppid(1) pgrp(2) session(3) tty_nr(4) tpgid(5) flags(6)
    // minflt(7) cminflt(8) majflt(9) cmajflt(10) utime(11) stime(12)
    let mut fields = line[after_comm..].split_whitespace().skip(11);
    let utime = fields.next()?.parse().ok()?;
    let stime = fields.next()?.parse().ok()?;
    Some(StatTimes { utime, stime })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusFields {
    pub name: Option<String>,
    pub uid: Option<u32>,
    pub rss_kib: u64,
}

pub fn parse_status(contents: &str) -> StatusFields {
    let mut status = StatusFields::default();
    for line in contents.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key {
            "Name" => {
                let name = value.trim();
                if !name.is_empty() {
                    status.name = Some(name.to_string());
                }
            }
            // Real, effective, saved and filesystem uid; the first is the owner.
            "Uid" => {
                status.uid = value.split_whitespace().next().and_then(|v| v.parse().ok());
            }
            "VmRSS" => {
                status.rss_kib = value
                    .split_whitespace()
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
            }
            _ => {}
        }
    }
    status
}

/// Read one process. `None` means it exited between enumeration and read.
pub fn sample_process(root: &ProcRoot, pid: u32, users: &UserTable) -> Option<ProcessSample> {
    // Names are arbitrary bytes; only a failed read means the process is gone.
    let stat = std::fs::read(root.pid_file(pid, "stat")).ok()?;
    let times = parse_stat_times(&String::from_utf8_lossy(&stat)).unwrap_or_default();

    let status = std::fs::read(root.pid_file(pid, "status")).ok()?;
    let status = parse_status(&String::from_utf8_lossy(&status));
    let name = status.name?;

    Some(ProcessSample {
        pid,
        user: users.display_name(status.uid),
        name,
        rss_kib: status.rss_kib,
        utime: times.utime,
        stime: times.stime,
    })
}

/// Sample every process under the proc root, in directory order.
pub fn sample_processes(root: &ProcRoot, users: &UserTable) -> Vec<ProcessSample> {
    let entries = match std::fs::read_dir(root.path()) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(root = %root.path().display(), error = %err, "process directory unavailable");
            return Vec::new();
        }
    };

    let mut samples = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let PidEntry::Pid(pid) = PidEntry::classify(name) else {
            continue;
        };
        if let Some(sample) = sample_process(root, pid, users) {
            samples.push(sample);
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_line(comm: &str, utime: u64, stime: u64) -> String {
        format!("42 ({comm}) S 1 42 42 0 -1 4194560 1200 0 3 0 {utime} {stime} 0 0 20 0 1 0 555 0 0")
    }

    #[test]
    fn classify_accepts_only_digit_names() {
        assert_eq!(PidEntry::classify("1"), PidEntry::Pid(1));
        assert_eq!(PidEntry::classify("31337"), PidEntry::Pid(31337));
        assert_eq!(PidEntry::classify("self"), PidEntry::NotPid);
        assert_eq!(PidEntry::classify("thread-self"), PidEntry::NotPid);
        assert_eq!(PidEntry::classify("+5"), PidEntry::NotPid);
        assert_eq!(PidEntry::classify("-1"), PidEntry::NotPid);
        assert_eq!(PidEntry::classify(""), PidEntry::NotPid);
        assert_eq!(PidEntry::classify("99999999999"), PidEntry::NotPid);
    }

    #[test]
    fn stat_times_plain_name() {
        let t = parse_stat_times(&stat_line("bash", 120, 30)).unwrap();
        assert_eq!(t, StatTimes { utime: 120, stime: 30 });
    }

    #[test]
    fn stat_times_survive_adversarial_names() {
        for comm in [
            "Web Content",
            "a) b c d e f g",
            "((((",
            ") ) ) )",
            "x 1 2 3 4 5 6 7 8 9 10 11 12 13",
            "",
        ] {
            let t = parse_stat_times(&stat_line(comm, 777, 88))
                .unwrap_or_else(|| panic!("failed for comm {comm:?}"));
            assert_eq!(t, StatTimes { utime: 777, stime: 88 }, "comm {comm:?}");
        }
    }

    #[test]
    fn stat_times_truncated_line() {
        assert!(parse_stat_times("42 (bash) S 1 42").is_none());
        assert!(parse_stat_times("garbage without parens").is_none());
    }

    #[test]
    fn status_fields_parsed() {
        let contents = "Name:\tkworker/0:1 \n\
                        Umask:\t0022\n\
                        State:\tS (sleeping)\n\
                        Uid:\t1000\t1000\t1000\t1000\n\
                        VmRSS:\t  100000 kB\n";
        let status = parse_status(contents);
        assert_eq!(status.name.as_deref(), Some("kworker/0:1"));
        assert_eq!(status.uid, Some(1000));
        assert_eq!(status.rss_kib, 100_000);
    }

    #[test]
    fn status_without_rss_defaults_to_zero() {
        let status = parse_status("Name:\tkthreadd\nUid:\t0\t0\t0\t0\n");
        assert_eq!(status.rss_kib, 0);
        assert_eq!(status.uid, Some(0));
    }

    #[test]
    fn status_with_blank_name_has_no_name() {
        let status = parse_status("Name:\t   \nUid:\t0\t0\t0\t0\n");
        assert!(status.name.is_none());
    }

    #[test]
    fn current_process_is_sampled() {
        let root = ProcRoot::default();
        if !root.path().join("self").exists() {
            return;
        }
        let users = UserTable::default();
        let samples = sample_processes(&root, &users);
        let me = std::process::id();
        assert!(samples.iter().any(|s| s.pid == me));
    }
}

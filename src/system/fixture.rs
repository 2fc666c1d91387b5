//! Throwaway proc trees on disk for sampler tests.

use std::fs;
use std::path::PathBuf;

use super::ProcRoot;

pub struct FakeProc {
    dir: PathBuf,
}

impl FakeProc {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("sysmon_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        FakeProc { dir }
    }

    pub fn root(&self) -> ProcRoot {
        ProcRoot::new(&self.dir)
    }

    pub fn write_stat(&self, cpu_line: &str) {
        fs::write(self.dir.join("stat"), format!("{cpu_line}\ncpu0 1 1 1 1 0 0 0 0\nctxt 1\n")).unwrap();
    }

    pub fn write_meminfo(&self, total_kib: u64, available_kib: u64) {
        fs::write(
            self.dir.join("meminfo"),
            format!(
                "MemTotal:       {total_kib} kB\nMemFree:        1 kB\nMemAvailable:   {available_kib} kB\n"
            ),
        )
        .unwrap();
    }

    pub fn add_process(&self, pid: u32, name: &str, uid: u32, rss_kib: u64, utime: u64, stime: u64) {
        self.add_process_bytes(pid, name.as_bytes(), uid, rss_kib, utime, stime);
    }

    /// Like [`FakeProc::add_process`] but with a raw, possibly non-UTF-8 name.
    pub fn add_process_bytes(&self, pid: u32, name: &[u8], uid: u32, rss_kib: u64, utime: u64, stime: u64) {
        let dir = self.dir.join(pid.to_string());
        fs::create_dir_all(&dir).unwrap();

        let mut stat = format!("{pid} (").into_bytes();
        stat.extend_from_slice(name);
        stat.extend_from_slice(
            format!(") S 1 {pid} {pid} 0 -1 4194304 100 0 0 0 {utime} {stime} 0 0 20 0 1 0 100 0 0\n").as_bytes(),
        );
        fs::write(dir.join("stat"), stat).unwrap();

        let mut status = b"Name:\t".to_vec();
        status.extend_from_slice(name);
        status.extend_from_slice(
            format!("\nState:\tS (sleeping)\nUid:\t{uid}\t{uid}\t{uid}\t{uid}\nVmRSS:\t{rss_kib} kB\n").as_bytes(),
        );
        fs::write(dir.join("status"), status).unwrap();
    }

    /// A non-pid directory that looks like a process.
    pub fn add_named_dir(&self, entry: &str, name: &str) {
        let dir = self.dir.join(entry);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("stat"), format!("1 ({name}) S 0 0 0 0 0 0 0 0 0 0 99 99 0 0\n")).unwrap();
        fs::write(dir.join("status"), format!("Name:\t{name}\nUid:\t0\t0\t0\t0\n")).unwrap();
    }

    pub fn add_empty_pid_dir(&self, pid: u32) {
        fs::create_dir_all(self.dir.join(pid.to_string())).unwrap();
    }
}

impl Drop for FakeProc {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

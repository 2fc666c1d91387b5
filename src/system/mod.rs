pub mod collector;
pub mod delta;
#[cfg(test)]
pub mod fixture;
pub mod kill;
pub mod process;
pub mod snapshot;
pub mod sort;
pub mod stats;
pub mod users;

use std::path::{Path, PathBuf};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Mount point of the proc pseudo-filesystem that all samplers read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcRoot(PathBuf);

impl ProcRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProcRoot(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn pid_file(&self, pid: u32, name: &str) -> PathBuf {
        self.0.join(pid.to_string()).join(name)
    }
}

impl Default for ProcRoot {
    fn default() -> Self {
        ProcRoot::new(DEFAULT_PROC_ROOT)
    }
}

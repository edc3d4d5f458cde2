//! Common test utilities for benchpost integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temp directory holding result-table fixtures
#[allow(dead_code)]
pub struct TestDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDir {
    /// Create a new test directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the directory, creating parents as needed
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the directory
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Path of a file under the directory (not created)
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// A harness-style result table with padded fields and separator lines,
/// as the benchmark harness prints it
#[allow(dead_code)]
pub fn harness_table(rows: &[(&str, u64, &str, &str, &str)]) -> String {
    let mut out = String::new();
    out.push_str(
        " ROUTINE IMPLEMENTATION |  BUF SIZE B |  BW AVG GiB/s | BW STDEV GiB/s |     SPEEDUP\n",
    );
    for (implementation, buf, avg, stdev, speedup) in rows {
        out.push_str(&"-".repeat(85));
        out.push('\n');
        out.push_str(&format!(
            "{:>23} | {:>11} | {:>13} | {:>14} | {:>11}\n",
            implementation, buf, avg, stdev, speedup
        ));
    }
    out
}

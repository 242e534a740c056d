//! Helpers shared by the integration tests.

use std::path::PathBuf;

/// A SQLite file in the temp directory, removed when dropped.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("fabstatus-{prefix}-{}.db", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

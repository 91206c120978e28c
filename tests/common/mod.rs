use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated data directory for each test.
pub fn setup_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let dir = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    dir
}

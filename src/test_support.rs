//! Helpers shared by unit tests

use std::sync::{Mutex, MutexGuard};

use crate::config::GitConfig;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or change the process working directory
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Git settings that commit without relying on the machine's identity
pub fn test_git_config() -> GitConfig {
    GitConfig {
        author_name: Some("Kickoff Test".to_string()),
        author_email: Some("kickoff@example.com".to_string()),
        ..GitConfig::default()
    }
}

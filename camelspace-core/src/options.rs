use serde::{Deserialize, Serialize};

/// Settings for a single walk. Built once at startup and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    /// Descend into subdirectories
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Report intended renames without touching the filesystem
    #[serde(default = "default_true")]
    pub pretend: bool,

    /// Also report files that need no rename
    #[serde(default)]
    pub verbose: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            pretend: true,
            verbose: false,
        }
    }
}

fn default_true() -> bool {
    true
}

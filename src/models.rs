use serde::Serialize;
use std::time::SystemTime;

pub const SEC_MINUTE: i64 = 60;
pub const SEC_HOUR: i64 = 60 * SEC_MINUTE;
pub const SEC_DAY: i64 = 24 * SEC_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Minutes => SEC_MINUTE,
            TimeUnit::Hours => SEC_HOUR,
            TimeUnit::Days => SEC_DAY,
        }
    }

    pub fn flag(self) -> char {
        match self {
            TimeUnit::Minutes => 'm',
            TimeUnit::Hours => 'h',
            TimeUnit::Days => 'd',
        }
    }
}

/// Minimum age, in whole seconds, a file's access time must exceed to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgeThreshold(i64);

impl AgeThreshold {
    /// Returns `None` for negative values.
    pub fn from_secs(secs: i64) -> Option<Self> {
        (secs >= 0).then_some(Self(secs))
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Fixed for the whole run: the threshold and the instant every age is measured from.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub threshold: AgeThreshold,
    pub reference: SystemTime,
    pub format: OutputFormat,
}

/// One `--json` output record. Non-UTF-8 path bytes are replaced with U+FFFD.
#[derive(Debug, Serialize)]
pub struct StaleFile {
    pub path: String,
    pub accessed: String,
    pub age_secs: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files: u64,
    pub directories: u64,
    pub reported: u64,
    pub errors: u64,
}

impl std::ops::AddAssign for WalkStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.directories += other.directories;
        self.reported += other.reported;
        self.errors += other.errors;
    }
}

use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::AgeThreshold;

/// Access time from a non-dereferencing stat, falling back to mtime where the
/// platform does not record atime.
pub fn last_access(metadata: &Metadata) -> Option<SystemTime> {
    metadata.accessed().or_else(|_| metadata.modified()).ok()
}

/// Whole seconds since the epoch, floored (so pre-epoch times stay ordered).
pub fn unix_seconds(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                (-secs).saturating_sub(1)
            } else {
                -secs
            }
        }
    }
}

/// Seconds elapsed between `accessed` and `reference`. Negative when the
/// access time lies in the future.
pub fn age_seconds(reference: SystemTime, accessed: SystemTime) -> i64 {
    unix_seconds(reference).saturating_sub(unix_seconds(accessed))
}

/// Strictly older than the threshold: a file exactly at the boundary is not stale.
pub fn is_stale(reference: SystemTime, accessed: SystemTime, threshold: AgeThreshold) -> bool {
    age_seconds(reference, accessed) > threshold.as_secs()
}

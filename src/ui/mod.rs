use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::analyzer::{age_seconds, is_stale};
use crate::models::{OutputFormat, ScanConfig, StaleFile};

// ctime(3) layout, e.g. "Wed Jun 30 21:49:08 1993"
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn ctime_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(CTIME_FORMAT).to_string()
}

/// Local time in ctime layout, without the trailing newline.
pub fn format_ctime(t: SystemTime) -> String {
    ctime_string(&DateTime::<Local>::from(t))
}

pub fn format_rfc3339(t: SystemTime) -> String {
    if t >= UNIX_EPOCH {
        humantime::format_rfc3339_seconds(t).to_string()
    } else {
        // humantime only handles post-epoch instants
        DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

pub fn plain_line(path: &Path, accessed: SystemTime) -> String {
    format!("{} \t {}\n", path.display(), format_ctime(accessed))
}

pub fn json_line(path: &Path, accessed: SystemTime, age_secs: i64) -> Result<String> {
    let record = StaleFile {
        path: path.to_string_lossy().into_owned(),
        accessed: format_rfc3339(accessed),
        age_secs,
    };
    let mut line = serde_json::to_string(&record).context("Failed to serialize output record")?;
    line.push('\n');
    Ok(line)
}

/// True when the reader of our output has gone away, e.g. `rummage -d 0 / | head`.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Decides whether a visited file is old enough and, if so, writes its line.
pub struct Reporter<'a, W: Write> {
    out: W,
    config: &'a ScanConfig,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: W, config: &'a ScanConfig) -> Self {
        Self { out, config }
    }

    /// Returns true when a line was written for `path`.
    pub fn report(&mut self, path: &Path, accessed: SystemTime) -> Result<bool> {
        if !is_stale(self.config.reference, accessed, self.config.threshold) {
            log::trace!("{} is recent enough, skipped", path.display());
            return Ok(false);
        }

        let line = match self.config.format {
            OutputFormat::Plain => plain_line(path, accessed),
            OutputFormat::Json => {
                json_line(path, accessed, age_seconds(self.config.reference, accessed))?
            }
        };
        self.out
            .write_all(line.as_bytes())
            .with_context(|| format!("Failed to write result for {}", path.display()))?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

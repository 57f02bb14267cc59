use anyhow::Result;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::cli::Cli;
use crate::config::resolve_args;
use crate::fs_scanner::Walker;
use crate::models::{OutputFormat, ScanConfig, WalkStats};
use crate::ui::Reporter;

const HERE: &str = ".";

pub fn run(cli: &Cli) -> Result<WalkStats> {
    // Every age in this run is measured from this instant.
    let reference = SystemTime::now();

    let (threshold, roots) = resolve_args(
        cli.minutes.as_deref(),
        cli.hours.as_deref(),
        cli.days.as_deref(),
        &cli.paths,
    )?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    let config = ScanConfig::new(threshold, reference, format);
    log::debug!("scan config: {config:?}");

    scan(&config, &roots, io::stdout().lock(), io::stderr().lock())
}

/// Walks every root in order, or the current directory when none are given.
pub fn scan<O: Write, E: Write>(
    config: &ScanConfig,
    roots: &[PathBuf],
    out: O,
    diagnostics: E,
) -> Result<WalkStats> {
    let roots = if roots.is_empty() {
        vec![PathBuf::from(HERE)]
    } else {
        roots.to_vec()
    };

    let reporter = Reporter::new(BufWriter::new(out), config);
    let mut walker = Walker::new(reporter, diagnostics);
    let mut total = WalkStats::default();

    for root in &roots {
        log::debug!("scanning {}", root.display());
        let stats = walker.walk(root)?;
        log::debug!("{}: {stats:?}", root.display());
        total += stats;
    }
    walker.finish()?;

    log::debug!(
        "scanned {} files in {} directories, {} stale, {} unreadable",
        total.files,
        total.directories,
        total.reported,
        total.errors
    );
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeThreshold, SEC_DAY};
    use filetime::{set_file_atime, FileTime};
    use std::fs;
    use std::time::Duration;

    #[test]
    fn walks_each_root_and_keeps_going_after_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let now = SystemTime::now();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        for file in [a.join("one"), b.join("two")] {
            fs::write(&file, "x").unwrap();
            let old = FileTime::from_system_time(now - Duration::from_secs(3 * SEC_DAY as u64));
            set_file_atime(&file, old).unwrap();
        }
        let missing = tmp.path().join("missing");

        let config = ScanConfig::new(
            AgeThreshold::from_secs(SEC_DAY).unwrap(),
            now,
            OutputFormat::Plain,
        );
        let mut out = Vec::new();
        let mut err = Vec::new();
        let stats = scan(&config, &[a.clone(), missing.clone(), b.clone()], &mut out, &mut err)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("{} \t ", a.join("one").display())));
        assert!(lines[1].starts_with(&format!("{} \t ", b.join("two").display())));
        assert_eq!(String::from_utf8(err).unwrap(), format!("{}\n", missing.display()));
        assert_eq!(stats.reported, 2);
        assert_eq!(stats.errors, 1);
    }
}

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

use crate::analyzer::last_access;
use crate::models::WalkStats;
use crate::ui::Reporter;

/// Depth-first, pre-order walk that never follows symbolic links. Every
/// non-directory entry goes to the reporter; paths that cannot be read are
/// written one per line to `diagnostics` and the walk carries on.
pub struct Walker<'a, O: Write, E: Write> {
    reporter: Reporter<'a, O>,
    diagnostics: E,
}

impl<'a, O: Write, E: Write> Walker<'a, O, E> {
    pub fn new(reporter: Reporter<'a, O>, diagnostics: E) -> Self {
        Self {
            reporter,
            diagnostics,
        }
    }

    pub fn walk(&mut self, root: &Path) -> Result<WalkStats> {
        let mut stats = WalkStats::default();

        // A root that is itself a file (or a symlink) comes back as the only entry.
        for entry in WalkDir::new(root)
            .follow_links(false)
            .follow_root_links(false)
        {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    // Unstatable entries and directories that cannot be listed
                    stats.errors += 1;
                    self.path_error(err.path().unwrap_or(root), &err)?;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                stats.directories += 1;
                log::trace!("descending into {}", entry.path().display());
                continue;
            }

            stats.files += 1;
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    stats.errors += 1;
                    self.path_error(entry.path(), &err)?;
                    continue;
                }
            };

            let Some(accessed) = last_access(&metadata) else {
                stats.errors += 1;
                self.path_error(entry.path(), &"no access time recorded")?;
                continue;
            };

            if self.reporter.report(entry.path(), accessed)? {
                stats.reported += 1;
            }
        }

        Ok(stats)
    }

    fn path_error(&mut self, path: &Path, cause: &dyn Display) -> Result<()> {
        log::debug!("cannot read {}: {cause}", path.display());
        writeln!(self.diagnostics, "{}", path.display())
            .with_context(|| format!("Failed to report unreadable path {}", path.display()))
    }

    pub fn finish(mut self) -> Result<(O, E)> {
        self.reporter.flush()?;
        self.diagnostics.flush().context("Failed to flush diagnostics")?;
        Ok((self.reporter.into_inner(), self.diagnostics))
    }
}

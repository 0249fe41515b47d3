use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::model::draft::DraftSnapshot;

/// Fixed key the in-progress request is cached under.
pub const DRAFT_KEY: &str = "ems-timeoff-draft";

/// Flat string-keyed JSON cache persisted to a single local file.
/// Drafts are best-effort: every operation swallows I/O and
/// serialization errors, because a lost draft must never block the
/// form. Concurrent writers are not coordinated; last write wins.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist a snapshot under [`DRAFT_KEY`], replacing any previous one.
    pub fn save(&self, snapshot: &DraftSnapshot) {
        if let Err(e) = self.try_save(snapshot) {
            debug!(error = %e, path = %self.path.display(), "draft save skipped");
        }
    }

    /// Read the cached snapshot back, if one exists and still parses.
    pub fn load(&self) -> Option<DraftSnapshot> {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, path = %self.path.display(), "draft load skipped");
                None
            }
        }
    }

    /// Drop the cached snapshot. Called after a delivered submission.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            debug!(error = %e, path = %self.path.display(), "draft clear skipped");
        }
    }

    fn try_save(&self, snapshot: &DraftSnapshot) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(DRAFT_KEY.to_string(), serde_json::to_value(snapshot)?);
        self.write_entries(&entries)
    }

    fn try_load(&self) -> Result<Option<DraftSnapshot>> {
        match self.read_entries().remove(DRAFT_KEY) {
            Some(value) => Ok(Some(
                serde_json::from_value(value).context("stored draft does not parse")?,
            )),
            None => Ok(None),
        }
    }

    fn try_clear(&self) -> Result<()> {
        let mut entries = self.read_entries();
        if entries.remove(DRAFT_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }

    /// A missing or corrupt cache file reads as empty.
    fn read_entries(&self) -> BTreeMap<String, Value> {
        fs::read(&self.path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    /// Write through a temp file + rename so a crash mid-write cannot
    /// leave a truncated cache behind.
    fn write_entries(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)
            .with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

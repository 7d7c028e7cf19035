//! Data store - read-only flat files produced by the ingest pipeline
//!
//! Layout under `DATA_DIR`:
//! - `attacks.json`: classified incident records
//! - `threat_level.json`: threat bundle
//! - `executive_summary.json`: optional briefing
//! - `summary_archive/index.json`: past briefings
//! - `feeds/<region>.json`: raw regional articles
//!
//! A missing or malformed file never fails the load; it degrades to
//! empty data and a warning.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use incident_core::{IncidentRecord, ThreatBundle};

use crate::models::{ArchiveEntry, ExecutiveSummary};

const ATTACKS_FILE: &str = "attacks.json";
const THREAT_FILE: &str = "threat_level.json";
const SUMMARY_FILE: &str = "executive_summary.json";
const ARCHIVE_INDEX: &str = "summary_archive/index.json";
const FEEDS_DIR: &str = "feeds";

/// Everything loaded from disk at one point in time
#[derive(Debug, Default)]
pub struct DataSnapshot {
    /// Classified records in file order, deduplicated by id
    pub attacks: Vec<Arc<IncidentRecord>>,
    pub threat: Option<ThreatBundle>,
    pub summary: Option<ExecutiveSummary>,
    pub archive: Vec<ArchiveEntry>,
    pub feeds: BTreeMap<String, Vec<IncidentRecord>>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl DataSnapshot {
    pub fn load(data_dir: &Path) -> Self {
        let attacks = load_json::<Vec<IncidentRecord>>(&data_dir.join(ATTACKS_FILE))
            .map(prepare_attacks)
            .unwrap_or_default();

        let snapshot = Self {
            attacks,
            threat: load_json(&data_dir.join(THREAT_FILE)),
            summary: load_json(&data_dir.join(SUMMARY_FILE)),
            archive: load_json(&data_dir.join(ARCHIVE_INDEX)).unwrap_or_default(),
            feeds: load_feeds(&data_dir.join(FEEDS_DIR)),
            loaded_at: Some(Utc::now()),
        };

        tracing::info!(
            "Loaded {} attacks, {} feeds, threat={}, summary={}, archive={}",
            snapshot.attacks.len(),
            snapshot.feeds.len(),
            snapshot.threat.is_some(),
            snapshot.summary.is_some(),
            snapshot.archive.len()
        );
        snapshot
    }
}

/// Shared handle; readers clone the current `Arc` and never block a reload
#[derive(Debug)]
pub struct DataStore {
    data_dir: PathBuf,
    snapshot: RwLock<Arc<DataSnapshot>>,
}

impl DataStore {
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let snapshot = DataSnapshot::load(&data_dir);
        Self {
            data_dir,
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn snapshot(&self) -> Arc<DataSnapshot> {
        self.snapshot.read().clone()
    }

    /// Re-read every file and swap the snapshot in one step
    pub fn reload(&self) -> Arc<DataSnapshot> {
        let fresh = Arc::new(DataSnapshot::load(&self.data_dir));
        *self.snapshot.write() = fresh.clone();
        fresh
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Malformed JSON in {}: {}", path.display(), e);
            None
        }
    }
}

/// Drop unclassified records and repeated ids, keep file order
fn prepare_attacks(records: Vec<IncidentRecord>) -> Vec<Arc<IncidentRecord>> {
    let mut seen = HashSet::new();
    let mut unclassified = 0usize;

    let attacks: Vec<Arc<IncidentRecord>> = records
        .into_iter()
        .filter(|r| {
            if r.classification.is_none() {
                unclassified += 1;
                return false;
            }
            true
        })
        .filter(|r| {
            let fresh = seen.insert(r.id.clone());
            if !fresh {
                tracing::warn!("Duplicate incident id {} dropped", r.id);
            }
            fresh
        })
        .map(|r| Arc::new(r.sanitized()))
        .collect();

    if unclassified > 0 {
        tracing::debug!("Skipped {} unclassified records", unclassified);
    }
    attacks
}

fn load_feeds(dir: &Path) -> BTreeMap<String, Vec<IncidentRecord>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list feeds in {}: {}", dir.display(), e);
            return BTreeMap::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| {
            let region = path.file_stem()?.to_str()?.to_string();
            let articles = load_json(&path)?;
            Some((region, articles))
        })
        .collect()
}

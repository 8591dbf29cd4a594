//! On-disk artifact storage: uploads, chart images and generated reports.
//!
//! Every stored file is named by a server-generated UUID; client-supplied
//! filenames never reach a path. Files are append-only and expire through
//! the TTL sweeper.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;

pub const CHART_EXTENSION: &str = "svg";
pub const REPORT_EXTENSION: &str = "pdf";
const UPLOAD_EXTENSION: &str = "pdf";

#[derive(Debug, Clone)]
pub struct Storage {
    uploads: PathBuf,
    charts: PathBuf,
    reports: PathBuf,
}

impl Storage {
    /// Creates the three artifact directories under `root` if they do not exist.
    pub async fn init(root: &Path) -> Result<Self> {
        let storage = Storage {
            uploads: root.join("uploads"),
            charts: root.join("charts"),
            reports: root.join("reports"),
        };
        for dir in storage.dirs() {
            tokio::fs::create_dir_all(dir).await?;
        }
        info!("Artifact storage ready at {}", root.display());
        Ok(storage)
    }

    pub fn charts_dir(&self) -> &Path {
        &self.charts
    }

    fn dirs(&self) -> [&Path; 3] {
        [&self.uploads, &self.charts, &self.reports]
    }

    /// Persists a raw upload under a fresh UUID and returns that id.
    pub async fn save_upload(&self, document: &[u8]) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let path = self.uploads.join(format!("{id}.{UPLOAD_EXTENSION}"));
        tokio::fs::write(&path, document).await?;
        debug!("Stored upload {} ({} bytes)", path.display(), document.len());
        Ok(id)
    }

    /// Reserves a unique chart filename; returns `(filename, full path)`.
    fn new_chart(&self) -> (String, PathBuf) {
        let name = format!("{}.{CHART_EXTENSION}", Uuid::new_v4());
        let path = self.charts.join(&name);
        (name, path)
    }

    /// Reserves a unique report filename; returns `(filename, full path)`.
    fn new_report(&self) -> (String, PathBuf) {
        let name = format!("{}.{REPORT_EXTENSION}", Uuid::new_v4());
        let path = self.reports.join(&name);
        (name, path)
    }

    /// Writes a rendered chart and report under fresh names and returns
    /// `(chart filename, report filename)`.
    ///
    /// Either both files are stored or neither is: a failed report write
    /// removes the chart that was written before it.
    pub async fn store_artifacts(
        &self,
        chart: &[u8],
        report: &[u8],
    ) -> Result<(String, String), AppError> {
        let (chart_file, chart_path) = self.new_chart();
        let (report_file, report_path) = self.new_report();

        tokio::fs::write(&chart_path, chart).await?;
        if let Err(e) = tokio::fs::write(&report_path, report).await {
            discard(&report_path).await;
            discard(&chart_path).await;
            return Err(e.into());
        }

        debug!("Stored chart {chart_file} and report {report_file}");
        Ok((chart_file, report_file))
    }

    /// Maps a user-supplied report name to an existing report file.
    ///
    /// Only `<uuid>.pdf` names are accepted, so traversal sequences and
    /// arbitrary paths are rejected before touching the filesystem.
    pub async fn resolve_report(&self, name: &str) -> Result<PathBuf, AppError> {
        let not_found = || AppError::NotFound(format!("Report {name} not found"));

        let stem = name
            .strip_suffix(REPORT_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .ok_or_else(not_found)?;
        let id = Uuid::parse_str(stem).map_err(|_| not_found())?;

        let path = self.reports.join(format!("{id}.{REPORT_EXTENSION}"));
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(not_found()),
        }
    }

    /// Deletes files older than `ttl` from every artifact directory.
    /// Returns how many files were removed.
    pub async fn sweep_expired(&self, ttl: Duration) -> Result<usize> {
        let mut removed = 0;
        for dir in self.dirs() {
            let mut entries = tokio::fs::read_dir(dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let meta = match entry.metadata().await {
                    Ok(meta) if meta.is_file() => meta,
                    _ => continue,
                };
                let expired = meta
                    .modified()
                    .ok()
                    .and_then(|modified| modified.elapsed().ok())
                    .is_some_and(|age| age >= ttl);
                if !expired {
                    continue;
                }
                match tokio::fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    Err(e) => warn!("Failed to remove expired {}: {e}", entry.path().display()),
                }
            }
        }
        Ok(removed)
    }
}

/// Best-effort removal of a partially stored artifact.
async fn discard(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove {}: {e}", path.display()),
    }
}

/// Runs `sweep_expired` every `interval` for the lifetime of the process.
pub fn spawn_sweeper(storage: Storage, ttl: Duration, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match storage.sweep_expired(ttl).await {
                Ok(0) => {}
                Ok(n) => info!("Artifact sweeper removed {n} expired files"),
                Err(e) => warn!("Artifact sweep failed: {e:?}"),
            }
        }
    })
}

//! Command interface around the current schedule.
//!
//! [`Dashboard`] owns the one loaded schedule and the surface it is rendered into.
//! A load is split in two: [`PreparedLoad::parse`] does all the work that can fail
//! without touching any state, and [`Dashboard::commit`] swaps the result in and
//! re-renders. A failed parse therefore never disturbs what is on screen.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use super::presentation::{detail_view, render, DetailView};
use super::stats::{compute_stats, Stats};
use super::surface::{DisplayField, RenderSurface};
use crate::models::Schedule;
use crate::parsing::{load_from_text, FormatError, InputFormat};

/// Suffix shown after the file name when the schedule came from the startup loader.
pub const AUTOLOAD_SUFFIX: &str = " (auto-loaded)";

/// SHA-256 of the raw payload, hex encoded.
pub fn payload_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// A parsed payload ready to be swapped in.
#[derive(Debug, Clone)]
pub struct PreparedLoad {
    pub schedule: Schedule,
    pub stats: Stats,
    pub format: InputFormat,
    pub source_name: String,
    pub checksum: String,
}

impl PreparedLoad {
    /// Parse `content` and derive its stats. Nothing is committed.
    pub fn parse(
        content: &str,
        format: InputFormat,
        source_name: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let schedule = load_from_text(content, format)?;
        let stats = compute_stats(&schedule);
        Ok(Self {
            schedule,
            stats,
            format,
            source_name: source_name.into(),
            checksum: payload_checksum(content),
        })
    }
}

/// The schedule currently on display.
#[derive(Debug, Clone)]
pub struct LoadedSchedule {
    pub schedule: Schedule,
    pub stats: Stats,
    pub format: InputFormat,
    pub source_name: String,
    pub checksum: String,
    pub revision: u64,
}

/// Summary returned for every successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReceipt {
    pub source_name: String,
    pub format: InputFormat,
    pub slot_count: usize,
    /// Increases by one with every committed load.
    pub revision: u64,
    pub checksum: String,
    pub stats: Stats,
}

pub struct Dashboard<S: RenderSurface> {
    surface: S,
    current: Option<LoadedSchedule>,
    revision: u64,
}

impl<S: RenderSurface> Dashboard<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
            revision: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current(&self) -> Option<&LoadedSchedule> {
        self.current.as_ref()
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.current.as_ref().map(|c| &c.schedule)
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.current.as_ref().map(|c| &c.stats)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Revision of the last committed load; 0 before the first one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Parse and, on success, replace the current schedule.
    ///
    /// On error the current schedule and the surface are left exactly as they were.
    pub fn load_from_text(
        &mut self,
        content: &str,
        format: InputFormat,
        source_name: &str,
    ) -> Result<LoadReceipt, FormatError> {
        match PreparedLoad::parse(content, format, source_name) {
            Ok(prepared) => Ok(self.commit(prepared)),
            Err(e) => {
                warn!("Rejected {} payload '{}': {}", format, source_name, e);
                Err(e)
            }
        }
    }

    /// Swap in a prepared load and re-render everything.
    pub fn commit(&mut self, prepared: PreparedLoad) -> LoadReceipt {
        self.revision += 1;

        render(&prepared.schedule, &prepared.stats, &mut self.surface);
        self.surface
            .set_field(DisplayField::FileName, prepared.source_name.clone());

        let receipt = LoadReceipt {
            source_name: prepared.source_name.clone(),
            format: prepared.format,
            slot_count: prepared.schedule.len(),
            revision: self.revision,
            checksum: prepared.checksum.clone(),
            stats: prepared.stats.clone(),
        };

        info!(
            "Loaded schedule '{}' ({} slots, revision {})",
            receipt.source_name, receipt.slot_count, receipt.revision
        );

        self.current = Some(LoadedSchedule {
            schedule: prepared.schedule,
            stats: prepared.stats,
            format: prepared.format,
            source_name: prepared.source_name,
            checksum: prepared.checksum,
            revision: self.revision,
        });

        receipt
    }

    /// Open the detail view for the slot at `position`.
    ///
    /// Returns `None`, and shows nothing, when no schedule is loaded or the position
    /// is out of range.
    pub fn select_slot(&mut self, position: usize) -> Option<DetailView> {
        let detail = detail_view(self.schedule()?, position)?;
        self.surface.show_detail(detail.clone());
        Some(detail)
    }

    pub fn dismiss_detail(&mut self) {
        self.surface.hide_detail();
    }

    /// Load from `source`, ignoring every failure.
    pub async fn autoload(&mut self, source: &dyn ScheduleSource) -> Option<LoadReceipt> {
        let prepared = prepare_autoload(source).await?;
        Some(self.commit(prepared))
    }
}

/// Raw content handed over by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePayload {
    pub content: String,
    pub format: InputFormat,
    pub name: String,
}

/// Somewhere a schedule can be fetched from without user involvement.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    fn describe(&self) -> String;

    /// Fetch the payload, or `None` when it is unavailable for any reason.
    async fn fetch(&self) -> Option<SourcePayload>;
}

/// Reads a schedule file from disk. The format comes from the extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScheduleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Option<SourcePayload> {
        let name = self.path.file_name()?.to_string_lossy().into_owned();
        let Some(format) = InputFormat::from_file_name(&name) else {
            debug!("Default file {} has no loadable extension", self.path.display());
            return None;
        };

        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Some(SourcePayload {
                content,
                format,
                name,
            }),
            Err(e) => {
                debug!("Default file {} not readable: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Fetch and parse from `source` without committing anything.
///
/// Every failure is logged and turned into `None`; startup loading is best effort.
pub async fn prepare_autoload(source: &dyn ScheduleSource) -> Option<PreparedLoad> {
    let payload = source.fetch().await?;
    let display_name = format!("{}{}", payload.name, AUTOLOAD_SUFFIX);

    match PreparedLoad::parse(&payload.content, payload.format, display_name) {
        Ok(prepared) => Some(prepared),
        Err(e) => {
            warn!("Ignoring default schedule {}: {}", source.describe(), e);
            None
        }
    }
}

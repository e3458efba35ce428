use std::path::{Path, PathBuf};

use crate::types::DiscType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Created,
    Identified,
    Staged,
    Running,
    Finalized,
    Aborted,
}

/// One insertion event. The staging path is set while the job is `Staged`
/// or `Running`. An aborted job keeps it only if the directory could not be
/// removed, so a set path always names a directory still on disk.
#[derive(Debug, Clone)]
pub struct BackupJob {
    device: PathBuf,
    base_dir: PathBuf,
    staging: Option<PathBuf>,
    disc: DiscType,
    label: Option<String>,
    state: JobState,
}

impl BackupJob {
    pub fn new(device: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            base_dir: base_dir.into(),
            staging: None,
            disc: DiscType::Unknown,
            label: None,
            state: JobState::Created,
        }
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn staging_path(&self) -> Option<&Path> {
        self.staging.as_deref()
    }

    pub fn disc(&self) -> DiscType {
        self.disc
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn identify(&mut self, disc: DiscType, label: Option<String>) {
        debug_assert_eq!(self.state, JobState::Created);
        self.disc = disc;
        self.label = label;
        self.state = JobState::Identified;
    }

    pub fn stage(&mut self, staging: PathBuf) {
        debug_assert_eq!(self.state, JobState::Identified);
        self.staging = Some(staging);
        self.state = JobState::Staged;
    }

    pub fn start(&mut self) {
        debug_assert_eq!(self.state, JobState::Staged);
        self.state = JobState::Running;
    }

    pub fn finalize(&mut self) {
        debug_assert_eq!(self.state, JobState::Running);
        self.staging = None;
        self.state = JobState::Finalized;
    }

    pub fn abort(&mut self) {
        self.state = JobState::Aborted;
    }

    /// Forgets the staging path once its directory is gone.
    pub fn release_staging(&mut self) {
        self.staging = None;
    }
}

pub mod backup;
pub mod cli;
pub mod config;
pub mod drive;
pub mod error;
pub mod exit;
pub mod job;
pub mod notify;
pub mod pipeline;
pub mod staging;
pub mod types;
pub mod util;

pub use error::{BackupError, ConfigError};
pub use job::{BackupJob, JobState};
pub use pipeline::Pipeline;
pub use types::{DiscMetadata, DiscType, DriveStatus};

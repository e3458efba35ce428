use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{DiscType, DriveStatus};

pub const EXIT_USAGE: i32 = 64;

/// Fatal conditions of a backup run. Every variant maps to a fixed process
/// exit code; none of them is retried.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("failed to query status of device {}: {source}", .device.display())]
    StatusQuery {
        device: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("device {} is not ready for backup ({status})", .device.display())]
    NotReady { device: PathBuf, status: DriveStatus },
    #[error("device {} reported unknown drive status {code}", .device.display())]
    UnknownStatus { device: PathBuf, code: i32 },
    #[error("failed to read properties of device {}: {source}", .device.display())]
    PropertyQuery {
        device: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "device {} is not ready for backup (ID_CDROM_MEDIA_STATE {})",
        .device.display(),
        .state.as_deref().unwrap_or("<missing>")
    )]
    MediaNotComplete {
        device: PathBuf,
        state: Option<String>,
    },
    #[error("could not identify disc in {}", .device.display())]
    Unidentified { device: PathBuf },
    #[error("backup of {disc} discs is not implemented")]
    NotImplemented { disc: DiscType },
    #[error("{program} failed with exit code {code}")]
    ToolExit { program: String, code: i32 },
    #[error("{program} reported errors: {stderr}")]
    ToolStderr { program: String, stderr: String },
    #[error("{program}: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("staging {}: {source}", .path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{program} lists no drive for {}", .device.display())]
    NotInInventory { program: String, device: PathBuf },
}

impl BackupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BackupError::StatusQuery { .. } => 1,
            BackupError::NotReady { .. } | BackupError::UnknownStatus { .. } => 2,
            BackupError::PropertyQuery { .. } | BackupError::MediaNotComplete { .. } => 3,
            BackupError::Unidentified { .. } => 4,
            BackupError::NotImplemented { .. } => 5,
            BackupError::ToolExit { .. } => 6,
            BackupError::ToolStderr { .. } => 7,
            BackupError::ToolLaunch { .. } => 8,
            BackupError::Staging { .. } => 9,
            BackupError::NotInInventory { .. } => 10,
        }
    }

    pub fn staging(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BackupError::Staging {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn dev() -> PathBuf {
        PathBuf::from("/dev/sr0")
    }

    #[test]
    fn exit_codes_follow_taxonomy() {
        let cases = [
            (
                BackupError::StatusQuery {
                    device: dev(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                },
                1,
            ),
            (
                BackupError::NotReady {
                    device: dev(),
                    status: DriveStatus::TrayOpen,
                },
                2,
            ),
            (BackupError::UnknownStatus { device: dev(), code: 17 }, 2),
            (
                BackupError::MediaNotComplete {
                    device: dev(),
                    state: Some("blank".to_string()),
                },
                3,
            ),
            (BackupError::Unidentified { device: dev() }, 4),
            (BackupError::NotImplemented { disc: DiscType::Cd }, 5),
            (
                BackupError::ToolExit {
                    program: "dvdbackup".to_string(),
                    code: 3,
                },
                6,
            ),
            (
                BackupError::ToolStderr {
                    program: "dvdbackup".to_string(),
                    stderr: "oops".to_string(),
                },
                7,
            ),
            (
                BackupError::ToolLaunch {
                    program: "dvdbackup".to_string(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                },
                8,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{}", err);
        }
    }

    #[test]
    fn media_state_message_names_missing_property() {
        let err = BackupError::MediaNotComplete {
            device: dev(),
            state: None,
        };
        assert!(err.to_string().contains("<missing>"));
    }
}

use std::path::Path;

use tracing::info;

use crate::drive::properties::Properties;
use crate::error::{BackupError, Result};
use crate::types::{DiscMetadata, DiscType};

pub const MEDIA_STATE: &str = "ID_CDROM_MEDIA_STATE";
pub const MEDIA_STATE_COMPLETE: &str = "complete";
pub const FS_LABEL: &str = "ID_FS_LABEL";
pub const TRACK_COUNT_AUDIO: &str = "ID_CDROM_MEDIA_TRACK_COUNT_AUDIO";
pub const MEDIA_DVD: &str = "ID_CDROM_MEDIA_DVD";
pub const MEDIA_BD: &str = "ID_CDROM_MEDIA_BD";

/// Evaluated in order; a later present signal overrides an earlier one.
const TYPE_RULES: [(&str, DiscType); 3] = [
    (TRACK_COUNT_AUDIO, DiscType::Cd),
    (MEDIA_DVD, DiscType::Dvd),
    (MEDIA_BD, DiscType::Bd),
];

pub fn read_metadata(props: &Properties) -> DiscMetadata {
    DiscMetadata {
        label: props.get(FS_LABEL).cloned(),
        media_complete: props.get(MEDIA_STATE).map(String::as_str) == Some(MEDIA_STATE_COMPLETE),
    }
}

pub fn disc_type(props: &Properties) -> DiscType {
    TYPE_RULES
        .iter()
        .fold(DiscType::Unknown, |current, (key, disc)| {
            if props.contains_key(*key) {
                *disc
            } else {
                current
            }
        })
}

/// Identifies the disc from its udev properties. Media that has not settled
/// is rejected before any type signal is looked at.
pub fn classify(device: &Path, props: &Properties) -> Result<(DiscType, DiscMetadata)> {
    let metadata = read_metadata(props);
    if !metadata.media_complete {
        return Err(BackupError::MediaNotComplete {
            device: device.to_path_buf(),
            state: props.get(MEDIA_STATE).cloned(),
        });
    }
    let disc = disc_type(props);
    if disc == DiscType::Unknown {
        return Err(BackupError::Unidentified {
            device: device.to_path_buf(),
        });
    }
    info!(
        device = %device.display(),
        disc = %disc,
        label = metadata.label.as_deref().unwrap_or("<none>"),
        "disc identified"
    );
    Ok((disc, metadata))
}

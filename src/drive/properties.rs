use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{BackupError, Result};
use crate::util::paths::sysfs_block_path;

pub type Properties = BTreeMap<String, String>;

pub trait PropertyStore {
    fn properties(&self, device: &Path) -> Result<Properties>;
}

/// Reads the udev database entry of a block device, which carries the
/// `ID_CDROM_*` keys written by `cdrom_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UdevStore;

impl PropertyStore for UdevStore {
    fn properties(&self, device: &Path) -> Result<Properties> {
        let query_err = |source: std::io::Error| BackupError::PropertyQuery {
            device: device.to_path_buf(),
            source,
        };
        let syspath = sysfs_block_path(device).ok_or_else(|| {
            query_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "device path has no kernel name",
            ))
        })?;
        let udev_device = udev::Device::from_syspath(&syspath).map_err(query_err)?;
        Ok(udev_device
            .properties()
            .map(|entry| {
                (
                    entry.name().to_string_lossy().to_string(),
                    entry.value().to_string_lossy().to_string(),
                )
            })
            .collect())
    }
}

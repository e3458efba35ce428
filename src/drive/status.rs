use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use nix::ioctl_write_int_bad;
use tracing::debug;

use crate::error::{BackupError, Result};
use crate::types::DriveStatus;

const CDROM_DRIVE_STATUS: libc::c_ulong = 0x5326;
const CDSL_CURRENT: libc::c_int = libc::c_int::MAX;

ioctl_write_int_bad!(cdrom_drive_status, CDROM_DRIVE_STATUS);

pub trait StatusProbe {
    /// Returns the raw status code reported by the drive.
    fn query(&self, device: &Path) -> Result<i32>;

    fn probe(&self, device: &Path) -> Result<DriveStatus> {
        let code = self.query(device)?;
        let status = DriveStatus::from_code(code).ok_or_else(|| BackupError::UnknownStatus {
            device: device.to_path_buf(),
            code,
        })?;
        debug!(device = %device.display(), status = %status, "drive status");
        Ok(status)
    }
}

/// Queries the kernel cdrom driver. The handle is opened non-blocking so an
/// empty drive or open tray does not stall the open call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdromIoctl;

impl StatusProbe for CdromIoctl {
    fn query(&self, device: &Path) -> Result<i32> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(device)
            .map_err(|e| BackupError::StatusQuery {
                device: device.to_path_buf(),
                source: e,
            })?;
        // SAFETY: the fd is valid for the lifetime of `file`; the request
        // takes a slot number by value and writes nothing back.
        let code = unsafe { cdrom_drive_status(file.as_raw_fd(), CDSL_CURRENT) }.map_err(|errno| {
            BackupError::StatusQuery {
                device: device.to_path_buf(),
                source: std::io::Error::from(errno),
            }
        })?;
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(i32);

    impl StatusProbe for Fixed {
        fn query(&self, _device: &Path) -> Result<i32> {
            Ok(self.0)
        }
    }

    #[test]
    fn probe_maps_known_codes() {
        let status = Fixed(4).probe(Path::new("/dev/sr0")).expect("probe");
        assert_eq!(status, DriveStatus::DiscOk);
    }

    #[test]
    fn probe_rejects_unknown_codes() {
        let err = Fixed(42).probe(Path::new("/dev/sr0")).unwrap_err();
        assert!(matches!(err, BackupError::UnknownStatus { code: 42, .. }));
    }

    #[test]
    fn missing_device_fails_with_status_query() {
        let err = CdromIoctl.probe(Path::new("/nonexistent/sr9")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}

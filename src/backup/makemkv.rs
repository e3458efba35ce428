use std::path::Path;

use tracing::info;

use crate::backup::BackupStrategy;
use crate::error::{BackupError, Result};
use crate::util::command::ProcessRunner;

/// Index that makes `makemkvcon info` list drives without scanning a disc.
const DRIVE_LISTING_INDEX: &str = "disc:9999";

/// Decrypting Blu-ray backup through `makemkvcon`.
#[derive(Debug, Clone)]
pub struct MakeMkv {
    program: String,
}

impl MakeMkv {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn inventory_args(&self) -> Vec<String> {
        vec![
            self.program.clone(),
            "-r".to_string(),
            "info".to_string(),
            DRIVE_LISTING_INDEX.to_string(),
        ]
    }

    pub fn backup_args(&self, index: u32, staging: &Path) -> Vec<String> {
        vec![
            self.program.clone(),
            "backup".to_string(),
            "--decrypt".to_string(),
            "-r".to_string(),
            format!("disc:{}", index),
            staging.to_string_lossy().to_string(),
        ]
    }

    fn resolve_index(&self, runner: &ProcessRunner, device: &Path) -> Result<u32> {
        let output = runner.run(&self.inventory_args())?;
        drive_index(&output.stdout, device).ok_or_else(|| BackupError::NotInInventory {
            program: self.program.clone(),
            device: device.to_path_buf(),
        })
    }
}

/// Finds the makemkv drive index for `device` in robot-mode output, where
/// drives are listed as `DRV:<index>,<flags...>,"<name>","<label>","<device>"`.
pub fn drive_index(listing: &str, device: &Path) -> Option<u32> {
    let quoted = format!("\"{}\"", device.display());
    listing
        .lines()
        .filter_map(|line| line.strip_prefix("DRV:"))
        .filter(|fields| fields.split(',').any(|field| field.trim() == quoted))
        .find_map(|fields| fields.split(',').next()?.trim().parse().ok())
}

impl BackupStrategy for MakeMkv {
    fn name(&self) -> &str {
        "makemkvcon"
    }

    fn run(&self, runner: &ProcessRunner, device: &Path, staging: &Path) -> Result<()> {
        let index = self.resolve_index(runner, device)?;
        info!(device = %device.display(), index, "resolved makemkv drive index");
        runner.run(&self.backup_args(index, staging))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"MSG:1005,0,1,"MakeMKV v1.17.7 linux(x64-release) started","%1 started","MakeMKV v1.17.7 linux(x64-release)"
DRV:0,2,999,12,"BD-RE HL-DT-ST BD-RE  WH16NS40 1.05","MOVIE1","/dev/sr1"
DRV:1,2,999,12,"BD-ROM ASUS BW-16D1HT 3.10","OTHER","/dev/sr0"
DRV:2,256,999,0,"","",""
DRV:3,256,999,0,"","",""
"#;

    #[test]
    fn finds_index_by_device_field() {
        assert_eq!(drive_index(LISTING, Path::new("/dev/sr0")), Some(1));
        assert_eq!(drive_index(LISTING, Path::new("/dev/sr1")), Some(0));
    }

    #[test]
    fn device_prefix_does_not_match() {
        let listing = "DRV:4,2,999,12,\"BD\",\"X\",\"/dev/sr10\"\n";
        assert_eq!(drive_index(listing, Path::new("/dev/sr1")), None);
    }

    #[test]
    fn absent_drive_yields_none() {
        assert_eq!(drive_index(LISTING, Path::new("/dev/sr7")), None);
        assert_eq!(drive_index("", Path::new("/dev/sr0")), None);
    }

    #[test]
    fn backup_targets_staging_directory() {
        let args = MakeMkv::new("makemkvcon").backup_args(3, Path::new("/srv/.FILM_1"));
        assert_eq!(
            args,
            vec!["makemkvcon", "backup", "--decrypt", "-r", "disc:3", "/srv/.FILM_1"]
        );
    }
}

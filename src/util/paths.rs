use std::path::{Path, PathBuf};

const DEV_DIR: &str = "/dev";
const SYS_BLOCK_DIR: &str = "/sys/class/block";

/// udev hands over the kernel name (`sr0`); users tend to pass `/dev/sr0`.
pub fn device_path(arg: &str) -> PathBuf {
    let arg = arg.trim();
    if arg.starts_with('/') {
        PathBuf::from(arg)
    } else {
        Path::new(DEV_DIR).join(arg)
    }
}

pub fn sysfs_block_path(device: &Path) -> Option<PathBuf> {
    let name = device.file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }
    Some(Path::new(SYS_BLOCK_DIR).join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_name_resolves_under_dev() {
        assert_eq!(device_path("sr0"), PathBuf::from("/dev/sr0"));
        assert_eq!(device_path("/dev/sr1"), PathBuf::from("/dev/sr1"));
    }

    #[test]
    fn sysfs_path_uses_leaf_name() {
        assert_eq!(
            sysfs_block_path(Path::new("/dev/sr0")),
            Some(PathBuf::from("/sys/class/block/sr0"))
        );
        assert_eq!(sysfs_block_path(Path::new("/")), None);
    }
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "udfbackup",
    version,
    about = "Back up the disc just inserted into an optical drive"
)]
pub struct Cli {
    /// Kernel device name from udev (sr0) or a device path (/dev/sr0)
    #[arg(long, short = 'd')]
    pub device: String,

    /// Folder the backups are written to (overrides baseDir)
    #[arg(long, short = 'f')]
    pub folder: Option<PathBuf>,

    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_is_required() {
        assert!(Cli::try_parse_from(["udfbackup", "--folder", "/srv"]).is_err());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["udfbackup", "-d", "sr0", "-f", "/srv/discs", "-v"]).expect("parse");
        assert_eq!(cli.device, "sr0");
        assert_eq!(cli.folder, Some(PathBuf::from("/srv/discs")));
        assert!(cli.verbose);
        assert_eq!(cli.config, None);
    }
}

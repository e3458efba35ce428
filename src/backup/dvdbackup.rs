use std::path::Path;

use crate::backup::BackupStrategy;
use crate::error::{BackupError, Result};
use crate::util::command::ProcessRunner;

/// Mirrors a video DVD with `dvdbackup`, aborting on the first read error.
#[derive(Debug, Clone)]
pub struct DvdBackup {
    program: String,
}

impl DvdBackup {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// dvdbackup writes into `<output>/<name>`, so the staging directory is
    /// split into its parent and leaf.
    pub fn args(&self, device: &Path, staging: &Path) -> Result<Vec<String>> {
        let (output, name) = match (staging.parent(), staging.file_name()) {
            (Some(parent), Some(leaf)) => (parent, leaf),
            _ => {
                return Err(BackupError::staging(
                    staging,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "staging path has no parent directory",
                    ),
                ))
            }
        };
        Ok(vec![
            self.program.clone(),
            "--input".to_string(),
            device.to_string_lossy().to_string(),
            "--progress".to_string(),
            "--verbose".to_string(),
            "--mirror".to_string(),
            "--error".to_string(),
            "a".to_string(),
            "--output".to_string(),
            output.to_string_lossy().to_string(),
            "--name".to_string(),
            name.to_string_lossy().to_string(),
        ])
    }
}

impl BackupStrategy for DvdBackup {
    fn name(&self) -> &str {
        "dvdbackup"
    }

    fn run(&self, runner: &ProcessRunner, device: &Path, staging: &Path) -> Result<()> {
        let args = self.args(device, staging)?;
        runner.run(&args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_into_staging_parent_and_leaf() {
        let args = DvdBackup::new("dvdbackup")
            .args(Path::new("/dev/sr0"), Path::new("/srv/discs/.MOVIE1_42"))
            .expect("args");
        assert_eq!(
            args,
            vec![
                "dvdbackup",
                "--input",
                "/dev/sr0",
                "--progress",
                "--verbose",
                "--mirror",
                "--error",
                "a",
                "--output",
                "/srv/discs",
                "--name",
                ".MOVIE1_42",
            ]
        );
    }

    #[test]
    fn label_with_spaces_stays_one_argument() {
        let args = DvdBackup::new("dvdbackup")
            .args(Path::new("/dev/sr0"), Path::new("/srv/.MY MOVIE; rm_1"))
            .expect("args");
        assert_eq!(args.last().map(String::as_str), Some(".MY MOVIE; rm_1"));
    }
}

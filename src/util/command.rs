use std::process::Command;

use tracing::{debug, error, info};

use crate::error::{BackupError, Result};

#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external tools from an argument vector, never through a shell.
///
/// A run succeeds only when the tool exits 0 *and* writes nothing to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        ProcessRunner
    }

    pub fn run(&self, argv: &[String]) -> Result<ProcessOutput> {
        let (program, args) = match argv.split_first() {
            Some(split) => split,
            None => {
                return Err(BackupError::ToolLaunch {
                    program: String::new(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
                })
            }
        };
        let mut cmd = Command::new(program);
        cmd.args(args);
        log_command(&cmd);

        let output = cmd.output().map_err(|e| BackupError::ToolLaunch {
            program: program.clone(),
            source: e,
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stdout.is_empty() {
            info!(program = %program, "{}", stdout);
        }
        if !stderr.is_empty() {
            error!(program = %program, "{}", stderr);
        }

        if !output.status.success() {
            return Err(BackupError::ToolExit {
                program: program.clone(),
                code: output.status.code().unwrap_or(1),
            });
        }
        if !output.stderr.is_empty() {
            return Err(BackupError::ToolStderr {
                program: program.clone(),
                stderr,
            });
        }
        Ok(ProcessOutput { stdout, stderr })
    }
}

fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    debug!("{} {}", program, args.join(" "));
}

use std::path::Path;

use tracing::{info, warn};

use crate::util::command::ProcessRunner;

/// Ejects the drive at most once per run.
#[derive(Debug, Clone)]
pub struct Ejector {
    program: String,
    ejected: bool,
}

impl Ejector {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ejected: false,
        }
    }

    pub fn is_ejected(&self) -> bool {
        self.ejected
    }

    pub fn eject(&mut self, runner: &ProcessRunner, device: &Path) {
        if self.ejected {
            return;
        }
        self.ejected = true;
        let argv = vec![self.program.clone(), device.to_string_lossy().to_string()];
        match runner.run(&argv) {
            Ok(_) => info!(device = %device.display(), "ejected"),
            Err(err) => warn!(device = %device.display(), "eject failed: {}", err),
        }
    }
}

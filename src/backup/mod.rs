use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::config::model::ToolsConfig;
use crate::error::{BackupError, Result};
use crate::types::DiscType;
use crate::util::command::ProcessRunner;

pub mod dvdbackup;
pub mod makemkv;

pub use dvdbackup::DvdBackup;
pub use makemkv::MakeMkv;

/// A way of copying one kind of disc into a staging directory.
pub trait BackupStrategy {
    fn name(&self) -> &str;
    fn run(&self, runner: &ProcessRunner, device: &Path, staging: &Path) -> Result<()>;
}

/// Maps disc types to strategies. Types without an entry are refused.
pub struct BackupDispatcher {
    runner: ProcessRunner,
    strategies: HashMap<DiscType, Box<dyn BackupStrategy>>,
}

impl BackupDispatcher {
    pub fn new(runner: ProcessRunner) -> Self {
        Self {
            runner,
            strategies: HashMap::new(),
        }
    }

    pub fn from_tools(runner: ProcessRunner, tools: &ToolsConfig) -> Self {
        let mut dispatcher = Self::new(runner);
        dispatcher.register(DiscType::Bd, Box::new(MakeMkv::new(tools.makemkvcon.clone())));
        dispatcher.register(DiscType::Dvd, Box::new(DvdBackup::new(tools.dvdbackup.clone())));
        dispatcher
    }

    pub fn register(&mut self, disc: DiscType, strategy: Box<dyn BackupStrategy>) {
        self.strategies.insert(disc, strategy);
    }

    pub fn supports(&self, disc: DiscType) -> bool {
        self.strategies.contains_key(&disc)
    }

    pub fn dispatch(&self, disc: DiscType, device: &Path, staging: &Path) -> Result<()> {
        let strategy = self
            .strategies
            .get(&disc)
            .ok_or(BackupError::NotImplemented { disc })?;
        info!(disc = %disc, strategy = strategy.name(), "backing up");
        strategy.run(&self.runner, device, staging)?;
        info!(disc = %disc, strategy = strategy.name(), "backup tool finished");
        Ok(())
    }
}

use std::path::PathBuf;

use tracing::{info, warn};

use crate::backup::BackupDispatcher;
use crate::config::model::RuntimeConfig;
use crate::drive::{classify, Ejector, PropertyStore, StatusProbe};
use crate::error::{BackupError, Result};
use crate::job::BackupJob;
use crate::notify::Notifier;
use crate::staging::{self, staging_timestamp};
use crate::types::{DiscType, DriveStatus};
use crate::util::command::ProcessRunner;

/// Drives one job from probe to finalize. Any error is returned untouched;
/// cleanup and termination belong to [`crate::exit`].
pub struct Pipeline<P, S> {
    probe: P,
    store: S,
    dispatcher: BackupDispatcher,
    notifier: Notifier,
    ejector: Ejector,
    runner: ProcessRunner,
}

impl<P: StatusProbe, S: PropertyStore> Pipeline<P, S> {
    pub fn new(
        probe: P,
        store: S,
        dispatcher: BackupDispatcher,
        notifier: Notifier,
        ejector: Ejector,
        runner: ProcessRunner,
    ) -> Self {
        Self {
            probe,
            store,
            dispatcher,
            notifier,
            ejector,
            runner,
        }
    }

    pub fn from_config(cfg: &RuntimeConfig, probe: P, store: S) -> Self {
        let runner = ProcessRunner::new();
        Self::new(
            probe,
            store,
            BackupDispatcher::from_tools(runner, &cfg.tools),
            Notifier::new(cfg.notify.clone(), runner),
            Ejector::new(cfg.tools.eject.clone()),
            runner,
        )
    }

    pub fn is_ejected(&self) -> bool {
        self.ejector.is_ejected()
    }

    pub fn run(&mut self, job: &mut BackupJob) -> Result<PathBuf> {
        self.run_at(job, staging_timestamp())
    }

    pub fn run_at(&mut self, job: &mut BackupJob, timestamp: i64) -> Result<PathBuf> {
        let device = job.device().to_path_buf();

        let status = self.probe.probe(&device)?;
        if status != DriveStatus::DiscOk {
            return Err(BackupError::NotReady { device, status });
        }

        let props = self.store.properties(&device)?;
        let (disc, metadata) = match classify(&device, &props) {
            Ok(found) => found,
            Err(err) => {
                if let BackupError::Unidentified { .. } = err {
                    self.notifier
                        .send(&format!("Could not identify disc in {}, aborting.", device.display()));
                }
                return Err(err);
            }
        };
        job.identify(disc, metadata.label);
        self.notifier.send(&format!(
            "{} inserted into {} called {}, backing it up!",
            disc,
            device.display(),
            job.label().unwrap_or(staging::UNLABELED)
        ));
        if !self.dispatcher.supports(disc) {
            return Err(BackupError::NotImplemented { disc });
        }

        let staging_dir = staging::stage(job.base_dir(), job.label(), timestamp)?;
        job.stage(staging_dir.clone());
        info!(
            device = %device.display(),
            base_dir = %job.base_dir().display(),
            staging = %staging_dir.display(),
            disc = %job.disc(),
            label = job.label().unwrap_or("<none>"),
            "job staged"
        );

        job.start();
        if let Err(err) = self.dispatcher.dispatch(disc, &device, &staging_dir) {
            self.notify_failure(disc);
            return Err(err);
        }

        let done = staging::finalize(&staging_dir)?;
        job.finalize();
        self.ejector.eject(&self.runner, &device);
        self.notifier
            .send(&format!("{} backup finished: {}", disc, done.display()));
        Ok(done)
    }

    fn notify_failure(&self, disc: DiscType) {
        warn!(disc = %disc, "backup tool failed");
        self.notifier.send(&format!(
            "{} backup failed! Check log for more information!",
            disc
        ));
    }
}

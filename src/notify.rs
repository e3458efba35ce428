use tracing::{debug, warn};

use crate::config::model::NotifyConfig;
use crate::util::command::ProcessRunner;

/// Desktop notifications through `notify-send`. Delivery is best effort:
/// failures are logged and never change the outcome of a run.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: NotifyConfig,
    runner: ProcessRunner,
}

impl Notifier {
    pub fn new(config: NotifyConfig, runner: ProcessRunner) -> Self {
        Self { config, runner }
    }

    pub fn args(&self, message: &str) -> Vec<String> {
        vec![
            self.config.command.clone(),
            format!("--icon={}", self.config.icon),
            format!("--expire-time={}", self.config.expire_time_ms),
            self.config.app_name.clone(),
            message.to_string(),
        ]
    }

    pub fn send(&self, message: &str) {
        if !self.config.enabled {
            debug!("notification suppressed: {}", message);
            return;
        }
        if let Err(err) = self.runner.run(&self.args(message)) {
            warn!("notification failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_notify_send_arguments() {
        let notifier = Notifier::new(NotifyConfig::default(), ProcessRunner::new());
        assert_eq!(
            notifier.args("DVD inserted"),
            vec![
                "notify-send".to_string(),
                format!("--icon={}", crate::config::model::DEFAULT_NOTIFY_ICON),
                "--expire-time=10000".to_string(),
                "UDFBackup".to_string(),
                "DVD inserted".to_string(),
            ]
        );
    }

    #[test]
    fn failing_sink_is_not_fatal() {
        let config = NotifyConfig {
            command: "/nonexistent/notify-send".to_string(),
            ..NotifyConfig::default()
        };
        Notifier::new(config, ProcessRunner::new()).send("ignored");
    }
}

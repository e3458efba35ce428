use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFY_ICON: &str = "/usr/share/icons/gnome/256x256/devices/drive-optical.png";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default, rename = "baseDir", skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    #[serde(default, rename = "logFile", skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToolsConfig {
    #[serde(default = "default_makemkvcon")]
    pub makemkvcon: String,
    #[serde(default = "default_dvdbackup")]
    pub dvdbackup: String,
    #[serde(default = "default_eject")]
    pub eject: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            makemkvcon: default_makemkvcon(),
            dvdbackup: default_dvdbackup(),
            eject: default_eject(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotifyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_notify_command")]
    pub command: String,
    #[serde(default = "default_notify_icon")]
    pub icon: String,
    #[serde(default = "default_expire_time", rename = "expireTimeMs")]
    pub expire_time_ms: u32,
    #[serde(default = "default_app_name", rename = "appName")]
    pub app_name: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_notify_command(),
            icon: default_notify_icon(),
            expire_time_ms: default_expire_time(),
            app_name: default_app_name(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub base_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub tools: ToolsConfig,
    pub notify: NotifyConfig,
}

fn default_makemkvcon() -> String {
    "makemkvcon".to_string()
}

fn default_dvdbackup() -> String {
    "dvdbackup".to_string()
}

fn default_eject() -> String {
    "eject".to_string()
}

fn default_true() -> bool {
    true
}

fn default_notify_command() -> String {
    "notify-send".to_string()
}

fn default_notify_icon() -> String {
    DEFAULT_NOTIFY_ICON.to_string()
}

fn default_expire_time() -> u32 {
    10_000
}

fn default_app_name() -> String {
    "UDFBackup".to_string()
}

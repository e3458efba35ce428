use std::fmt;

/// Result of the `CDROM_DRIVE_STATUS` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveStatus {
    NoInfo,
    NoDisc,
    TrayOpen,
    DriveNotReady,
    DiscOk,
}

impl DriveStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(DriveStatus::NoInfo),
            1 => Some(DriveStatus::NoDisc),
            2 => Some(DriveStatus::TrayOpen),
            3 => Some(DriveStatus::DriveNotReady),
            4 => Some(DriveStatus::DiscOk),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DriveStatus::NoInfo => "CDS_NO_INFO",
            DriveStatus::NoDisc => "CDS_NO_DISC",
            DriveStatus::TrayOpen => "CDS_TRAY_OPEN",
            DriveStatus::DriveNotReady => "CDS_DRIVE_NOT_READY",
            DriveStatus::DiscOk => "CDS_DISC_OK",
        }
    }
}

impl fmt::Display for DriveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiscType {
    #[default]
    Unknown,
    Data,
    Cd,
    Dvd,
    Bd,
}

impl DiscType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscType::Unknown => "UNKNOWN",
            DiscType::Data => "DATA",
            DiscType::Cd => "CD",
            DiscType::Dvd => "DVD",
            DiscType::Bd => "BD",
        }
    }
}

impl fmt::Display for DiscType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscMetadata {
    pub label: Option<String>,
    pub media_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_cdrom_constants() {
        assert_eq!(DriveStatus::from_code(2), Some(DriveStatus::TrayOpen));
        assert_eq!(DriveStatus::from_code(4), Some(DriveStatus::DiscOk));
        assert_eq!(DriveStatus::from_code(5), None);
        assert_eq!(DriveStatus::from_code(-1), None);
    }
}

use std::fmt;
use std::io::{self, Write};

/// The driving modes a strategy can announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveMode {
    Normal,
    Sports,
}

impl DriveMode {
    pub fn notification(self) -> &'static str {
        match self {
            DriveMode::Normal => "Normal driving mode",
            DriveMode::Sports => "Sports driving mode",
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notification())
    }
}

/// Interchangeable driving behavior.
///
/// Implementors only need to report their [`DriveMode`]; the provided
/// `drive` prints the matching notification to stdout.
pub trait DriveStrategy {
    fn mode(&self) -> DriveMode;

    /// Writes the notification line for this strategy's mode.
    fn drive_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let mode = self.mode();
        tracing::debug!(?mode, "driving");
        writeln!(out, "{}", mode)
    }

    fn drive(&self) {
        if let Err(err) = self.drive_to(&mut io::stdout().lock()) {
            tracing::warn!(%err, "failed to print drive notification");
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalDrive;

impl DriveStrategy for NormalDrive {
    fn mode(&self) -> DriveMode {
        DriveMode::Normal
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SportsDrive;

impl DriveStrategy for SportsDrive {
    fn mode(&self) -> DriveMode {
        DriveMode::Sports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications() {
        assert_eq!(NormalDrive.mode().notification(), "Normal driving mode");
        assert_eq!(SportsDrive.mode().notification(), "Sports driving mode");
    }

    #[test]
    fn test_drive_to_writes_notification_line() {
        let mut out: Vec<u8> = Vec::new();
        NormalDrive.drive_to(&mut out).unwrap();
        SportsDrive.drive_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Normal driving mode\nSports driving mode\n"
        );
    }

    #[test]
    fn test_display_matches_notification() {
        assert_eq!(DriveMode::Sports.to_string(), "Sports driving mode");
    }

    #[test]
    fn test_strategies_are_stateless() {
        assert_eq!(std::mem::size_of::<NormalDrive>(), 0);
        assert_eq!(std::mem::size_of::<SportsDrive>(), 0);
    }
}

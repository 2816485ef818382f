use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Deserialize;

use super::{DriveMode, DriveStrategy, NormalDrive, SportsDrive};
use crate::error::PatternError;

/// A vehicle bound to one drive strategy for its whole lifetime.
///
/// There is no setter: the strategy passed to [`Vehicle::new`] is the one
/// every later `drive` call delegates to.
pub struct Vehicle {
    strategy: Box<dyn DriveStrategy>,
}

impl Vehicle {
    pub fn new(strategy: impl DriveStrategy + 'static) -> Self {
        Vehicle {
            strategy: Box::new(strategy),
        }
    }

    pub fn from_kind(kind: VehicleKind) -> Self {
        Vehicle {
            strategy: kind.default_strategy(),
        }
    }

    pub fn passenger() -> Self {
        Self::from_kind(VehicleKind::Passenger)
    }

    pub fn sports() -> Self {
        Self::from_kind(VehicleKind::Sports)
    }

    // Offload shares the sports strategy; no dedicated off-road mode exists.
    pub fn offload() -> Self {
        Self::from_kind(VehicleKind::Offload)
    }

    pub fn drive(&self) {
        self.strategy.drive();
    }

    pub fn drive_to(&self, out: &mut dyn Write) -> io::Result<()> {
        self.strategy.drive_to(out)
    }

    pub fn mode(&self) -> DriveMode {
        self.strategy.mode()
    }
}

impl fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vehicle")
            .field("mode", &self.mode())
            .finish()
    }
}

/// The vehicle variants, each wired to a fixed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum VehicleKind {
    Passenger,
    Sports,
    Offload,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Passenger,
        VehicleKind::Sports,
        VehicleKind::Offload,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Passenger => "passenger",
            VehicleKind::Sports => "sports",
            VehicleKind::Offload => "offload",
        }
    }

    pub fn default_strategy(self) -> Box<dyn DriveStrategy> {
        match self {
            VehicleKind::Passenger => Box::new(NormalDrive),
            VehicleKind::Sports | VehicleKind::Offload => Box::new(SportsDrive),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passenger" => Ok(VehicleKind::Passenger),
            "sports" => Ok(VehicleKind::Sports),
            "offload" => Ok(VehicleKind::Offload),
            _ => Err(PatternError::UnknownVehicle(s.to_string())),
        }
    }
}

impl TryFrom<String> for VehicleKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! Strategy pattern: a vehicle delegates driving to the strategy it was built with.
//!
//! Without the pattern, every vehicle type would carry its own copy of the
//! driving code, and vehicles sharing a behavior would duplicate it. Here
//! the behavior lives in [`DriveStrategy`] implementors and a [`Vehicle`]
//! just holds one.

mod drive;
mod vehicle;

pub use drive::{DriveMode, DriveStrategy, NormalDrive, SportsDrive};
pub use vehicle::{Vehicle, VehicleKind};

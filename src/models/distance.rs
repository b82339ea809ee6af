use crate::constants::DISTANCE_BUCKET_UPPER_HOURS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight-time band used for distance filtering.
///
/// | bucket | flight hours |
/// |--------|--------------|
/// | 0      | < 2          |
/// | 1      | 2 - 4        |
/// | 2      | 4 - 6        |
/// | 3      | 6 - 8        |
/// | 4      | >= 8         |
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DistanceBucket(u8);

impl DistanceBucket {
    pub const COUNT: u8 = 5;

    pub fn new(bucket: u8) -> Option<Self> {
        (bucket < Self::COUNT).then_some(DistanceBucket(bucket))
    }

    pub fn from_flight_hours(hours: f64) -> Self {
        let bucket = DISTANCE_BUCKET_UPPER_HOURS
            .iter()
            .position(|&upper| hours < upper)
            .unwrap_or(DISTANCE_BUCKET_UPPER_HOURS.len());
        DistanceBucket(bucket as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = &DISTANCE_BUCKET_UPPER_HOURS;
        match self.0 as usize {
            0 => write!(f, "< {}h", bounds[0]),
            i if i < bounds.len() => write!(f, "{}-{}h", bounds[i - 1], bounds[i]),
            _ => write!(f, "{}h+", bounds[bounds.len() - 1]),
        }
    }
}

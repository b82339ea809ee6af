//! Display text for the numeric codes carried in responses.

use crate::models::{ClimateCode, CostLevel, DistanceBucket};

pub fn climate_label(code: ClimateCode) -> &'static str {
    match code.value() {
        0 => "Cold",
        1 => "Mild",
        2 => "Warm",
        _ => "Hot",
    }
}

pub fn cost_label(level: CostLevel) -> &'static str {
    match level.value() {
        0 => "Low",
        1 => "Mid-Low",
        2 => "Mid-High",
        _ => "High",
    }
}

pub fn distance_label(bucket: DistanceBucket) -> String {
    bucket.to_string()
}

use serde::{Deserialize, Serialize};

/// Moisture percentage above which a plant reads as wet.
///
/// The boundary is exclusive on the wet side: a reading of exactly
/// 25.0 classifies as dry. Stored thresholds depend on this exact
/// boundary, so any change must happen here and nowhere else.
pub const WET_THRESHOLD: f64 = 25.0;

/// Binary plant condition shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Wet,
    Dry,
}

/// Classifies a numeric moisture reading.
///
/// Total over all inputs; callers are expected to have rejected
/// non-numeric readings at the transport boundary.
pub fn classify_moisture(moisture_level: f64) -> Condition {
    if moisture_level > WET_THRESHOLD {
        Condition::Wet
    } else {
        Condition::Dry
    }
}

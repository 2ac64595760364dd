//! Plant domain model
//!
//! Records returned by the plant-list endpoint and the render-ready
//! per-plant summaries the dashboard keeps current.

use serde::{Deserialize, Serialize};

mod condition;
pub use condition::{classify_moisture, Condition, WET_THRESHOLD};

/// One record returned by the plant-list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub name: String,
    pub sensor_id: String,
    pub device_id: String,
}

/// Latest moisture reading for one sensor, keyed by
/// `(sensor_id, device_id)` at the transport boundary.
///
/// The transport layer rejects non-numeric readings, so
/// `moisture_level` is always a finite number here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureReading {
    pub moisture_level: f64,
}

/// Render-ready view of one plant on the dashboard.
///
/// Owned by exactly one render generation; only that generation's
/// coordinator mutates it, as the plant's status fetch settles.
/// `loaded` transitions false to true at most once and never reverts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantSummary {
    record: PlantRecord,
    condition: Option<Condition>,
    loaded: bool,
}

impl PlantSummary {
    pub fn new(record: PlantRecord) -> Self {
        Self {
            record,
            condition: None,
            loaded: false,
        }
    }

    pub fn record(&self) -> &PlantRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn sensor_id(&self) -> &str {
        &self.record.sensor_id
    }

    pub fn device_id(&self) -> &str {
        &self.record.device_id
    }

    /// Classified condition, or `None` while no reading has resolved.
    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Applies a classified reading. A summary that already settled
    /// keeps its state; `loaded` never reverts.
    pub fn resolve(&mut self, condition: Condition) {
        if self.loaded {
            return;
        }
        self.condition = Some(condition);
        self.loaded = true;
    }

    /// Settles the summary after a non-fatal fetch failure: the
    /// condition keeps its last known value and the summary stops
    /// counting toward the loading indicator.
    pub fn settle_without_reading(&mut self) {
        self.loaded = true;
    }
}

use async_trait::async_trait;

use crate::plant::{MoistureReading, PlantRecord};
use crate::transport::TransportError;

/// Transport boundary for the plant API.
///
/// The wire format is the adapter's concern; the core only relies on
/// these contracts and on every failure arriving as a
/// [`TransportError`].
#[async_trait]
pub trait PlantApiPort: Send + Sync {
    /// Ordered list of the user's plants.
    async fn fetch_plant_list(&self, user_id: &str) -> Result<Vec<PlantRecord>, TransportError>;

    /// Latest moisture reading for one sensor. Adapters must reject
    /// non-numeric readings as [`TransportError::Malformed`].
    async fn fetch_plant_reading(
        &self,
        sensor_id: &str,
        device_id: &str,
    ) -> Result<MoistureReading, TransportError>;
}

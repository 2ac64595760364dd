//! HTTP adapter for the plant API port
//!
//! Owns the wire details the core stays ignorant of: paths, DTO field
//! names, and the bearer header. Every reqwest failure is mapped onto
//! the core's transport taxonomy, so classification downstream is
//! total.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use sp_core::config::ApiConfig;
use sp_core::ports::{PlantApiPort, SessionStorePort};
use sp_core::transport::TransportError;
use sp_core::{MoistureReading, PlantRecord};

pub struct HttpPlantApi {
    client: reqwest::Client,
    base_url: String,
    session_store: Arc<dyn SessionStorePort>,
}

#[derive(Debug, Deserialize)]
struct PlantRecordDto {
    plantname: String,
    sensorid: String,
    deviceid: String,
}

#[derive(Debug, Deserialize)]
struct ReadingDto {
    moisture_level: f64,
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl HttpPlantApi {
    pub fn new(config: &ApiConfig, session_store: Arc<dyn SessionStorePort>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build http client failed")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_store,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(session) = self.session_store.get().await {
            request = request.bearer_auth(session.token.as_str());
        }

        let response = request.send().await.map_err(map_send_error)?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            debug!(code = status.as_u16(), path, "plant api rejected request");
            return Err(TransportError::Status {
                code: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|error| TransportError::Malformed(error.to_string()))
    }
}

/// Failures raised before a status line arrives.
fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(error.to_string())
    }
}

#[async_trait]
impl PlantApiPort for HttpPlantApi {
    async fn fetch_plant_list(&self, user_id: &str) -> Result<Vec<PlantRecord>, TransportError> {
        let records: Vec<PlantRecordDto> =
            self.get_json(&format!("/sensor_data/user/{user_id}")).await?;
        Ok(records
            .into_iter()
            .map(|dto| PlantRecord {
                name: dto.plantname,
                sensor_id: dto.sensorid,
                device_id: dto.deviceid,
            })
            .collect())
    }

    async fn fetch_plant_reading(
        &self,
        sensor_id: &str,
        device_id: &str,
    ) -> Result<MoistureReading, TransportError> {
        let reading: ReadingDto = self
            .get_json(&format!("/sensor_data_details/{sensor_id}/{device_id}"))
            .await?;
        // The contract promises numeric readings; JSON already rules
        // out NaN and infinities, serde rules out strings.
        Ok(MoistureReading {
            moisture_level: reading.moisture_level,
        })
    }
}

//! Weather lookup tool backed by the Open-Meteo API.

use std::sync::Arc;

use crate::tool::{ToolDefinition, ToolHandler, ToolOutput};
use crate::Error;

/// Open-Meteo forecast endpoint.
const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Returns the `get_weather` tool definition.
pub(super) fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "get_weather",
        "Get the current weather at a location",
        serde_json::json!({
            "type": "object",
            "properties": {
                "latitude": {
                    "type": "number",
                    "description": "Latitude of the location"
                },
                "longitude": {
                    "type": "number",
                    "description": "Longitude of the location"
                }
            },
            "required": ["latitude", "longitude"]
        }),
    )
}

/// Returns the `get_weather` handler.
pub(super) fn handler(http_client: reqwest::Client) -> ToolHandler {
    Arc::new(move |input| {
        let http_client = http_client.clone();
        Box::pin(async move {
            let latitude = input
                .get_f64("latitude")
                .ok_or_else(|| Error::tool("get_weather", "missing 'latitude' argument"))?;
            let longitude = input
                .get_f64("longitude")
                .ok_or_else(|| Error::tool("get_weather", "missing 'longitude' argument"))?;

            let response = http_client
                .get(OPEN_METEO_URL)
                .query(&[
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    ("current", "temperature_2m".to_string()),
                    ("hourly", "temperature_2m".to_string()),
                    ("daily", "sunrise,sunset".to_string()),
                    ("timezone", "auto".to_string()),
                ])
                .send()
                .await
                .map_err(|e| Error::tool("get_weather", e.to_string()))?
                .error_for_status()
                .map_err(|e| Error::tool("get_weather", e.to_string()))?;

            let data: serde_json::Value = response
                .json()
                .await
                .map_err(|e| Error::tool("get_weather", e.to_string()))?;

            Ok(ToolOutput::json(data))
        })
    })
}

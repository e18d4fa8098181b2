//! Real-time prediction models.
//!
//! The upstream predictions endpoint answers with a list of nested envelopes
//! (agency, route, stop, values). Only the first envelope's values are
//! flattened into [`Prediction`]s; the envelope field names are kept so the
//! raw shape stays decodable.

use chrono::{DateTime, Utc};
use crate::models::null_as_default;
use serde::{Deserialize, Serialize};

/// Transit agency information inside a prediction envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Agency {
    #[serde(deserialize_with = "null_as_default")]
    pub rev: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_name: String,
}

/// Route information inside a prediction envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionRoute {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
}

/// Stop information inside a prediction envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionStop {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_destination_selector: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
}

/// Direction of travel attached to a single prediction value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionDirection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_name: String,
}

/// One upstream prediction for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionValue {
    /// Predicted arrival/departure, milliseconds since the Unix epoch
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub minutes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub affected_by_layover: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_departure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub occupancy_status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub occupancy_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicles_in_consist: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub linked_vehicle_ids: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub direction: PredictionDirection,
    #[serde(deserialize_with = "null_as_default")]
    pub trip_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delay: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub pred_using_navigation_tm: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub departure: bool,
}

/// Envelope returned by the predictions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub server_timestamp: i64,
    #[serde(rename = "nxbs2RedirectUrl")]
    #[serde(deserialize_with = "null_as_default")]
    pub nxbs_redirect_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub agency: Agency,
    #[serde(deserialize_with = "null_as_default")]
    pub route: PredictionRoute,
    #[serde(deserialize_with = "null_as_default")]
    pub stop: PredictionStop,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<PredictionValue>,
}

/// A flattened arrival/departure prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub vehicle_id: String,

    /// Minutes until the vehicle arrives or departs
    pub minutes: i64,

    /// Display name of the direction of travel
    pub direction: String,

    pub destination_name: String,

    /// Predicted instant, truncated to whole seconds
    pub timestamp: DateTime<Utc>,

    pub vehicle_type: String,
    pub is_departure: bool,
}

impl TryFrom<PredictionValue> for Prediction {
    type Error = serde_json::Error;

    fn try_from(value: PredictionValue) -> Result<Self, Self::Error> {
        // Truncate to whole seconds
        let seconds = value.timestamp / 1000;
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom(format!(
                "prediction timestamp out of range: {}",
                value.timestamp
            ))
        })?;

        Ok(Prediction {
            vehicle_id: value.vehicle_id,
            minutes: value.minutes,
            direction: value.direction.name,
            destination_name: value.direction.destination_name,
            timestamp,
            vehicle_type: value.vehicle_type,
            is_departure: value.is_departure,
        })
    }
}

/// Flatten the first envelope's values into predictions.
///
/// An empty envelope list, or a first envelope without values, yields an
/// empty list. Later envelopes are ignored.
pub fn flatten_predictions(
    envelopes: Vec<PredictionResponse>,
) -> Result<Vec<Prediction>, serde_json::Error> {
    let Some(first) = envelopes.into_iter().next() else {
        return Ok(Vec::new());
    };

    first.values.into_iter().map(Prediction::try_from).collect()
}

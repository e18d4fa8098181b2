//! Data models for the SF MUNI API.
//!
//! Route models mirror the upstream JSON shapes; predictions are flattened
//! from the upstream envelope into a simpler form. Upstream fields that are
//! missing or `null` decode to their zero value.

pub mod prediction;
pub mod route;

pub use prediction::{
    flatten_predictions, Agency, Prediction, PredictionDirection, PredictionResponse,
    PredictionRoute, PredictionStop, PredictionValue,
};
pub use route::{BoundingBox, Direction, Path, PathPoint, RouteDetail, RouteSummary, Stop};

use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping an explicit `null` to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

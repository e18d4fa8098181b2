//! Route models as served by the MUNI API.
//!
//! Field names follow the upstream camelCase JSON and are kept on output.
//! Missing fields decode to their zero value.

use crate::models::null_as_default;
use serde::{Deserialize, Serialize};

/// Summary of a route from the "list all routes" endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteSummary {
    /// Route identifier (e.g. "N")
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Revision number of the route definition
    #[serde(deserialize_with = "null_as_default")]
    pub rev: i64,

    /// Display title (e.g. "N-Judah")
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Route color as a hex string without '#'
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,

    #[serde(deserialize_with = "null_as_default")]
    pub text_color: String,

    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,

    /// Last update timestamp as sent by the API
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
}

/// Geographic bounds of a route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(deserialize_with = "null_as_default")]
    pub lat_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lat_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon_max: f64,
}


/// A stop served by a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Stop {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Short public stop code, when the agency publishes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_destination_selector: bool,

    /// IDs of the directions serving this stop
    #[serde(deserialize_with = "null_as_default")]
    pub directions: Vec<String>,
}

/// One direction of travel along a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Direction {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Whether the direction should be offered in a UI
    #[serde(deserialize_with = "null_as_default")]
    pub use_for_ui: bool,

    /// Ordered stop IDs served in this direction
    #[serde(deserialize_with = "null_as_default")]
    pub stops: Vec<String>,
}

/// A single point on a path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PathPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
}

/// A polyline tracing part of the route geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Path {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub points: Vec<PathPoint>,
}

/// Full route information from the route detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rev: i64,
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
    #[serde(deserialize_with = "null_as_default")]
    pub bounding_box: BoundingBox,
    #[serde(deserialize_with = "null_as_default")]
    pub stops: Vec<Stop>,
    #[serde(deserialize_with = "null_as_default")]
    pub directions: Vec<Direction>,
    #[serde(deserialize_with = "null_as_default")]
    pub paths: Vec<Path>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
}

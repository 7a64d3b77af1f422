use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "crate::model::datetime::deserialize")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "crate::model::datetime::deserialize")]
    pub end_date: NaiveDateTime,
    pub price: f64,
    pub capacity: i32,
    #[serde(default)]
    pub available_spots: i32,
    pub destination_id: i32,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TripDto {
    /// Number of whole days covered by the trip, counting both the first and last day.
    pub fn duration_days(&self) -> i64 {
        (self.end_date.date() - self.start_date.date()).num_days() + 1
    }
}

/// Body for creating or updating a trip.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRequestDto {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub price: f64,
    pub capacity: i32,
    pub destination_id: i32,
    pub image_url: Option<String>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRegistrationDto {
    pub id: i32,
    pub trip_id: i32,
    pub user_id: i32,
    #[serde(deserialize_with = "crate::model::datetime::deserialize")]
    pub registration_date: NaiveDateTime,
    pub number_of_participants: i32,
    pub total_price: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRegistrationDto {
    pub trip_id: i32,
    pub number_of_participants: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registration_date_in_utc() {
        let registration: TripRegistrationDto = serde_json::from_str(
            r#"{"id":1,"tripId":4,"userId":9,"registrationDate":"2025-05-01T10:30:00.123Z","numberOfParticipants":2,"totalPrice":400.0,"status":"Confirmed"}"#,
        )
        .unwrap();

        assert_eq!(registration.registration_date.date().to_string(), "2025-05-01");
        assert_eq!(registration.trip_name, None);
    }
}

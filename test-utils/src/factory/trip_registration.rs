use serde_json::{json, Value};

use crate::factory::helpers::next_id;

pub struct TripRegistrationFactory {
    id: i64,
    trip_id: i64,
    user_id: i64,
    number_of_participants: i64,
    status: String,
}

impl TripRegistrationFactory {
    pub fn new() -> Self {
        Self {
            id: next_id(),
            trip_id: 1,
            user_id: 1,
            number_of_participants: 2,
            status: "Confirmed".to_string(),
        }
    }

    pub fn trip_id(mut self, trip_id: i64) -> Self {
        self.trip_id = trip_id;
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "tripId": self.trip_id,
            "userId": self.user_id,
            "registrationDate": "2025-05-01T10:30:00",
            "numberOfParticipants": self.number_of_participants,
            "totalPrice": 1200.0 * self.number_of_participants as f64,
            "status": self.status,
            "tripName": format!("Trip {}", self.trip_id),
            "username": null,
        })
    }
}

impl Default for TripRegistrationFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_many(count: usize) -> Value {
    Value::Array((0..count).map(|_| TripRegistrationFactory::new().build()).collect())
}

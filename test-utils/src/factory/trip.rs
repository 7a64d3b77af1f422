use serde_json::{json, Value};

use crate::factory::helpers::next_id;

pub struct TripFactory {
    id: i64,
    name: String,
    destination_id: i64,
    price: f64,
    capacity: i64,
    available_spots: i64,
}

impl TripFactory {
    /// Defaults: a week-long trip in June 2025, 10 spots, all available.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Trip {}", id),
            destination_id: 1,
            price: 1200.0,
            capacity: 10,
            available_spots: 10,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn destination_id(mut self, destination_id: i64) -> Self {
        self.destination_id = destination_id;
        self
    }

    pub fn available_spots(mut self, available_spots: i64) -> Self {
        self.available_spots = available_spots;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": "A guided trip",
            "startDate": "2025-06-01T00:00:00",
            "endDate": "2025-06-07T00:00:00",
            "price": self.price,
            "capacity": self.capacity,
            "availableSpots": self.available_spots,
            "destinationId": self.destination_id,
            "destinationName": null,
            "imageUrl": null,
        })
    }
}

impl Default for TripFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_many(count: usize) -> Value {
    Value::Array((0..count).map(|_| TripFactory::new().build()).collect())
}

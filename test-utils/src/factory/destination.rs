use serde_json::{json, Value};

use crate::factory::helpers::next_id;

pub struct DestinationFactory {
    id: i64,
    name: String,
    country: String,
    city: String,
}

impl DestinationFactory {
    /// Defaults: name `Destination {id}` in Lisbon, Portugal.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Destination {}", id),
            country: "Portugal".to_string(),
            city: "Lisbon".to_string(),
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

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": format!("All about {}", self.name),
            "country": self.country,
            "city": self.city,
            "imageUrl": null,
        })
    }
}

impl Default for DestinationFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON array of `count` default destinations.
pub fn create_many(count: usize) -> Value {
    Value::Array((0..count).map(|_| DestinationFactory::new().build()).collect())
}

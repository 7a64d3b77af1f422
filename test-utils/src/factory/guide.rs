use serde_json::{json, Value};

use crate::factory::helpers::next_id;

pub struct GuideFactory {
    id: i64,
    first_name: String,
    last_name: String,
    years_of_experience: i64,
}

impl GuideFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            first_name: "Guide".to_string(),
            last_name: id.to_string(),
            years_of_experience: 5,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn names(mut self, first: &str, last: &str) -> Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": format!("guide{}@example.com", self.id),
            "phone": null,
            "bio": null,
            "yearsOfExperience": self.years_of_experience,
        })
    }
}

impl Default for GuideFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_many(count: usize) -> Value {
    Value::Array((0..count).map(|_| GuideFactory::new().build()).collect())
}

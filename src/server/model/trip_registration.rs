use serde::Deserialize;

use crate::{model::trip_registration::CreateTripRegistrationDto, server::model::number};

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct TripRegistrationForm {
    pub number_of_participants: String,
}

impl TripRegistrationForm {
    pub fn validate(&self, trip_id: i32) -> Result<CreateTripRegistrationDto, String> {
        let number_of_participants: i32 =
            number(&self.number_of_participants, "Number of participants")?;

        if number_of_participants < 1 {
            return Err("At least one participant is required.".to_string());
        }

        Ok(CreateTripRegistrationDto {
            trip_id,
            number_of_participants,
        })
    }
}

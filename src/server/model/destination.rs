use serde::Deserialize;

use crate::{
    model::destination::{DestinationDto, DestinationRequestDto},
    server::model::{optional, required},
};

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DestinationForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image_url: String,
}

impl DestinationForm {
    pub fn validate(&self) -> Result<DestinationRequestDto, String> {
        Ok(DestinationRequestDto {
            name: required(&self.name, "Name")?,
            description: self.description.trim().to_string(),
            country: required(&self.country, "Country")?,
            city: self.city.trim().to_string(),
            image_url: optional(&self.image_url),
        })
    }
}

impl From<DestinationDto> for DestinationForm {
    fn from(destination: DestinationDto) -> Self {
        Self {
            name: destination.name,
            description: destination.description,
            country: destination.country,
            city: destination.city,
            image_url: destination.image_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_and_country() {
        let form = DestinationForm {
            name: "Lisbon".to_string(),
            ..DestinationForm::default()
        };

        assert_eq!(form.validate().unwrap_err(), "Country is required.");
    }

    #[test]
    fn blank_image_url_becomes_none() {
        let form = DestinationForm {
            name: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            image_url: "  ".to_string(),
            ..DestinationForm::default()
        };

        assert_eq!(form.validate().unwrap().image_url, None);
    }
}

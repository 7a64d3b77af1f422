use serde::Deserialize;

use crate::{
    model::guide::{GuideDto, GuideRequestDto},
    server::model::{number, optional, required},
};

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct GuideForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Blank means no experience yet.
    pub years_of_experience: String,
}

impl GuideForm {
    pub fn validate(&self) -> Result<GuideRequestDto, String> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = required(&self.email, "Email")?;

        let years_of_experience: i32 = match optional(&self.years_of_experience) {
            Some(years) => number(&years, "Years of experience")?,
            None => 0,
        };
        if years_of_experience < 0 {
            return Err("Years of experience cannot be negative.".to_string());
        }

        Ok(GuideRequestDto {
            first_name,
            last_name,
            email,
            phone: optional(&self.phone),
            bio: optional(&self.bio),
            years_of_experience,
        })
    }
}

impl From<GuideDto> for GuideForm {
    fn from(guide: GuideDto) -> Self {
        Self {
            first_name: guide.first_name,
            last_name: guide.last_name,
            email: guide.email,
            phone: guide.phone.unwrap_or_default(),
            bio: guide.bio.unwrap_or_default(),
            years_of_experience: guide.years_of_experience.to_string(),
        }
    }
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::{
    model::trip::{TripDto, TripRequestDto},
    server::model::{number, optional, required},
};

/// Date format used by `<input type="date">`.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Every field is text so that blank or malformed input reaches `validate()` instead of
/// failing body extraction.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct TripForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub price: String,
    pub capacity: String,
    /// Empty when the destination picker had no options.
    pub destination_id: String,
    pub image_url: String,
}

impl TripForm {
    pub fn validate(&self) -> Result<TripRequestDto, String> {
        let name = required(&self.name, "Name")?;
        let start_date = parse_date(&self.start_date, "Start date")?;
        let end_date = parse_date(&self.end_date, "End date")?;

        if end_date < start_date {
            return Err("End date cannot be before the start date.".to_string());
        }

        let price: f64 = number(&self.price, "Price")?;
        if !price.is_finite() {
            return Err("Price must be a number.".to_string());
        }
        if price < 0.0 {
            return Err("Price cannot be negative.".to_string());
        }

        let capacity: i32 = number(&self.capacity, "Capacity")?;
        if capacity < 1 {
            return Err("Capacity must be at least 1.".to_string());
        }

        let destination_id = self
            .destination_id
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id >= 1)
            .ok_or_else(|| "Please select a destination.".to_string())?;

        Ok(TripRequestDto {
            name,
            description: self.description.trim().to_string(),
            start_date,
            end_date,
            price,
            capacity,
            destination_id,
            image_url: optional(&self.image_url),
        })
    }
}

impl From<TripDto> for TripForm {
    fn from(trip: TripDto) -> Self {
        Self {
            name: trip.name,
            description: trip.description,
            start_date: trip.start_date.format(FORM_DATE_FORMAT).to_string(),
            end_date: trip.end_date.format(FORM_DATE_FORMAT).to_string(),
            price: trip.price.to_string(),
            capacity: trip.capacity.to_string(),
            destination_id: trip.destination_id.to_string(),
            image_url: trip.image_url.unwrap_or_default(),
        }
    }
}

fn parse_date(value: &str, label: &str) -> Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| format!("{} must be a valid date.", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TripForm {
        TripForm {
            name: "Alps".to_string(),
            description: String::new(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-07".to_string(),
            price: "899.50".to_string(),
            capacity: "12".to_string(),
            destination_id: "3".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn parses_dates_at_midnight() {
        let dto = form().validate().unwrap();

        assert_eq!(dto.start_date.to_string(), "2025-06-01 00:00:00");
        assert_eq!(dto.end_date.to_string(), "2025-06-07 00:00:00");
    }

    #[test]
    fn rejects_end_before_start() {
        let mut form = form();
        form.end_date = "2025-05-30".to_string();

        assert_eq!(
            form.validate().unwrap_err(),
            "End date cannot be before the start date."
        );
    }

    #[test]
    fn rejects_unparseable_date() {
        let mut form = form();
        form.start_date = "next week".to_string();

        assert_eq!(form.validate().unwrap_err(), "Start date must be a valid date.");
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut form = form();
        form.capacity = "0".to_string();

        assert!(form.validate().is_err());
    }

    #[test]
    fn parses_numeric_fields() {
        let dto = form().validate().unwrap();

        assert_eq!(dto.price, 899.5);
        assert_eq!(dto.capacity, 12);
        assert_eq!(dto.destination_id, 3);
    }

    #[test]
    fn rejects_blank_price() {
        let mut form = form();
        form.price = String::new();

        assert_eq!(form.validate().unwrap_err(), "Price must be a number.");
    }

    #[test]
    fn rejects_non_finite_price() {
        let mut form = form();
        form.price = "NaN".to_string();

        assert_eq!(form.validate().unwrap_err(), "Price must be a number.");
    }

    #[test]
    fn requires_destination() {
        let mut form = form();
        form.destination_id = String::new();

        assert_eq!(form.validate().unwrap_err(), "Please select a destination.");
    }
}

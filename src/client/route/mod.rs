//! Page components, one module per area of the site.

pub mod destination;
pub mod error;
pub mod guide;
pub mod home;
pub mod login;
pub mod logout;
pub mod register;
pub mod registration;
pub mod trip;

use chrono::NaiveDateTime;

pub(crate) fn format_date(date: &NaiveDateTime) -> String {
    date.format("%d %b %Y").to_string()
}

pub(crate) fn format_price(price: f64) -> String {
    format!("€{:.2}", price)
}

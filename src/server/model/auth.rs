use serde::Deserialize;

use crate::{
    model::auth::RegisterDto,
    server::model::{optional, required},
};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterDto, String> {
        let username = required(&self.username, "Username")?;
        let email = required(&self.email, "Email")?;

        if !email.contains('@') {
            return Err("Email address is not valid.".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LEN
            ));
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.".to_string());
        }

        Ok(RegisterDto {
            username,
            email,
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: optional(&self.phone),
            address: optional(&self.address),
        })
    }

    /// Copy of the form safe to echo back into the page.
    pub fn without_passwords(&self) -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegisterForm {
        RegisterForm {
            username: " ann ".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone: "".to_string(),
            address: " Main St 1 ".to_string(),
        }
    }

    #[test]
    fn builds_register_dto() {
        let dto = form().validate().unwrap();

        assert_eq!(dto.username, "ann");
        assert_eq!(dto.phone, None);
        assert_eq!(dto.address.as_deref(), Some("Main St 1"));
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let mut form = form();
        form.confirm_password = "other12".to_string();

        assert_eq!(form.validate().unwrap_err(), "Passwords do not match.");
    }

    #[test]
    fn rejects_short_password() {
        let mut form = form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();

        assert!(form.validate().unwrap_err().contains("at least 6"));
    }

    #[test]
    fn rejects_missing_username() {
        let mut form = form();
        form.username = "   ".to_string();

        assert_eq!(form.validate().unwrap_err(), "Username is required.");
    }

    #[test]
    fn echo_drops_passwords() {
        let echoed = form().without_passwords();

        assert!(echoed.password.is_empty());
        assert!(echoed.confirm_password.is_empty());
        assert_eq!(echoed.email, "ann@example.com");
    }
}

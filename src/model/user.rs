use serde::{Deserialize, Serialize};

/// User record as returned by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserDto {
    /// Display name for the user.
    ///
    /// Falls back to the username when neither name part is set, otherwise joins first and
    /// last name with a single space and trims the result. Evaluated on every call.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();

        if first.is_empty() && last.is_empty() {
            return self.username.clone();
        }

        format!("{} {}", first, last).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> UserDto {
        UserDto {
            id: 1,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            phone: None,
            address: None,
            is_admin: false,
        }
    }

    #[test]
    fn full_name_falls_back_to_username_when_names_empty() {
        assert_eq!(user(Some(""), Some("")).full_name(), "bob");
    }

    #[test]
    fn full_name_falls_back_to_username_when_names_absent() {
        assert_eq!(user(None, None).full_name(), "bob");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(user(Some("Ann"), Some("Lee")).full_name(), "Ann Lee");
    }

    #[test]
    fn full_name_trims_when_one_part_missing() {
        assert_eq!(user(Some("Ann"), None).full_name(), "Ann");
        assert_eq!(user(Some(""), Some("Lee")).full_name(), "Lee");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let user: UserDto = serde_json::from_str(
            r#"{"id":7,"username":"ann","email":"ann@example.com","firstName":"Ann","lastName":"Lee","isAdmin":true}"#,
        )
        .unwrap();

        assert_eq!(user.id, 7);
        assert!(user.is_admin);
        assert_eq!(user.phone, None);
        assert_eq!(user.full_name(), "Ann Lee");
    }
}

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for backend user payloads.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new().username("ann").names("Ann", "Lee").build();
/// ```
pub struct UserFactory {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    is_admin: bool,
}

impl UserFactory {
    /// Defaults: username `user{id}`, empty names, not admin.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            username: format!("user{}", id),
            first_name: String::new(),
            last_name: String::new(),
            is_admin: false,
        }
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn names(mut self, first: &str, last: &str) -> Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": format!("{}@example.com", self.username),
            "firstName": self.first_name,
            "lastName": self.last_name,
            "phone": null,
            "address": null,
            "isAdmin": self.is_admin,
        })
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Login/register response carrying `token` and a default user.
pub fn auth_response(token: &str, user: Value) -> Value {
    json!({ "token": token, "user": user })
}

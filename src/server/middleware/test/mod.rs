use crate::{
    model::user::UserDto,
    server::middleware::session::SessionUser,
};


fn session_user(token: &str, username: &str) -> SessionUser {
    SessionUser {
        token: token.to_string(),
        user: UserDto {
            id: 1,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            first_name: None,
            last_name: None,
            phone: None,
            address: None,
            is_admin: false,
        },
    }
}

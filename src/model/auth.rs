use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Successful login or registration response: bearer token plus the signed-in user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

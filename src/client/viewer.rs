use crate::model::user::UserDto;

/// Who is looking at the page, as far as the header is concerned.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    SignedIn {
        display_name: String,
        is_admin: bool,
    },
}

impl Viewer {
    pub fn from_user(user: Option<&UserDto>) -> Self {
        match user {
            Some(user) => Self::SignedIn {
                display_name: user.full_name(),
                is_admin: user.is_admin,
            },
            None => Self::Anonymous,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SignedIn { is_admin: true, .. })
    }
}

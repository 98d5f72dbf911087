use serde::{Deserialize, Serialize};

/// A persisted user as seen by the authentication code. Read-only outside the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl From<entity::user::Model> for User {
    fn from(model: entity::user::Model) -> Self {
        User {
            username: model.username,
            password: model.password,
        }
    }
}

/// Body of `POST /users/authenticate`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /users`. Missing fields fall back to empty strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserToken {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub message: String,
}

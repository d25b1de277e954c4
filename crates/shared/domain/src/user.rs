//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User record held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Registry-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Rethabile"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "retha@gmail.com"))]
    pub email: String,
}

impl User {
    /// Build a record from an id and input payload.
    pub fn new(id: i64, data: UserCreate) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
        }
    }

    /// Overwrite name and email, keeping the id.
    pub fn replace(&mut self, data: UserCreate) {
        self.name = data.name;
        self.email = data.email;
    }
}

/// Input payload for creating or overwriting a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
